// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! An unbounded LIFO stack.
//!
//! A thin wrapper around `Vec` with amortized O(1) push and pop. `pop`
//! and `top` return `None` on an empty stack.

use std::iter::FromIterator;
use std::slice;

/// A generic LIFO stack.
///
/// # Example
///
/// ```
/// use rs_collect::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    list: Vec<T>,
}

impl<T> Stack<T> {
    /// Return an empty stack.
    pub fn new() -> Self {
        Stack { list: vec![] }
    }

    /// Return an empty stack with preallocated space for `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            list: Vec::with_capacity(capacity),
        }
    }

    /// Return `true` iff the stack contains no element.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Return the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Remove all elements from the stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Push an element on top of the stack.
    pub fn push(&mut self, item: T) {
        self.list.push(item);
    }

    /// Remove and return the top element, or `None` if the stack is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop()
    }

    /// Return the top element without removing it, or `None` if the
    /// stack is empty.
    pub fn top(&self) -> Option<&T> {
        self.list.last()
    }

    /// Return a mutable reference to the top element, or `None` if the
    /// stack is empty.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.list.last_mut()
    }

    /// Return the stack contents, bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    /// Iterate over the elements in bottom-to-top order.
    pub fn iter(&self) -> slice::Iter<T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of the vector becomes the top of the stack.
    fn from(list: Vec<T>) -> Self {
        Stack { list }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterate in bottom-to-top order.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
