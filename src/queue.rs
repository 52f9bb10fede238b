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

//! An unbounded FIFO queue.
//!
//! A thin wrapper around `VecDeque` with the ok-flag-free interface of
//! the other containers of this crate: `pop` and `front` return `None`
//! on an empty queue.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::iter::FromIterator;

/// A generic FIFO queue.
///
/// # Example
///
/// ```
/// use rs_collect::Queue;
///
/// let mut queue = Queue::new();
/// queue.push("first");
/// queue.push("second");
///
/// assert_eq!(queue.front(), Some(&"first"));
/// assert_eq!(queue.pop(), Some("first"));
/// assert_eq!(queue.pop(), Some("second"));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    list: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Return an empty queue.
    pub fn new() -> Self {
        Queue { list: VecDeque::new() }
    }

    /// Return an empty queue with preallocated space for `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            list: VecDeque::with_capacity(capacity),
        }
    }

    /// Return `true` iff the queue contains no element.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Return the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Remove all elements from the queue.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Append an element at the back of the queue.
    pub fn push(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Remove and return the element at the front of the queue, or
    /// `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Return the element at the front of the queue without removing
    /// it, or `None` if the queue is empty.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Iterate over the elements in front-to-back order.
    pub fn iter(&self) -> vec_deque::Iter<T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(list: Vec<T>) -> Self {
        Queue {
            list: VecDeque::from(list),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
