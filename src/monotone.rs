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

//! A stack that maintains a monotonic sequence of its elements.
//!
//! Pushing an element first evicts every element on top of the stack
//! that would violate the monotonicity, so after every push each pair of
//! adjacent elements `(a below b)` satisfies `compare(a, b)`. The
//! evicted run is returned by [`MonotoneStack::push`], which is the
//! classic building block of "next greater/smaller element" scans:
//! across a sequence of `n` pushes every element is evicted at most
//! once, so a push costs O(1) amortized.
//!
//! # Example
//!
//! Find for each element of a sequence the next greater element to its
//! right:
//!
//! ```
//! use rs_collect::{MonotoneStack, MonotoneType};
//!
//! let values = [2u32, 1, 2, 4, 3];
//! let mut next_greater = vec![None; values.len()];
//!
//! // stack of indices, values on the stack are kept non-increasing
//! let mut stack = MonotoneStack::with_compare(move |&top: &usize, &i: &usize| {
//!     values[top] >= values[i]
//! });
//! for i in 0..values.len() {
//!     for j in stack.push(i) {
//!         next_greater[j] = Some(values[i]);
//!     }
//! }
//!
//! assert_eq!(next_greater, vec![Some(4), Some(2), Some(4), None, None]);
//! ```

use std::fmt;

/// The built-in monotonicity directions of a [`MonotoneStack`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonotoneType {
    /// Elements increase from bottom to top.
    Increase,
    /// Elements decrease from bottom to top.
    Decrease,
}

impl Default for MonotoneType {
    /// `Increase` is the default direction.
    fn default() -> Self {
        MonotoneType::Increase
    }
}

/// The comparison predicate of a stack.
///
/// Built-in directions are plain function pointers, user supplied
/// predicates are boxed closures.
enum CompareFn<T> {
    Builtin(fn(&T, &T) -> bool),
    Custom(Box<dyn Fn(&T, &T) -> bool>),
}

impl<T> CompareFn<T> {
    /// Return `true` iff `elem` may sit directly above `top`.
    fn call(&self, top: &T, elem: &T) -> bool {
        match self {
            CompareFn::Builtin(f) => f(top, elem),
            CompareFn::Custom(f) => f(top, elem),
        }
    }
}

fn increase<T: PartialOrd>(top: &T, elem: &T) -> bool {
    top <= elem
}

fn increase_strict<T: PartialOrd>(top: &T, elem: &T) -> bool {
    top < elem
}

fn decrease<T: PartialOrd>(top: &T, elem: &T) -> bool {
    top >= elem
}

fn decrease_strict<T: PartialOrd>(top: &T, elem: &T) -> bool {
    top > elem
}

fn compare_get<T: PartialOrd>(t: MonotoneType, strict: bool) -> fn(&T, &T) -> bool {
    match (t, strict) {
        (MonotoneType::Increase, false) => increase::<T>,
        (MonotoneType::Increase, true) => increase_strict::<T>,
        (MonotoneType::Decrease, false) => decrease::<T>,
        (MonotoneType::Decrease, true) => decrease_strict::<T>,
    }
}

/// A stack enforcing a monotonic sequence from bottom to top.
///
/// The monotonicity is defined by a predicate `compare(top, elem)` that
/// returns `true` iff `elem` may be pushed on top of `top`. The
/// predicate is derived from a [`MonotoneType`] and a strictness flag
/// (for element types implementing `PartialOrd`) or supplied by the
/// caller.
pub struct MonotoneStack<T> {
    /// The stack, bottom to top.
    list: Vec<T>,
    /// `compare(top, elem)` is true iff `elem` may sit above `top`.
    compare: CompareFn<T>,
}

impl<T: PartialOrd> MonotoneStack<T> {
    /// Return an empty stack with a built-in direction.
    ///
    /// If `strict` is set, equal elements violate the monotonicity, so
    /// pushing a duplicate of the top element evicts it.
    pub fn new(t: MonotoneType, strict: bool) -> Self {
        MonotoneStack {
            list: vec![],
            compare: CompareFn::Builtin(compare_get(t, strict)),
        }
    }

    /// Return an empty stack with preallocated space for `capacity`
    /// elements.
    pub fn with_capacity(t: MonotoneType, strict: bool, capacity: usize) -> Self {
        MonotoneStack {
            list: Vec::with_capacity(capacity),
            compare: CompareFn::Builtin(compare_get(t, strict)),
        }
    }
}

impl<T> MonotoneStack<T> {
    /// Return an empty stack with an arbitrary monotonicity predicate.
    ///
    /// `compare(top, elem)` must return `true` iff `elem` may sit above
    /// `top` without violating the intended monotonicity. The strictness
    /// flag of [`MonotoneStack::new`] does not apply, strict or
    /// non-strict handling of equal elements is up to the predicate.
    pub fn with_compare<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        MonotoneStack {
            list: vec![],
            compare: CompareFn::Custom(Box::new(compare)),
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

    /// Return `true` iff `elem` could be pushed without evicting the
    /// current top.
    ///
    /// This is the guard used by [`MonotoneStack::try_push`] and has no
    /// side effects. On an empty stack it is vacuously `true`.
    pub fn check(&self, elem: &T) -> bool {
        match self.list.last() {
            Some(top) => self.compare.call(top, elem),
            None => true,
        }
    }

    /// Push `elem`, evicting every element that violates the
    /// monotonicity.
    ///
    /// Elements are popped from the top until `elem` may be pushed, then
    /// `elem` is pushed. The evicted elements are returned in the order
    /// they were popped. The returned vector is empty if nothing was
    /// evicted. A push never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_collect::{MonotoneStack, MonotoneType};
    ///
    /// let mut stack = MonotoneStack::new(MonotoneType::Increase, false);
    /// assert_eq!(stack.push(1), vec![]);
    /// assert_eq!(stack.push(4), vec![]);
    /// assert_eq!(stack.push(2), vec![4]);
    /// assert_eq!(stack.to_vec(), vec![1, 2]);
    /// ```
    pub fn push(&mut self, elem: T) -> Vec<T> {
        let mut popped = vec![];
        while !self.check(&elem) {
            if let Some(top) = self.list.pop() {
                popped.push(top);
            }
        }
        self.list.push(elem);
        popped
    }

    /// Push `elem` only if no eviction is necessary.
    ///
    /// On success the element is pushed and `Ok(())` is returned. If the
    /// push would evict the top, the stack is left untouched and the
    /// element is handed back as `Err(elem)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_collect::{MonotoneStack, MonotoneType};
    ///
    /// let mut stack = MonotoneStack::new(MonotoneType::Increase, false);
    /// assert_eq!(stack.try_push(3), Ok(()));
    /// assert_eq!(stack.try_push(1), Err(1));
    /// assert_eq!(stack.to_vec(), vec![3]);
    /// ```
    pub fn try_push(&mut self, elem: T) -> Result<(), T> {
        if self.check(&elem) {
            self.list.push(elem);
            Ok(())
        } else {
            Err(elem)
        }
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

    /// Return the stack contents, bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    /// Return a copy of the stack contents, bottom to top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.clone()
    }
}

impl<T: PartialOrd> Default for MonotoneStack<T> {
    /// An empty, non-strict `Increase` stack.
    fn default() -> Self {
        MonotoneStack::new(MonotoneType::Increase, false)
    }
}

impl<T: fmt::Debug> fmt::Debug for MonotoneStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MonotoneStack").field("list", &self.list).finish()
    }
}
