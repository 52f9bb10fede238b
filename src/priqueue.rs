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

//! A priority queue backed by a binary heap.
//!
//! The queue stores its elements in a `Vec` in the usual implicit
//! binary-heap layout (the children of the element at index `i` live at
//! `2i+1` and `2i+2`). The heap order is defined by a comparison
//! predicate `compare(src, des)` that returns `true` iff `src` outranks
//! `des`. The predicate is either derived from a [`PriorityType`] (for
//! element types implementing `PartialOrd`) or supplied by the caller,
//! which allows priority queues over types without a natural order.
//!
//! # Example
//!
//! ```
//! use rs_collect::{PriorityQueue, PriorityType};
//!
//! let mut queue = PriorityQueue::new(PriorityType::Greater);
//! for x in [5, 1, 8, 3] {
//!     queue.push(x);
//! }
//!
//! assert_eq!(queue.top(), Some(&8));
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop(), None);
//! ```

use std::fmt;
use std::iter::FromIterator;

/// The built-in orderings of a [`PriorityQueue`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorityType {
    /// The largest element has the highest priority (max-heap).
    Greater,
    /// The smallest element has the highest priority (min-heap).
    Lower,
}

impl Default for PriorityType {
    /// `Greater` is the default ordering.
    fn default() -> Self {
        PriorityType::Greater
    }
}

/// The comparison predicate of a queue.
///
/// Built-in orderings are plain function pointers, user supplied
/// predicates are boxed closures.
enum CompareFn<T> {
    Builtin(fn(&T, &T) -> bool),
    Custom(Box<dyn Fn(&T, &T) -> bool>),
}

impl<T> CompareFn<T> {
    /// Return `true` iff `src` has strictly higher priority than `des`.
    fn call(&self, src: &T, des: &T) -> bool {
        match self {
            CompareFn::Builtin(f) => f(src, des),
            CompareFn::Custom(f) => f(src, des),
        }
    }
}

fn greater<T: PartialOrd>(src: &T, des: &T) -> bool {
    src > des
}

fn lower<T: PartialOrd>(src: &T, des: &T) -> bool {
    src < des
}

fn compare_get<T: PartialOrd>(t: PriorityType) -> fn(&T, &T) -> bool {
    match t {
        PriorityType::Greater => greater::<T>,
        PriorityType::Lower => lower::<T>,
    }
}

/// A binary-heap priority queue.
///
/// `pop` always returns the element of highest priority currently in the
/// queue. Ties are broken arbitrarily. The queue never fails on
/// underflow, `pop` and `top` simply return `None` on an empty queue.
pub struct PriorityQueue<T> {
    /// The elements in implicit binary-heap order.
    list: Vec<T>,
    /// `compare(src, des)` is true iff `src` outranks `des`.
    compare: CompareFn<T>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Return an empty queue with the given built-in ordering.
    pub fn new(t: PriorityType) -> Self {
        PriorityQueue {
            list: vec![],
            compare: CompareFn::Builtin(compare_get(t)),
        }
    }

    /// Return an empty queue with preallocated space for `capacity`
    /// elements.
    pub fn with_capacity(t: PriorityType, capacity: usize) -> Self {
        PriorityQueue {
            list: Vec::with_capacity(capacity),
            compare: CompareFn::Builtin(compare_get(t)),
        }
    }

    /// Build a queue from an existing vector in O(n).
    ///
    /// The vector is heapified bottom-up, so this is cheaper than
    /// pushing the elements one by one.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_collect::{PriorityQueue, PriorityType};
    ///
    /// let mut queue = PriorityQueue::from_vec(PriorityType::Lower, vec![5, 1, 8, 3]);
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(3));
    /// ```
    pub fn from_vec(t: PriorityType, list: Vec<T>) -> Self {
        let mut queue = PriorityQueue {
            list,
            compare: CompareFn::Builtin(compare_get(t)),
        };
        queue.heapify();
        queue
    }
}

impl<T> PriorityQueue<T> {
    /// Return an empty queue ordered by an arbitrary predicate.
    ///
    /// `compare(src, des)` must return `true` iff `src` has strictly
    /// higher priority than `des`. This allows priority queues over
    /// element types without a natural order.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_collect::PriorityQueue;
    ///
    /// struct Task {
    ///     name: &'static str,
    ///     cost: u32,
    /// }
    ///
    /// // cheapest task first
    /// let mut queue = PriorityQueue::with_compare(|src: &Task, des: &Task| src.cost < des.cost);
    /// queue.push(Task { name: "deploy", cost: 10 });
    /// queue.push(Task { name: "build", cost: 4 });
    ///
    /// assert_eq!(queue.pop().map(|t| t.name), Some("build"));
    /// ```
    pub fn with_compare<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        PriorityQueue {
            list: vec![],
            compare: CompareFn::Custom(Box::new(compare)),
        }
    }

    /// Build a queue from an existing vector and an arbitrary predicate
    /// in O(n).
    pub fn from_vec_with_compare<F>(list: Vec<T>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        let mut queue = PriorityQueue {
            list,
            compare: CompareFn::Custom(Box::new(compare)),
        };
        queue.heapify();
        queue
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

    /// Return the element of highest priority without removing it.
    ///
    /// Returns `None` iff the queue is empty. `top` never mutates the
    /// queue and equals the value the next `pop` would return.
    pub fn top(&self) -> Option<&T> {
        self.list.first()
    }

    /// Push an element onto the queue in O(log n).
    ///
    /// The element is appended to the backing vector and sifted up
    /// until the heap order is restored.
    pub fn push(&mut self, e: T) {
        self.list.push(e);
        self.sift_up(self.list.len() - 1);
    }

    /// Remove and return the element of highest priority in O(log n).
    ///
    /// Returns `None` iff the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.list.len().checked_sub(1)?;
        self.list.swap(0, last);
        let e = self.list.pop()?;
        self.sift_down(0);
        Some(e)
    }

    /// Move the element at `node` towards the root until its parent
    /// outranks it or the root is reached.
    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.compare.call(&self.list[node], &self.list[parent]) {
                self.list.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `root` towards the leaves, always swapping
    /// with the higher-priority child, until no child outranks it.
    fn sift_down(&mut self, mut root: usize) {
        let num = self.list.len();
        loop {
            let left = 2 * root + 1;
            let right = left + 1;
            let mut largest = root;
            if left < num && self.compare.call(&self.list[left], &self.list[largest]) {
                largest = left;
            }
            if right < num && self.compare.call(&self.list[right], &self.list[largest]) {
                largest = right;
            }
            if largest == root {
                break;
            }
            self.list.swap(root, largest);
            root = largest;
        }
    }

    /// Establish the heap order on the whole backing vector (Floyd's
    /// bottom-up construction, O(n)).
    fn heapify(&mut self) {
        for i in (0..self.list.len() / 2).rev() {
            self.sift_down(i);
        }
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    /// An empty queue with `Greater` ordering.
    fn default() -> Self {
        PriorityQueue::new(PriorityType::Greater)
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityQueue<T> {
    /// Collect into a queue with `Greater` ordering.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vec(PriorityType::Greater, iter.into_iter().collect())
    }
}

impl<T> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for e in iter {
            self.push(e);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PriorityQueue").field("list", &self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{PriorityQueue, PriorityType};

    #[test]
    fn test_greater_pops_descending() {
        let mut queue = PriorityQueue::new(PriorityType::Greater);
        for x in vec![5, 1, 8, 3] {
            queue.push(x);
        }
        assert_eq!(queue.len(), 4);

        let mut popped = vec![];
        while let Some(x) = queue.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![8, 5, 3, 1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_lower_pops_ascending() {
        let mut queue = PriorityQueue::new(PriorityType::Lower);
        for x in vec![5, 1, 8, 3] {
            queue.push(x);
        }

        let mut popped = vec![];
        while let Some(x) = queue.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_top_matches_next_pop() {
        let mut queue = PriorityQueue::new(PriorityType::Greater);
        for x in vec![2, 9, 4, 7, 7, 0] {
            queue.push(x);
            let top = queue.top().cloned();
            assert_eq!(top.is_some(), !queue.is_empty());
        }
        while !queue.is_empty() {
            let top = queue.top().cloned();
            assert_eq!(queue.pop(), top);
        }
    }

    #[test]
    fn test_pop_from_empty() {
        let mut queue = PriorityQueue::<i32>::new(PriorityType::Greater);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.top(), None);
        assert_eq!(queue.len(), 0);

        queue.push(1);
        assert_eq!(queue.pop(), Some(1));
        // drained queue behaves like a fresh one
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_size_conservation() {
        let mut queue = PriorityQueue::new(PriorityType::Lower);
        for k in 0..100 {
            queue.push(k * 37 % 100);
            assert_eq!(queue.len(), k as usize + 1);
        }
        for m in 0..60 {
            queue.pop();
            assert_eq!(queue.len(), 100 - m - 1);
        }
    }

    #[test]
    fn test_from_vec_is_a_heap() {
        let mut queue = PriorityQueue::from_vec(PriorityType::Greater, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let mut popped = vec![];
        while let Some(x) = queue.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_custom_compare() {
        #[derive(Debug, PartialEq)]
        struct Job {
            id: u32,
            deadline: u32,
        }

        let mut queue =
            PriorityQueue::with_compare(|src: &Job, des: &Job| src.deadline < des.deadline);
        queue.push(Job { id: 1, deadline: 30 });
        queue.push(Job { id: 2, deadline: 10 });
        queue.push(Job { id: 3, deadline: 20 });

        assert_eq!(queue.pop().map(|j| j.id), Some(2));
        assert_eq!(queue.pop().map(|j| j.id), Some(3));
        assert_eq!(queue.pop().map(|j| j.id), Some(1));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut queue: PriorityQueue<_> = vec![4, 2, 7].into_iter().collect();
        queue.extend(vec![9, 1]);

        let mut popped = vec![];
        while let Some(x) = queue.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![9, 7, 4, 2, 1]);
    }
}
