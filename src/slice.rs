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

//! Simple O(n) helper functions on slices.
//!
//! All helpers are free functions. None of them mutates its input
//! except [`reverse`]; the others return freshly allocated vectors.
//! Set-like helpers ([`distinct`], [`exclude`], [`overlap`]) use hashing
//! for the membership test and preserve the first-occurrence order of
//! the first argument.

use std::collections::HashSet;
use std::hash::Hash;

/// Reverse the slice in place.
///
/// # Example
///
/// ```
/// use rs_collect::slice;
///
/// let mut values = [1, 2, 3, 4];
/// slice::reverse(&mut values);
/// assert_eq!(values, [4, 3, 2, 1]);
/// ```
pub fn reverse<T>(s: &mut [T]) {
    let num = s.len();
    for i in 0..num / 2 {
        s.swap(i, num - 1 - i);
    }
}

/// Return the concatenation of two slices as a new vector.
pub fn extend<T: Clone>(s: &[T], ext: &[T]) -> Vec<T> {
    let mut list = Vec::with_capacity(s.len() + ext.len());
    list.extend_from_slice(s);
    list.extend_from_slice(ext);
    list
}

/// Count the occurrences of `e` in `s`.
pub fn count<T: PartialEq>(s: &[T], e: &T) -> usize {
    s.iter().filter(|v| *v == e).count()
}

/// Return `true` iff `s` contains `e`.
pub fn contains<T: PartialEq>(s: &[T], e: &T) -> bool {
    s.iter().any(|v| v == e)
}

/// Return the distinct elements of `s` in first-occurrence order.
///
/// # Example
///
/// ```
/// use rs_collect::slice;
///
/// assert_eq!(slice::distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T>(s: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(s.len());
    let mut list = vec![];
    for v in s {
        if seen.insert(v) {
            list.push(v.clone());
        }
    }
    list
}

/// Return the elements of `s` satisfying the predicate.
///
/// # Example
///
/// ```
/// use rs_collect::slice;
///
/// assert_eq!(slice::filter(&[1, 2, 3, 4, 5], |v| v % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, P>(s: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut list = vec![];
    for v in s {
        if predicate(v) {
            list.push(v.clone());
        }
    }
    list
}

/// Return the elements of `s` that are not contained in `other`.
///
/// Duplicates of kept elements are preserved.
///
/// # Example
///
/// ```
/// use rs_collect::slice;
///
/// assert_eq!(slice::exclude(&[1, 2, 2, 3, 4], &[2, 4]), vec![1, 3]);
/// ```
pub fn exclude<T>(s: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let members: HashSet<&T> = other.iter().collect();
    let mut list = vec![];
    for v in s {
        if !members.contains(v) {
            list.push(v.clone());
        }
    }
    list
}

/// Return the distinct elements of `s` that are also contained in
/// `other`, in first-occurrence order of `s`.
///
/// # Example
///
/// ```
/// use rs_collect::slice;
///
/// assert_eq!(slice::overlap(&[4, 1, 2, 4, 3], &[2, 4, 8]), vec![4, 2]);
/// ```
pub fn overlap<T>(s: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let members: HashSet<&T> = other.iter().collect();
    let mut seen = HashSet::new();
    let mut list = vec![];
    for v in s {
        if members.contains(v) && seen.insert(v) {
            list.push(v.clone());
        }
    }
    list
}
