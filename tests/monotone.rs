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

use rs_collect::{MonotoneStack, MonotoneType};

use rand::prelude::*;

#[test]
fn test_increase_eviction_lists_push_by_push() {
    let mut stack = MonotoneStack::new(MonotoneType::Increase, false);

    let pushes = [3, 1, 1, 5, 2];
    let expected_evictions: Vec<Vec<i32>> = vec![vec![], vec![3], vec![], vec![], vec![5]];
    let expected_stacks: Vec<Vec<i32>> =
        vec![vec![3], vec![1], vec![1, 1], vec![1, 1, 5], vec![1, 1, 2]];

    for ((&x, evicted), state) in pushes.iter().zip(expected_evictions).zip(expected_stacks) {
        assert_eq!(stack.push(x), evicted);
        assert_eq!(stack.to_vec(), state);
    }
}

#[test]
fn test_strict_increase_evicts_duplicate_top() {
    let mut stack = MonotoneStack::new(MonotoneType::Increase, true);
    assert_eq!(stack.push(2), vec![]);
    assert_eq!(stack.push(5), vec![]);
    assert_eq!(stack.push(5), vec![5]);
    assert_eq!(stack.to_vec(), vec![2, 5]);
}

/// Reference implementation of the eviction cascade on a plain vector.
fn reference_push(list: &mut Vec<u32>, elem: u32, compare: impl Fn(u32, u32) -> bool) -> Vec<u32> {
    let mut popped = vec![];
    while let Some(&top) = list.last() {
        if compare(top, elem) {
            break;
        }
        list.pop();
        popped.push(top);
    }
    list.push(elem);
    popped
}

#[test]
fn test_random_pushes_against_reference() {
    let mut rng = SmallRng::seed_from_u64(0xda7a);

    for &(t, strict) in &[
        (MonotoneType::Increase, false),
        (MonotoneType::Increase, true),
        (MonotoneType::Decrease, false),
        (MonotoneType::Decrease, true),
    ] {
        let compare = move |top: u32, elem: u32| match (t, strict) {
            (MonotoneType::Increase, false) => top <= elem,
            (MonotoneType::Increase, true) => top < elem,
            (MonotoneType::Decrease, false) => top >= elem,
            (MonotoneType::Decrease, true) => top > elem,
        };

        let mut stack = MonotoneStack::new(t, strict);
        let mut reference = vec![];

        for _ in 0..2000 {
            let x = rng.gen_range(0..50);
            assert_eq!(stack.push(x), reference_push(&mut reference, x, compare));
            assert_eq!(stack.as_slice(), reference.as_slice());

            // the stack is monotone after every push
            for w in stack.as_slice().windows(2) {
                assert!(compare(w[0], w[1]));
            }
        }
    }
}

#[test]
fn test_try_push_leaves_stack_unchanged_on_failure() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut stack = MonotoneStack::new(MonotoneType::Decrease, false);

    for _ in 0..1000 {
        let x: u8 = rng.gen_range(0..100);
        let before = stack.to_vec();
        let eligible = stack.check(&x);

        match stack.try_push(x) {
            Ok(()) => {
                assert!(eligible);
                assert_eq!(stack.len(), before.len() + 1);
                assert_eq!(stack.top(), Some(&x));
            }
            Err(back) => {
                assert!(!eligible);
                assert_eq!(back, x);
                assert_eq!(stack.to_vec(), before);
            }
        }
    }
}

#[test]
fn test_next_smaller_element_scan() {
    // classic application: for each element the next smaller one to its
    // right, computed with a non-strict increase stack over indices
    let values = [4u32, 7, 7, 2, 9, 3];
    let mut next_smaller = vec![None; values.len()];

    let mut stack = MonotoneStack::with_compare(move |&top: &usize, &i: &usize| {
        values[top] <= values[i]
    });
    for i in 0..values.len() {
        for j in stack.push(i) {
            next_smaller[j] = Some(values[i]);
        }
    }

    assert_eq!(
        next_smaller,
        vec![Some(2), Some(2), Some(2), None, Some(3), None]
    );
}

#[test]
fn test_clear_resets_the_cascade() {
    let mut stack = MonotoneStack::new(MonotoneType::Increase, false);
    stack.push(1);
    stack.push(2);
    stack.clear();

    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    // after clear the first push is vacuously monotone again
    assert_eq!(stack.push(0), vec![]);
    assert_eq!(stack.to_vec(), vec![0]);
}
