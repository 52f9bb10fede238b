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

//! A library of basic generic containers and slice utilities.
//!
//! The crate provides four self-contained container types and a handful
//! of slice helpers:
//!
//! - [`PriorityQueue`]: a binary-heap priority queue with built-in
//!   (`Greater`/`Lower`) or user-defined ordering,
//! - [`MonotoneStack`]: a stack that keeps its elements monotonic by
//!   evicting violating elements on push,
//! - [`Queue`] and [`Stack`]: plain unbounded FIFO/LIFO containers,
//! - [`slice`]: O(n) helpers such as `distinct`, `filter` and
//!   `overlap`.
//!
//! None of the containers synchronizes internal state; an instance
//! shared between threads must be serialized by the caller. Underflow
//! is not an error: operations on an empty container return `None`.

// # Core containers

pub mod monotone;
pub use self::monotone::{MonotoneStack, MonotoneType};

pub mod priqueue;
pub use self::priqueue::{PriorityQueue, PriorityType};

// # Supporting containers

pub mod queue;
pub use self::queue::Queue;

pub mod stack;
pub use self::stack::Stack;

// # Slice helpers

pub mod slice;
