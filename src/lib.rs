#![no_std]
#![deny(unsafe_code)]

//! Plain-seq - handwritten sequence traversal primitives
//!
//! # Overview
//!
//! Four standalone reimplementations of the classic collection-processing
//! primitives, written as plain index loops instead of delegating to the
//! standard library's iterator adapters of the same names:
//!
//! - [`find`] - first element satisfying a predicate, or [`None`]
//! - [`filter`] - order-preserving subset satisfying a predicate
//! - [`map`] - length-preserving transformation
//! - [`for_each`] - side-effecting iteration
//!
//! All four share one iteration contract: the callback receives the element,
//! its index, and the full sequence, in that order. The functions are pure
//! (except for whatever effects the caller's closure performs), take only a
//! shared borrow of the input, and hold no state between calls.
//!
//! # Quick Start
//!
//! ```
//! use plain_seq::{filter, find, for_each, map};
//!
//! let nums = [10, 20, 30];
//!
//! assert_eq!(find(&nums, |e, _, _| *e == 20), Some(&20));
//! assert_eq!(filter(&nums, |e, _, _| *e >= 20), vec![&20, &30]);
//! assert_eq!(map(&nums, |e, _, _| e + 1), vec![11, 21, 31]);
//!
//! let mut seen = Vec::new();
//! for_each(&nums, |e, i, seq| seen.push(format!("{} of {}: {e}", i + 1, seq.len())));
//! assert_eq!(seen[0], "1 of 3: 10");
//! ```

extern crate alloc;

mod filter;
mod find;
mod for_each;
mod map;

pub use filter::filter;
pub use find::find;
pub use for_each::for_each;
pub use map::map;
