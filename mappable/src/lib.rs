//! A uniform `map` over container-like types, driven by explicit capability records.
//!
//! A [`MappableImpl`] describes how to map over one container kind. Pick the record for the
//! container at hand and pass it to [`map`] (or [`flap`]) alongside the element function:
//!
//! ```rust
//! use mappable::{flap, map, option, vec};
//!
//! assert_eq!(map(&vec(), |n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
//! assert_eq!(map(&option(), |n: i32| n * 2, None), None);
//!
//! let fs: Vec<fn(&str) -> usize> = vec![str::len, |s: &str| s.matches('l').count()];
//! assert_eq!(flap(&vec(), fs, "hello"), vec![5, 2]);
//! ```
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod frame;
mod instances;
mod mappable;

pub use crate::frame::{frame, MappableFrame, PartiallyApplied};
#[cfg(feature = "std")]
pub use crate::instances::hash_map;
pub use crate::instances::{array, boxed, btree_map, option, pair, result, vec, vec_deque};
pub use crate::mappable::{compose, custom, flap, map, MapFn, MappableImpl};
