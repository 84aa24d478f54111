//! # Strategy Vector
//!
//! The `strategy_vec` crate provides a `#[no_std]` growable array, `Vector`, built directly
//! on raw memory. Getting memory and building or dropping the elements in it is left to
//! a pluggable `AllocStrategy`, while the array only keeps track of its length and capacity.
//!
//! Every operation that can fail returns an error instead of panicking:
//! * `OutOfMemory` when the strategy can't hand out a region.
//! * `ConstructionFailed` when a fallible element constructor reports an error.
//! * `IndexOutOfRange` from the bounds checked `at`.
//!
//! On failure `reserve` and `push_back` leave the array exactly as it was before the call,
//! while `assign` and the constructors never leave a partially filled array behind.
//!
//! ```
//! use strategy_vec::Vector;
//!
//! let mut v = Vector::new();
//! v.push_back(1).unwrap();
//! v.push_back(2).unwrap();
//! v.push_back(2).unwrap();
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.as_slice(), &[1, 2, 2]);
//! assert!(v.at(3).is_err());
//! ```
//!
//! # Feature Flags
//! * `std_alloc` (default) - Enables `Global`, a strategy using the standard allocator
//! APIs. It is also the default strategy of `Vector`.
//!
//! * `alloc_api2` - Enables `Api2`, which lets any `allocator-api2` allocator be used
//! as a strategy.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod types;
mod vector;

pub use vector::Iter;
pub use vector::Vector;
