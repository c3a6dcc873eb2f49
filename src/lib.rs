//! A compact set of dense non-negative integers packed into machine words.
//!
//! This crate provides [`IntSet`], a set whose storage is one bit per
//! integer: bit `b` of word `w` records membership of `w * WORD_BITS + b`.
//! Memory use is proportional to the largest member, which makes it a good
//! fit for dense sets of small integers and a poor one for sparse sets of
//! large integers.
//!
//! # Features
//!
//! - **Single and ranged** insertion and removal with word-aligned masks
//! - **In-place set algebra** (intersection, difference, union, symmetric
//!   difference) between sets of differing lengths
//! - **Ascending scans** via [`IntSet::next_after`] and lazy iterators
//! - **A portable byte encoding** (see [`IntSet::to_bytes`])
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dense_intset::IntSet;
//!
//! let mut set = IntSet::new();
//! set.insert(2);
//! set.insert(42);
//! set.insert(13);
//! set.insert_range(100, 104);
//!
//! assert!(set.contains(42));
//! assert_eq!(set.cardinality(), 7);
//! assert_eq!(set.max(), Some(103));
//!
//! // Iterate from a starting point
//! let tail: Vec<_> = set.iter_from(14).collect();
//! assert_eq!(tail, vec![42, 100, 101, 102, 103]);
//!
//! // Set operations
//! let mut other = IntSet::new();
//! other.insert(13);
//! other.insert(500);
//!
//! set.intersection_with(&other);
//! assert_eq!(set.to_string(), "[13]");
//! ```
//!
//! # Indices
//!
//! Methods that take an integer use `isize`, so the negative domain is
//! expressible. Inserting a negative integer is a programmer error:
//! [`IntSet::insert`] panics and [`IntSet::try_insert`] returns an
//! [`IndexError`]. Removing or testing a negative integer is a no-op.
//! Members come back as `usize`.
//!
//! # Word Width
//!
//! The word is `usize`, so [`WORD_BITS`] is 32 or 64 depending on the
//! target. Other targets are rejected at compile time. The byte encoding is
//! the same for both widths.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod codec;
mod intset;
mod iter;
mod set_ops;
pub mod storage;
pub mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use rkyv::{ArchivedIntSet, IntSetResolver};

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use intset::IntSet;
pub use iter::{IntoIter, Iter, Members};
pub use storage::{WORD_BITS, WORD_BYTES, Word};
pub use traits::IndexError;
