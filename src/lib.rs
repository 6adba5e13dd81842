//! A set of small non-negative integers packed into a single `u64`.
//! `no_std` (needs `alloc`), no `unsafe`.
//!
//! Bit `i` of the word is set if and only if `i` is a member, so every set
//! is a plain `Copy` value and all operations are pure.
//!
//! [`BitSet`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use tiny_bitset::BitSet;
//!
//! let set = BitSet::from_slice(&[1, 4, 10])?;
//! assert_eq!(set.bits(), 1042);
//! assert!(set.contains(4)?);
//!
//! let smaller = set.remove_member(10)?;
//! assert_eq!(smaller.to_vec(), [1, 4]);
//! assert_eq!(set.len(), 3); // unchanged
//! # Ok::<(), tiny_bitset::Error>(())
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Members in `0..64`; negative or too large values are reported as
//!   [`Error::InvalidMember`] instead of panicking
//! - Construction from slices, iterators or in `const` context
//! - Set algebra: [`union`](BitSet::union) (`|`) and
//!   [`intersection`](BitSet::intersection) (`&`)
//! - Ascending iteration via [`iter()`](BitSet::iter) and `to_vec()`
//! - Power set enumeration grouped by cardinality, bounded by
//!   [`MAX_POWER_SET_MEMBERS`]
//!
//! # Diagnostics
//!
//! Rejected members and power set requests are reported through [`tracing`].
//! The library never installs a subscriber.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitset;
mod error;

pub use bitset::{BitSet, MAX_POWER_SET_MEMBERS, Member, Members};
pub use error::{Error, Result};
