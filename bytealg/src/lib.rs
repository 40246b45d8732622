#![cfg_attr(not(test), no_std)]

//! Counting occurrences of a byte in a byte slice or string.
//!
//! The free functions [`count`] and [`count_str`] are the portable scan.
//! [`Count`] is the interface a faster implementation plugs into; choosing
//! between implementations is left to the caller.

pub mod counter;
pub mod scan;

pub use counter::{Count, Generic};
pub use scan::{count, count_str};
