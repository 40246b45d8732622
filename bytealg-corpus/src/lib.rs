#![cfg_attr(not(test), no_std)]

//! Haystacks with a known number of matches, for exercising byte counters.
//!
//! [`Generator`] builds pseudo-random corpora whose match count is exact by
//! construction, and [`Fixture`] reads hand-written cases from text files.

pub mod fixture;
pub mod generator;

pub use fixture::{Fixture, ParseFixtureError, ParseFixtureErrorKind};
pub use generator::{Alphabet, Corpus, GenerateError, Generator};
