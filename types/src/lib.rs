//! Core domain types for fibseq.
//!
//! This crate contains the sequence generator and its supporting types with no IO
//! and minimal dependencies. Everything here can be used from any layer of the
//! application.

mod sequence;

pub use sequence::{Fibonacci, Seed, SequenceError};
