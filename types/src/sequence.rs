use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use thiserror::Error;

// ============================================================================
// Seed
// ============================================================================

/// Initial `(previous, current)` pair a generator starts from.
///
/// Missing fields deserialize to their half of the standard `(0, 1)` seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub previous: u64,
    pub current: u64,
}

impl Seed {
    #[must_use]
    pub const fn new(previous: u64, current: u64) -> Self {
        Self { previous, current }
    }
}

impl Default for Seed {
    /// The standard seed, `(0, 1)`.
    fn default() -> Self {
        Self::new(0, 1)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("fibonacci sequence overflowed u64 after {produced} terms")]
    Overflow { produced: u64 },
}

// ============================================================================
// Generator
// ============================================================================

/// Stateful Fibonacci generator.
///
/// Each call to [`Fibonacci::next_value`] returns the pre-update `previous` and
/// advances `(previous, current)` to `(current, previous + current)`. From the
/// default seed this yields 0, 1, 1, 2, 3, 5, ...
///
/// Arithmetic is checked. When the next state would not fit in a `u64` the
/// generator reports [`SequenceError::Overflow`] and stops advancing, so from
/// the default seed it yields F(0) through F(91) and then fails on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    previous: u64,
    current: u64,
    produced: u64,
}

impl Fibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(Seed::default())
    }

    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            previous: seed.previous,
            current: seed.current,
            produced: 0,
        }
    }

    /// Produce the next value and advance the state.
    pub fn next_value(&mut self) -> Result<u64, SequenceError> {
        let next = self
            .previous
            .checked_add(self.current)
            .ok_or(SequenceError::Overflow {
                produced: self.produced,
            })?;

        let value = self.previous;
        self.previous = self.current;
        self.current = next;
        self.produced += 1;
        Ok(value)
    }

    /// Number of values yielded so far.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced
    }

    #[must_use]
    pub fn previous(&self) -> u64 {
        self.previous
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }
}

// Overflow leaves the state untouched, so once `next` returns `None` it always will.
impl FusedIterator for Fibonacci {}
