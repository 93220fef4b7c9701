//! Hailstone Sequence Engine
//!
//! Computes Collatz ("hailstone") sequences: starting from a positive
//! integer, repeatedly halve even values and map odd values to 3n + 1
//! until the value 1 is produced.
//!
//! # Semantics
//!
//! - Step 0 of every sequence is the starting value itself.
//! - Generation stops at the first 1 (included), or at an explicit step
//!   cap. A capped sequence carries a `truncated` flag; truncation is a
//!   normal outcome, not an error.
//! - The engine is a pure function of its inputs: no shared state, no
//!   side effects, identical results on identical calls.
//!
//! # Numeric Width
//!
//! Values are `u64`. The odd rule uses checked arithmetic, so a `3n + 1`
//! that would exceed `u64::MAX` fails with [`Error::Overflow`] instead of
//! wrapping. No partial sequence is returned on overflow.
//!
//! # Example
//!
//! ```
//! use hailstone_core::compute;
//!
//! let seq = compute(6)?;
//! assert_eq!(seq.values(), &[6, 3, 10, 5, 16, 8, 4, 2, 1]);
//! assert!(!seq.is_truncated());
//! # Ok::<(), hailstone_core::Error>(())
//! ```

mod error;
mod rule;
mod sequence;

pub use error::{Error, Result};
pub use rule::{next_value, parity_rule, Operation};
pub use sequence::{compute, compute_capped, Sequence, Step};
