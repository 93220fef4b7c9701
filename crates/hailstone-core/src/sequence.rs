//! Sequence generation: iterate the Collatz rule until 1 or a step cap.
//!
//! The cap is always an explicit parameter. The engine ships no default;
//! a deployment default belongs to whatever layer calls in.

use crate::error::{Error, Result};
use crate::rule::{next_value, parity_rule, Operation};

/// A generated hailstone sequence.
///
/// Index 0 is always the starting value. When not truncated the final
/// value is exactly 1 and every earlier value is greater than 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    values: Vec<u64>,
    truncated: bool,
}

/// One step of a sequence: its index, its value, and the rule that
/// produced it. Step 0 carries no operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub value: u64,
    pub operation: Option<Operation>,
}

impl Sequence {
    /// The values, start first.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// True iff generation stopped at the step cap before reaching 1.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Number of values, including the start.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A sequence always holds at least the starting value.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The last value: 1 unless the sequence was truncated.
    pub fn last(&self) -> u64 {
        // Generation always pushes the start value first
        *self.values.last().unwrap()
    }

    /// Iterate the sequence as labelled steps.
    ///
    /// The operation attached to step i + 1 is the rule that was applied
    /// to the value at step i.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.values.iter().enumerate().map(|(index, &value)| Step {
            index,
            value,
            operation: if index == 0 {
                None
            } else {
                Some(parity_rule(self.values[index - 1]))
            },
        })
    }
}

/// Compute the full sequence from `start` down to 1, inclusive.
///
/// Fails with [`Error::InvalidStart`] when `start` is zero and with
/// [`Error::Overflow`] if an intermediate value leaves `u64` range; no
/// partial sequence is returned in either case.
///
/// # Examples
///
/// ```
/// use hailstone_core::compute;
///
/// let seq = compute(5)?;
/// assert_eq!(seq.values(), &[5, 16, 8, 4, 2, 1]);
/// # Ok::<(), hailstone_core::Error>(())
/// ```
pub fn compute(start: u64) -> Result<Sequence> {
    compute_capped(start, usize::MAX)
}

/// Compute the sequence from `start`, appending at most `max_steps`
/// values after the start.
///
/// The result is truncated iff the cap stopped generation before 1 was
/// produced. Reaching 1 exactly on the final permitted step is a
/// complete, untruncated sequence.
///
/// # Examples
///
/// ```
/// use hailstone_core::compute_capped;
///
/// // 7 needs 16 steps; a cap of 3 cuts it off after 4 values
/// let seq = compute_capped(7, 3)?;
/// assert_eq!(seq.values(), &[7, 22, 11, 34]);
/// assert!(seq.is_truncated());
/// # Ok::<(), hailstone_core::Error>(())
/// ```
pub fn compute_capped(start: u64, max_steps: usize) -> Result<Sequence> {
    if start < 1 {
        return Err(Error::InvalidStart(start));
    }

    let mut values = vec![start];
    let mut current = start;
    let mut appended = 0;

    while current != 1 && appended < max_steps {
        current = next_value(current)?;
        values.push(current);
        appended += 1;
    }

    Ok(Sequence {
        values,
        truncated: current != 1,
    })
}
