//! The two ways a tuning request can be refused.
//!
//! Both are shown directly to the operator, so `Display` gives the
//! operator-facing message only. The offending field and raw text are kept
//! on the error for logging.

use core::fmt;

use thiserror::Error;

use crate::model::Field;

/// A form field could not be read as a real number
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Please enter only valid numbers in all fields.")]
pub struct ParseError {
    /// Field that failed to parse
    pub field: Field,

    /// Raw text as entered
    pub text: String,
}

/// Why a set of numeric values was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// A value is zero, negative or not finite
    NotPositive,
    /// Every value is positive, but together they drive the model or a
    /// controller setting out of the range of `f64`
    OutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotPositive => {
                f.write_str("All values of ΔMV, ΔPV, L and T must be greater than zero.")
            }
            InvalidReason::OutOfRange => f.write_str(
                "The values of ΔMV, ΔPV, L and T are too far apart in magnitude to compute a tuning.",
            ),
        }
    }
}

/// The measured values parsed, but cannot be tuned
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{reason}")]
pub struct InvalidInputError {
    pub reason: InvalidReason,

    /// Every field involved, in form order
    pub fields: Vec<Field>,
}

impl InvalidInputError {
    pub fn not_positive(fields: Vec<Field>) -> Self {
        Self {
            reason: InvalidReason::NotPositive,
            fields,
        }
    }

    pub fn out_of_range(fields: Vec<Field>) -> Self {
        Self {
            reason: InvalidReason::OutOfRange,
            fields,
        }
    }
}

/// Either failure kind, for front ends that handle the whole request at once
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}
