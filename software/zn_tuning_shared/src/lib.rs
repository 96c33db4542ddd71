#![doc = include_str!("../README.md")]

pub mod calc;
pub mod error;
pub mod model;

pub use calc::{TuningCalculator, ZieglerNichols};
pub use error::{InvalidInputError, InvalidReason, ParseError, TuningError};
pub use model::{ControllerKind, ControllerParams, Field, ProcessModel, TuningInput, TuningResult};
