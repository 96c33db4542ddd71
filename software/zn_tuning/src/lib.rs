//! Form handling, rendering and the command-line front end for
//! Ziegler-Nichols open-loop tuning.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod frontend;
pub mod help;
pub mod logging;
pub mod render;

pub use config::{OutputFormat, TuningCtx};
pub use error::AppError;
pub use form::{FormFields, parse_field};
pub use frontend::Frontend;
pub use render::{JsonRenderer, LabelRenderer, Renderer, TableRenderer};

pub use zn_tuning_shared::{
    ControllerKind, ControllerParams, Field, InvalidInputError, InvalidReason, ParseError,
    ProcessModel, TuningCalculator, TuningError, TuningInput, TuningResult, ZieglerNichols,
};
