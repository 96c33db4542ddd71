//! Turning a `TuningResult` into display text.
//!
//! Gains are shown with 4 decimals and times with 2. A term that a
//! controller structure does not have is shown as [`PLACEHOLDER`].

use zn_tuning_shared::{TuningError, TuningResult};

mod json;
mod labels;
mod table;

pub use json::JsonRenderer;
pub use labels::{Dialog, LabelId, LabelRenderer};
pub use table::{HEADER, TableRenderer, rows};

/// Text shown for an absent term or a value not yet computed
pub const PLACEHOLDER: &str = "-";

/// Note printed under the results on converting to parallel-form gains
pub const CONVERSION_NOTE: &str =
    "Check the controller manual for its parameter form: Ki = Kp / Ti, Kd = Kp * Td.";

/// A front end's presentation of results and errors
pub trait Renderer {
    /// Show a successful calculation
    fn render(&mut self, result: &TuningResult);

    /// Show a refused request
    fn render_error(&mut self, err: &TuningError);
}

/// Format a gain value
pub fn fmt_gain(v: f64) -> String {
    format!("{v:.4}")
}

/// Format a time value in seconds
pub fn fmt_time(v: f64) -> String {
    format!("{v:.2}")
}

/// Format an optional time value, using the placeholder when absent
pub fn fmt_opt_time(v: Option<f64>) -> String {
    v.map(fmt_time).unwrap_or_else(|| PLACEHOLDER.to_owned())
}
