//! App style output: a fixed grid of labels whose text is rewritten on each
//! calculation, with errors raised as a dialog.

use core::fmt;
use std::collections::BTreeMap;

use zn_tuning_shared::ControllerKind;

use super::*;

/// Identifies one bound label
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelId {
    /// Process gain line
    Gain,
    Kp(ControllerKind),
    Ti(ControllerKind),
    Td(ControllerKind),
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelId::Gain => f.write_str("K"),
            LabelId::Kp(kind) => write!(f, "Kp_{kind}"),
            LabelId::Ti(kind) => write!(f, "Ti_{kind}"),
            LabelId::Td(kind) => write!(f, "Td_{kind}"),
        }
    }
}

/// A modal error message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    /// Title and message for a refused request
    pub fn from_error(err: &TuningError) -> Self {
        let title = match err {
            TuningError::Parse(_) => "Format error",
            TuningError::InvalidInput(_) => "Input error",
        };

        Self {
            title: title.to_owned(),
            message: err.to_string(),
        }
    }
}

fn gain_text(value: &str) -> String {
    format!("Gain (K): {value}")
}

/// Label grid for the result table.
///
/// Every label exists from construction and shows the placeholder until the
/// first successful calculation. An error leaves the labels as they were.
#[derive(Debug)]
pub struct LabelRenderer {
    labels: BTreeMap<LabelId, String>,
    dialog: Option<Dialog>,
}

impl Default for LabelRenderer {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(LabelId::Gain, gain_text(PLACEHOLDER));
        for kind in ControllerKind::ALL {
            for id in [LabelId::Kp(kind), LabelId::Ti(kind), LabelId::Td(kind)] {
                labels.insert(id, PLACEHOLDER.to_owned());
            }
        }

        Self {
            labels,
            dialog: None,
        }
    }
}

impl LabelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a label
    pub fn text(&self, id: LabelId) -> &str {
        self.labels.get(&id).map(String::as_str).unwrap_or(PLACEHOLDER)
    }

    /// The open error dialog, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Close the error dialog
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    fn set(&mut self, id: LabelId, text: String) {
        self.labels.insert(id, text);
    }
}

impl Renderer for LabelRenderer {
    fn render(&mut self, result: &TuningResult) {
        self.set(LabelId::Gain, gain_text(&fmt_gain(result.model.gain)));
        for c in result.controllers() {
            self.set(LabelId::Kp(c.kind), fmt_gain(c.kp));
            self.set(LabelId::Ti(c.kind), fmt_opt_time(c.ti_s));
            self.set(LabelId::Td(c.kind), fmt_opt_time(c.td_s));
        }
        self.dialog = None;
    }

    fn render_error(&mut self, err: &TuningError) {
        self.dialog = Some(Dialog::from_error(err));
    }
}

impl fmt::Display for LabelRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dialog) = &self.dialog {
            writeln!(f, "[{}] {}", dialog.title, dialog.message)?;
        }

        writeln!(f, "{}", self.text(LabelId::Gain))?;
        writeln!(f, "{:<6}{:>12}{:>10}{:>10}", "", "Kp", "Ti (s)", "Td (s)")?;
        for kind in ControllerKind::ALL {
            writeln!(
                f,
                "{:<6}{:>12}{:>10}{:>10}",
                kind.tag(),
                self.text(LabelId::Kp(kind)),
                self.text(LabelId::Ti(kind)),
                self.text(LabelId::Td(kind)),
            )?;
        }
        write!(f, "{CONVERSION_NOTE}")
    }
}
