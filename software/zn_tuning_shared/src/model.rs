//! Values passed into and out of a tuning calculation.
//!
//! Everything here is plain data, built for one request and then dropped.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// One of the four measured quantities from the step test
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Step applied to the controller output, percent
    DeltaMv,
    /// Total settled change of the process variable
    DeltaPv,
    /// Dead time `L`, seconds
    DeadTime,
    /// Time constant `T`, seconds
    TimeConstant,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::DeltaMv,
        Field::DeltaPv,
        Field::DeadTime,
        Field::TimeConstant,
    ];

    /// Short symbol as used in formulas and messages
    pub fn symbol(&self) -> &'static str {
        match self {
            Field::DeltaMv => "ΔMV",
            Field::DeltaPv => "ΔPV",
            Field::DeadTime => "L",
            Field::TimeConstant => "T",
        }
    }

    /// Form label including units
    pub fn label(&self) -> &'static str {
        match self {
            Field::DeltaMv => "ΔMV (%)",
            Field::DeltaPv => "ΔPV",
            Field::DeadTime => "L (s)",
            Field::TimeConstant => "T (s)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Measured values from an open-loop step test.
///
/// Fields are public so that front ends can assemble an input from parsed
/// text before it is checked; [`TuningInput::new`] checks on construction,
/// and every calculator checks again before doing arithmetic.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TuningInput {
    /// Change in controller output during the step, percent
    pub delta_mv: f64,

    /// Resulting total change in the process variable
    pub delta_pv: f64,

    /// Delay before the process variable starts to respond, seconds
    pub dead_time_s: f64,

    /// Response speed of the process after the dead time, seconds
    pub time_constant_s: f64,
}

impl TuningInput {
    /// Build a checked input
    pub fn new(
        delta_mv: f64,
        delta_pv: f64,
        dead_time_s: f64,
        time_constant_s: f64,
    ) -> Result<Self, InvalidInputError> {
        let input = Self {
            delta_mv,
            delta_pv,
            dead_time_s,
            time_constant_s,
        };
        input.validate()?;

        Ok(input)
    }

    /// Value of a single field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::DeltaMv => self.delta_mv,
            Field::DeltaPv => self.delta_pv,
            Field::DeadTime => self.dead_time_s,
            Field::TimeConstant => self.time_constant_s,
        }
    }

    /// Check that every field is finite and strictly positive,
    /// reporting all fields that are not.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let fields: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| {
                let v = self.get(*f);
                !(v.is_finite() && v > 0.0)
            })
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(InvalidInputError::not_positive(fields))
        }
    }
}

/// First-order-plus-dead-time summary of the process
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ProcessModel {
    /// Process gain `K = ΔPV / ΔMV`
    pub gain: f64,
    pub dead_time_s: f64,
    pub time_constant_s: f64,
}

/// Controller structure a row of the tuning table applies to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControllerKind {
    P,
    Pi,
    Pid,
}

impl ControllerKind {
    /// All kinds in table order
    pub const ALL: [ControllerKind; 3] = [
        ControllerKind::P,
        ControllerKind::Pi,
        ControllerKind::Pid,
    ];

    /// Short tag, like `PI`
    pub fn tag(&self) -> &'static str {
        match self {
            ControllerKind::P => "P",
            ControllerKind::Pi => "PI",
            ControllerKind::Pid => "PID",
        }
    }

    /// Display name for table rows
    pub fn name(&self) -> &'static str {
        match self {
            ControllerKind::P => "P (Proportional)",
            ControllerKind::Pi => "PI (Proportional-Integral)",
            ControllerKind::Pid => "PID (Proportional-Integral-Derivative)",
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Settings for one controller structure, in standard (ideal) form
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ControllerParams {
    pub kind: ControllerKind,

    /// Proportional gain
    pub kp: f64,

    /// Integral time in seconds, if the structure has an integral term
    pub ti_s: Option<f64>,

    /// Derivative time in seconds, if the structure has a derivative term
    pub td_s: Option<f64>,
}

impl ControllerParams {
    /// Parallel-form integral gain, `Kp / Ti`
    pub fn ki(&self) -> Option<f64> {
        self.ti_s.map(|ti| self.kp / ti)
    }

    /// Parallel-form derivative gain, `Kp * Td`
    pub fn kd(&self) -> Option<f64> {
        self.td_s.map(|td| self.kp * td)
    }
}

/// Process model and the three tuned controllers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TuningResult {
    pub model: ProcessModel,
    pub p: ControllerParams,
    pub pi: ControllerParams,
    pub pid: ControllerParams,
}

impl TuningResult {
    /// Controllers in table order: P, PI, PID
    pub fn controllers(&self) -> [&ControllerParams; 3] {
        [&self.p, &self.pi, &self.pid]
    }

    /// Settings for a given controller structure
    pub fn get(&self, kind: ControllerKind) -> &ControllerParams {
        match kind {
            ControllerKind::P => &self.p,
            ControllerKind::Pi => &self.pi,
            ControllerKind::Pid => &self.pid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_every_bad_field() {
        let input = TuningInput {
            delta_mv: 0.0,
            delta_pv: 5.0,
            dead_time_s: -1.0,
            time_constant_s: 20.0,
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.fields, vec![Field::DeltaMv, Field::DeadTime]);
    }

    #[test]
    fn validate_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = TuningInput::new(10.0, 5.0, 5.0, bad).unwrap_err();
            assert_eq!(err.fields, vec![Field::TimeConstant], "{bad} should be rejected");
        }
    }

    #[test]
    fn conversions_follow_present_terms() {
        let pi = ControllerParams {
            kind: ControllerKind::Pi,
            kp: 7.2,
            ti_s: Some(16.65),
            td_s: None,
        };
        assert!((pi.ki().unwrap() - 7.2 / 16.65).abs() < 1e-12);
        assert_eq!(pi.kd(), None);

        let pid = ControllerParams {
            kind: ControllerKind::Pid,
            kp: 9.6,
            ti_s: Some(10.0),
            td_s: Some(2.5),
        };
        assert!((pid.ki().unwrap() - 0.96).abs() < 1e-12);
        assert!((pid.kd().unwrap() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn field_labels() {
        let symbols: Vec<String> = Field::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(symbols, ["ΔMV", "ΔPV", "L", "T"]);
        assert_eq!(Field::DeadTime.label(), "L (s)");
        assert_eq!(ControllerKind::Pid.to_string(), "PID");
    }
}
