//! Tuning rules that map a step-test measurement to controller settings.
//!
//! A `TuningCalculator` is stateless; front ends borrow one and call it once
//! per request.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::model::{
    ControllerKind, ControllerParams, Field, ProcessModel, TuningInput, TuningResult,
};

/// A tuning rule over an open-loop step-test measurement
pub trait TuningCalculator: Send + Sync {
    /// Name of the rule, for logs and headings
    fn name(&self) -> &str;

    /// Check the input and compute the process model and controller settings
    fn calculate(&self, input: &TuningInput) -> Result<TuningResult, InvalidInputError>;
}

/// Ziegler-Nichols open-loop (reaction curve) rules
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy)]
pub struct ZieglerNichols;

impl ZieglerNichols {
    /// Proportional gain factor for a PI controller
    pub const PI_GAIN: f64 = 0.9;

    /// Integral time of a PI controller, in multiples of dead time
    pub const PI_INTEGRAL: f64 = 3.33;

    /// Proportional gain factor for a PID controller
    pub const PID_GAIN: f64 = 1.2;

    /// Integral time of a PID controller, in multiples of dead time
    pub const PID_INTEGRAL: f64 = 2.0;

    /// Derivative time of a PID controller, in multiples of dead time
    pub const PID_DERIVATIVE: f64 = 0.5;
}

impl TuningCalculator for ZieglerNichols {
    fn name(&self) -> &str {
        "Ziegler-Nichols"
    }

    fn calculate(&self, input: &TuningInput) -> Result<TuningResult, InvalidInputError> {
        input.validate()?;

        let TuningInput {
            delta_mv,
            delta_pv,
            dead_time_s: l,
            time_constant_s: t,
        } = *input;

        // Positive inputs keep K and K * L positive in exact arithmetic, but in f64
        // either can underflow to zero; the range check below catches that
        let k = delta_pv / delta_mv;

        let p = ControllerParams {
            kind: ControllerKind::P,
            kp: t / (k * l),
            ti_s: None,
            td_s: None,
        };

        let pi = ControllerParams {
            kind: ControllerKind::Pi,
            kp: Self::PI_GAIN * t / (k * l),
            ti_s: Some(Self::PI_INTEGRAL * l),
            td_s: None,
        };

        let pid = ControllerParams {
            kind: ControllerKind::Pid,
            kp: Self::PID_GAIN * t / (k * l),
            ti_s: Some(Self::PID_INTEGRAL * l),
            td_s: Some(Self::PID_DERIVATIVE * l),
        };

        let result = TuningResult {
            model: ProcessModel {
                gain: k,
                dead_time_s: l,
                time_constant_s: t,
            },
            p,
            pi,
            pid,
        };
        check_range(&result)?;

        Ok(result)
    }
}

fn in_range(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Refuse a result whose gain or settings fell outside the positive, finite
/// range of `f64`, naming the fields that feed the offending values.
fn check_range(result: &TuningResult) -> Result<(), InvalidInputError> {
    let mut involved = Vec::new();

    if !in_range(result.model.gain) {
        involved.extend([Field::DeltaMv, Field::DeltaPv]);
    }
    if result.controllers().iter().any(|c| !in_range(c.kp)) {
        involved.extend(Field::ALL);
    }
    let times_ok = result
        .controllers()
        .iter()
        .flat_map(|c| [c.ti_s, c.td_s])
        .flatten()
        .all(in_range);
    if !times_ok {
        involved.push(Field::DeadTime);
    }

    if involved.is_empty() {
        return Ok(());
    }

    let fields = Field::ALL
        .into_iter()
        .filter(|f| involved.contains(f))
        .collect();
    Err(InvalidInputError::out_of_range(fields))
}
