//! A front end: form state, a borrowed calculator, and a renderer.

use tracing::{info, warn};

use zn_tuning_shared::{TuningCalculator, TuningError, TuningResult};

use crate::form::FormFields;
use crate::render::Renderer;

/// One user-facing front end.
///
/// Holds its own form text and renderer, and borrows the calculator it
/// submits to, so several front ends can share one calculator.
pub struct Frontend<'a, R: Renderer> {
    calculator: &'a dyn TuningCalculator,
    form: FormFields,
    renderer: R,
}

impl<'a, R: Renderer> Frontend<'a, R> {
    pub fn new(calculator: &'a dyn TuningCalculator, form: FormFields, renderer: R) -> Self {
        Self {
            calculator,
            form,
            renderer,
        }
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Mutable access to the form text, as a text field edit would have
    pub fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Handle a press of the calculate button.
    ///
    /// Either outcome is rendered before it is returned.
    pub fn submit(&mut self) -> Result<TuningResult, TuningError> {
        match self.evaluate() {
            Ok(result) => {
                info!(
                    calculator = self.calculator.name(),
                    gain = result.model.gain,
                    kp_pid = result.pid.kp,
                    "Computed tuning"
                );
                self.renderer.render(&result);
                Ok(result)
            }
            Err(err) => {
                match &err {
                    TuningError::Parse(e) => {
                        warn!(field = %e.field, text = %e.text, "Rejected non-numeric input")
                    }
                    TuningError::InvalidInput(e) => {
                        warn!(reason = ?e.reason, fields = ?e.fields, "Rejected input values")
                    }
                }
                self.renderer.render_error(&err);
                Err(err)
            }
        }
    }

    fn evaluate(&self) -> Result<TuningResult, TuningError> {
        let input = self.form.parse()?;
        let result = self.calculator.calculate(&input)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LabelId, LabelRenderer, TableRenderer};
    use zn_tuning_shared::{ControllerKind, Field, InvalidReason, ZieglerNichols};

    #[test]
    fn two_front_ends_share_one_calculator() {
        let calculator = ZieglerNichols;
        let mut web = Frontend::new(&calculator, FormFields::default(), TableRenderer::new());
        let mut app = Frontend::new(&calculator, FormFields::default(), LabelRenderer::new());

        let a = web.submit().unwrap();
        let b = app.submit().unwrap();
        assert_eq!(a, b);

        assert!(web.renderer().output().contains("| 9.6000"));
        assert_eq!(app.renderer().text(LabelId::Kp(ControllerKind::P)), "8.0000");
    }

    #[test]
    fn parse_failure_is_rendered_and_returned() {
        let calculator = ZieglerNichols;
        let mut app = Frontend::new(&calculator, FormFields::default(), LabelRenderer::new());
        app.form_mut().set(Field::DeadTime, "five");

        let err = app.submit().unwrap_err();
        assert!(matches!(err, TuningError::Parse(ref e) if e.field == Field::DeadTime));
        assert_eq!(app.renderer().dialog().unwrap().title, "Format error");
    }

    #[test]
    fn non_positive_input_is_rendered_and_returned() {
        let calculator = ZieglerNichols;
        let form = FormFields::new("10", "5", "5", "0");
        let mut web = Frontend::new(&calculator, form, TableRenderer::new());

        let err = web.submit().unwrap_err();
        assert!(
            matches!(err, TuningError::InvalidInput(ref e) if e.fields == [Field::TimeConstant])
        );
        assert!(web.renderer().output().starts_with("Error: All values"));
    }

    #[test]
    fn resubmit_after_correction() {
        let calculator = ZieglerNichols;
        let form = FormFields::new("1", "1", "-1", "1");
        let mut app = Frontend::new(&calculator, form, LabelRenderer::new());

        assert!(app.submit().is_err());
        assert_eq!(app.renderer().text(LabelId::Kp(ControllerKind::Pi)), "-");

        app.form_mut().set(Field::DeadTime, "1");
        app.submit().unwrap();
        assert_eq!(app.renderer().text(LabelId::Kp(ControllerKind::Pi)), "0.9000");
        assert!(app.renderer().dialog().is_none());
    }

    #[test]
    fn out_of_range_input_opens_dialog() {
        let calculator = ZieglerNichols;
        let form = FormFields::new("1e200", "1e-200", "5", "20");
        let mut app = Frontend::new(&calculator, form, LabelRenderer::new());

        let err = app.submit().unwrap_err();
        assert!(matches!(
            err,
            TuningError::InvalidInput(ref e) if e.reason == InvalidReason::OutOfRange
        ));
        let dialog = app.renderer().dialog().unwrap();
        assert_eq!(dialog.title, "Input error");
        assert!(dialog.message.contains("too far apart"), "{}", dialog.message);
        assert_eq!(app.renderer().text(LabelId::Gain), "Gain (K): -");
    }
}
