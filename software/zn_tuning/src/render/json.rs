//! Machine-readable output for scripting.
//!
//! Each number is given twice: raw under `result`, and formatted to display
//! precision under `display`, matching what the other renderers show.

use serde_json::{Value, json};

use zn_tuning_shared::InvalidReason;

use super::*;

/// Formatted model and controller rows
fn display(result: &TuningResult) -> Value {
    let model = &result.model;
    let controllers: Vec<Value> = result
        .controllers()
        .iter()
        .map(|c| {
            json!({
                "kind": c.kind.tag(),
                "kp": fmt_gain(c.kp),
                "ti_s": fmt_opt_time(c.ti_s),
                "td_s": fmt_opt_time(c.td_s),
            })
        })
        .collect();

    json!({
        "gain": fmt_gain(model.gain),
        "dead_time_s": fmt_time(model.dead_time_s),
        "time_constant_s": fmt_time(model.time_constant_s),
        "controllers": controllers,
    })
}

/// Renders the result, or the refusal, as a JSON document
#[derive(Default, Debug)]
pub struct JsonRenderer {
    output: String,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text produced by the most recent render
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, result: &TuningResult) {
        let doc = json!({
            "result": result,
            "display": display(result),
        });
        self.output = format!("{doc:#}");
    }

    fn render_error(&mut self, err: &TuningError) {
        let doc = match err {
            TuningError::Parse(e) => json!({
                "error": "parse",
                "message": err.to_string(),
                "fields": [e.field],
            }),
            TuningError::InvalidInput(e) => {
                let tag = match e.reason {
                    InvalidReason::NotPositive => "invalid_input",
                    InvalidReason::OutOfRange => "out_of_range",
                };
                json!({
                    "error": tag,
                    "message": err.to_string(),
                    "fields": e.fields,
                })
            }
        };
        self.output = doc.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zn_tuning_shared::{Field, InvalidInputError, TuningCalculator, TuningInput, ZieglerNichols};

    #[test]
    fn result_document_has_raw_and_display_values() {
        let input = TuningInput::new(10.0, 5.0, 5.0, 20.0).unwrap();
        let result = ZieglerNichols.calculate(&input).unwrap();
        let mut renderer = JsonRenderer::new();
        renderer.render(&result);

        let doc: Value = serde_json::from_str(renderer.output()).unwrap();
        assert_eq!(doc["result"]["model"]["gain"], 0.5);
        assert_eq!(doc["result"]["p"]["ti_s"], Value::Null);
        assert_eq!(doc["result"]["pid"]["td_s"], 2.5);

        let display = &doc["display"];
        assert_eq!(display["gain"], "0.5000");
        assert_eq!(display["time_constant_s"], "20.00");
        assert_eq!(
            display["controllers"][1],
            json!({ "kind": "PI", "kp": "7.2000", "ti_s": "16.65", "td_s": "-" })
        );
        assert_eq!(display["controllers"][2]["td_s"], "2.50");
    }

    #[test]
    fn error_document_lists_fields() {
        let mut renderer = JsonRenderer::new();
        renderer.render_error(&TuningError::InvalidInput(InvalidInputError::not_positive(vec![
            Field::DeltaMv,
            Field::TimeConstant,
        ])));

        let doc: Value = serde_json::from_str(renderer.output()).unwrap();
        assert_eq!(doc["error"], "invalid_input");
        assert_eq!(doc["fields"], json!(["DeltaMv", "TimeConstant"]));
    }

    #[test]
    fn out_of_range_has_its_own_error_tag() {
        let mut renderer = JsonRenderer::new();
        renderer.render_error(&TuningError::InvalidInput(InvalidInputError::out_of_range(
            Field::ALL.to_vec(),
        )));

        let doc: Value = serde_json::from_str(renderer.output()).unwrap();
        assert_eq!(doc["error"], "out_of_range");
    }
}
