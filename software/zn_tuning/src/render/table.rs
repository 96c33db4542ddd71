//! Web-form style output: a model summary followed by one table row per controller.

use super::*;

/// Column headings of the results table
pub const HEADER: [&str; 4] = ["Controller", "Kp", "Ti (s)", "Td (s)"];

/// Formatted cells of the results table, in row order P, PI, PID
pub fn rows(result: &TuningResult) -> Vec<[String; 4]> {
    result
        .controllers()
        .iter()
        .map(|c| {
            [
                c.kind.name().to_owned(),
                fmt_gain(c.kp),
                fmt_opt_time(c.ti_s),
                fmt_opt_time(c.td_s),
            ]
        })
        .collect()
}

/// Renders results as a plain-text table.
///
/// Each call replaces the previous output, the way a form page is redrawn
/// after every submit.
#[derive(Default, Debug)]
pub struct TableRenderer {
    output: String,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text produced by the most recent render
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Renderer for TableRenderer {
    fn render(&mut self, result: &TuningResult) {
        let model = &result.model;
        let mut out = String::new();

        out.push_str("Process model (FOPTD)\n");
        out.push_str(&format!("Process gain (K): {}\n", fmt_gain(model.gain)));
        out.push_str(&format!("Dead time (L): {} s\n", fmt_time(model.dead_time_s)));
        out.push_str(&format!(
            "Time constant (T): {} s\n",
            fmt_time(model.time_constant_s)
        ));
        out.push('\n');

        // Size each column to its widest cell
        let body = rows(result);
        let mut widths = HEADER.map(|h| h.chars().count());
        for row in body.iter() {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let fmt_row = |cells: [&str; 4]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect();
            padded.join(" | ").trim_end().to_owned()
        };

        out.push_str(&fmt_row(HEADER));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for row in body.iter() {
            out.push_str(&fmt_row(row.each_ref().map(String::as_str)));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(CONVERSION_NOTE);
        out.push('\n');

        self.output = out;
    }

    fn render_error(&mut self, err: &TuningError) {
        self.output = format!("Error: {err}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zn_tuning_shared::{Field, InvalidInputError, TuningCalculator, TuningInput, ZieglerNichols};

    fn reference() -> TuningResult {
        let input = TuningInput::new(10.0, 5.0, 5.0, 20.0).unwrap();
        ZieglerNichols.calculate(&input).unwrap()
    }

    #[test]
    fn rows_for_reference_scenario() {
        let body = rows(&reference());
        assert_eq!(
            body,
            vec![
                ["P (Proportional)".to_owned(), "8.0000".into(), "-".into(), "-".into()],
                [
                    "PI (Proportional-Integral)".to_owned(),
                    "7.2000".into(),
                    "16.65".into(),
                    "-".into()
                ],
                [
                    "PID (Proportional-Integral-Derivative)".to_owned(),
                    "9.6000".into(),
                    "10.00".into(),
                    "2.50".into()
                ],
            ]
        );
    }

    #[test]
    fn output_has_summary_table_and_note() {
        let mut table = TableRenderer::new();
        table.render(&reference());
        let out = table.output();

        assert!(out.contains("Process gain (K): 0.5000"), "{out}");
        assert!(out.contains("Dead time (L): 5.00 s"), "{out}");
        assert!(out.contains("Time constant (T): 20.00 s"), "{out}");
        assert!(out.contains(CONVERSION_NOTE));

        let pi_line = out
            .lines()
            .find(|l| l.starts_with("PI "))
            .expect("PI row missing");
        let cells: Vec<&str> = pi_line.split('|').map(str::trim).collect();
        assert_eq!(cells, ["PI (Proportional-Integral)", "7.2000", "16.65", "-"]);

        // Rows line up with the header
        let header_line = out.lines().find(|l| l.starts_with("Controller")).unwrap();
        assert_eq!(header_line.find('|'), pi_line.find('|'));
    }

    #[test]
    fn error_replaces_previous_output() {
        let mut table = TableRenderer::new();
        table.render(&reference());
        table.render_error(&TuningError::InvalidInput(InvalidInputError::not_positive(vec![
            Field::DeadTime,
        ])));

        assert_eq!(
            table.output(),
            "Error: All values of ΔMV, ΔPV, L and T must be greater than zero.\n"
        );
    }
}
