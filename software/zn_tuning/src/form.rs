//! Text entered by the operator, before it becomes a `TuningInput`.

use serde::{Deserialize, Serialize};

use zn_tuning_shared::{Field, ParseError, TuningInput};

/// Parse one field's text as a real number.
///
/// Surrounding whitespace is ignored. Spellings of infinity or NaN are not
/// accepted as numbers.
pub fn parse_field(field: Field, text: &str) -> Result<f64, ParseError> {
    let err = || ParseError {
        field,
        text: text.to_owned(),
    };

    let v: f64 = text.trim().parse().map_err(|_| err())?;
    if !v.is_finite() {
        return Err(err());
    }

    Ok(v)
}

/// Raw text of the four form fields
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FormFields {
    pub delta_mv: String,
    pub delta_pv: String,
    pub dead_time_s: String,
    pub time_constant_s: String,
}

impl Default for FormFields {
    /// Values the form is pre-filled with
    fn default() -> Self {
        Self {
            delta_mv: "10.0".to_owned(),
            delta_pv: "5.0".to_owned(),
            dead_time_s: "5.0".to_owned(),
            time_constant_s: "20.0".to_owned(),
        }
    }
}

impl FormFields {
    pub fn new(delta_mv: &str, delta_pv: &str, dead_time_s: &str, time_constant_s: &str) -> Self {
        Self {
            delta_mv: delta_mv.to_owned(),
            delta_pv: delta_pv.to_owned(),
            dead_time_s: dead_time_s.to_owned(),
            time_constant_s: time_constant_s.to_owned(),
        }
    }

    /// Text of a single field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DeltaMv => &self.delta_mv,
            Field::DeltaPv => &self.delta_pv,
            Field::DeadTime => &self.dead_time_s,
            Field::TimeConstant => &self.time_constant_s,
        }
    }

    /// Replace the text of a single field
    pub fn set(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::DeltaMv => &mut self.delta_mv,
            Field::DeltaPv => &mut self.delta_pv,
            Field::DeadTime => &mut self.dead_time_s,
            Field::TimeConstant => &mut self.time_constant_s,
        };
        *slot = text.to_owned();
    }

    /// Parse all fields in form order, stopping at the first failure.
    ///
    /// The result is not yet checked for positivity; that is the
    /// calculator's job.
    pub fn parse(&self) -> Result<TuningInput, ParseError> {
        Ok(TuningInput {
            delta_mv: parse_field(Field::DeltaMv, &self.delta_mv)?,
            delta_pv: parse_field(Field::DeltaPv, &self.delta_pv)?,
            dead_time_s: parse_field(Field::DeadTime, &self.dead_time_s)?,
            time_constant_s: parse_field(Field::TimeConstant, &self.time_constant_s)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_field(Field::DeltaMv, "10").unwrap(), 10.0);
        assert_eq!(parse_field(Field::DeltaMv, "  2.5 ").unwrap(), 2.5);
        assert_eq!(parse_field(Field::DeltaMv, "1e-2").unwrap(), 0.01);

        // Sign is kept; positivity is checked later
        assert_eq!(parse_field(Field::DeadTime, "-3").unwrap(), -3.0);
    }

    #[test]
    fn non_numeric_text_is_a_parse_error() {
        for text in ["", "abc", "1,5", "5s", "inf", "NaN", "-infinity"] {
            let err = parse_field(Field::TimeConstant, text).unwrap_err();
            assert_eq!(err.field, Field::TimeConstant);
            assert_eq!(err.text, text, "raw text should be kept for `{text}`");
        }
    }

    #[test]
    fn defaults_parse_to_reference_values() {
        let input = FormFields::default().parse().unwrap();
        assert_eq!(
            input,
            TuningInput {
                delta_mv: 10.0,
                delta_pv: 5.0,
                dead_time_s: 5.0,
                time_constant_s: 20.0,
            }
        );
    }

    #[test]
    fn first_bad_field_is_reported() {
        let mut form = FormFields::default();
        form.set(Field::DeltaPv, "five");
        form.set(Field::TimeConstant, "twenty");
        let err = form.parse().unwrap_err();
        assert_eq!(err.field, Field::DeltaPv);
        assert_eq!(form.get(Field::TimeConstant), "twenty");
    }

    #[test]
    fn zero_parses_but_does_not_validate() {
        let form = FormFields::new("0", "5", "5", "20");
        let input = form.parse().unwrap();
        assert!(input.validate().is_err());
    }
}
