//! State of the coordinate edit form.
//!
//! The form holds the raw text of both fields; nothing is parsed until submit.

use crate::error::{CoordinateField, EditError, EditResult};
use crate::types::{MicId, Microphone};

#[derive(Clone, Debug, PartialEq)]
pub struct EditForm {
    /// Microphone the form was opened for
    pub target: MicId,
    pub x_text: String,
    pub y_text: String,
}

impl EditForm {
    /// Open the form pre-filled with the microphone's current coordinates
    pub fn open(mic: &Microphone) -> Self {
        Self {
            target: mic.id,
            x_text: mic.x.to_string(),
            y_text: mic.y.to_string(),
        }
    }

    pub fn set_field(&mut self, field: CoordinateField, text: impl Into<String>) {
        match field {
            CoordinateField::X => self.x_text = text.into(),
            CoordinateField::Y => self.y_text = text.into(),
        }
    }

    /// Parse both fields. Fails on the first field that is not a finite number.
    pub fn parse(&self) -> EditResult<(f64, f64)> {
        let x = parse_coordinate(CoordinateField::X, &self.x_text)?;
        let y = parse_coordinate(CoordinateField::Y, &self.y_text)?;
        Ok((x, y))
    }
}

fn parse_coordinate(field: CoordinateField, text: &str) -> EditResult<f64> {
    let value = text.trim().parse::<f64>().map_err(|_| EditError::NotANumber {
        field,
        text: text.to_string(),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EditError::NotFinite {
            field,
            text: text.to_string(),
        })
    }
}
