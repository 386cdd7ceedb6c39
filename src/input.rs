//! Turning user-typed coordinates into points.
//!
//! The solver is never run on partially parsed input: either all six fields are numbers, or the
//! caller gets a single [`InputError`] to show in place of results.

use mortar_core::Point3;
use thiserror::Error;

/// Field names in the order coordinates are collected.
pub const COORDINATE_FIELDS: [&str; 6] = ["x0", "y0", "z0", "xt", "yt", "zt"];

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// Display text is what the user sees; the offending field is kept for logs.
    #[error("Please enter valid numeric values for coordinates.")]
    InvalidNumber { field: &'static str, value: String },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::InvalidNumber { field, .. } => *field,
        }
    }
}

/// Parse one coordinate field, trimming surrounding whitespace.
pub fn parse_field(value: &str, field: &'static str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parse `[x0, y0, z0, xt, yt, zt]` into launch and target points.
pub fn parse_coordinates<S: AsRef<str>>(values: &[S; 6]) -> Result<(Point3, Point3), InputError> {
    let mut parsed = [0.0; 6];
    for (slot, (value, field)) in parsed
        .iter_mut()
        .zip(values.iter().zip(COORDINATE_FIELDS))
    {
        *slot = parse_field(value.as_ref(), field)?;
    }
    Ok((
        Point3::new(parsed[0], parsed[1], parsed[2]),
        Point3::new(parsed[3], parsed[4], parsed[5]),
    ))
}
