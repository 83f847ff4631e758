use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::PainPointSet;
use crate::models::{FitRequest, Flexibility, PainPointKey, RidingStyle, UnknownVariant};

/// Errors raised while editing the form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} must be a number, got '{raw}'")]
    NotANumber { field: FitField, raw: String },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: FitField, value: f64 },

    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
}

/// Scalar form fields addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitField {
    HeightIn,
    InseamIn,
    RidingStyle,
    Flexibility,
}

impl FitField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitField::HeightIn => "height_in",
            FitField::InseamIn => "inseam_in",
            FitField::RidingStyle => "riding_style",
            FitField::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for FitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height_in" => Ok(FitField::HeightIn),
            "inseam_in" => Ok(FitField::InseamIn),
            "riding_style" => Ok(FitField::RidingStyle),
            "flexibility" => Ok(FitField::Flexibility),
            other => Err(InputError::UnknownField(other.to_string())),
        }
    }
}

/// Editable rider inputs
///
/// Every mutation goes through [`set_field`](Self::set_field) or
/// [`toggle_pain_point`](Self::toggle_pain_point). A rejected edit leaves the
/// previous value in place, so the model never holds a NaN or non-positive
/// measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequestModel {
    height_in: f64,
    inseam_in: f64,
    riding_style: RidingStyle,
    flexibility: Flexibility,
    pain_points: PainPointSet,
}

impl Default for FitRequestModel {
    fn default() -> Self {
        Self {
            height_in: 74.0,
            inseam_in: 35.0,
            riding_style: RidingStyle::default(),
            flexibility: Flexibility::default(),
            pain_points: PainPointSet::new(),
        }
    }
}

impl FitRequestModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply raw input to a named field
    pub fn set_field(&mut self, field: FitField, raw: &str) -> Result<(), InputError> {
        match field {
            FitField::HeightIn => self.height_in = parse_measurement(field, raw)?,
            FitField::InseamIn => self.inseam_in = parse_measurement(field, raw)?,
            FitField::RidingStyle => self.riding_style = raw.parse()?,
            FitField::Flexibility => self.flexibility = raw.parse()?,
        }
        tracing::trace!("Form field {} set to {:?}", field, raw);
        Ok(())
    }

    /// Same as [`set_field`](Self::set_field) with the field given by its wire name
    pub fn set_field_by_name(&mut self, name: &str, raw: &str) -> Result<(), InputError> {
        let field = name.parse::<FitField>()?;
        self.set_field(field, raw)
    }

    pub fn toggle_pain_point(&mut self, key: PainPointKey) -> bool {
        self.pain_points.toggle(key)
    }

    pub fn height_in(&self) -> f64 {
        self.height_in
    }

    pub fn inseam_in(&self) -> f64 {
        self.inseam_in
    }

    pub fn riding_style(&self) -> RidingStyle {
        self.riding_style
    }

    pub fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    pub fn pain_points(&self) -> &PainPointSet {
        &self.pain_points
    }

    /// An inseam at or above the rider's height is accepted but almost
    /// certainly a measuring mistake.
    pub fn inseam_looks_implausible(&self) -> bool {
        self.inseam_in >= self.height_in
    }

    /// Point-in-time copy of the inputs for submission
    pub fn snapshot(&self) -> FitRequest {
        FitRequest {
            height_in: self.height_in,
            inseam_in: self.inseam_in,
            riding_style: self.riding_style,
            flexibility: self.flexibility,
            pain_points: self.pain_points.clone(),
        }
    }
}

fn parse_measurement(field: FitField, raw: &str) -> Result<f64, InputError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            field,
            raw: raw.to_string(),
        })?;

    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}
