/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::unit::Unit;
use super::usage::MeasurementSystem;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Incompatible units: {0} <-> {1}")]
    Conversion(Unit, Unit),
    #[error("Unit parse error: {0}")]
    ParseError(String),
    #[error("Unit {0} cannot be used in the {1} measurement system")]
    Usage(Unit, MeasurementSystem),
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid unit {1} for dimension {0}")]
    TypeError(Dimension, Unit),
    #[error("JSON error: {0}")]
    Json(String),
}
