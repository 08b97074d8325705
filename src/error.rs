use thiserror::Error;

use crate::model::BodyID;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    #[error("cannot normalize a vector of length zero")]
    DivisionByZero,

    #[error("no body with id {0:?}")]
    UnknownBody(BodyID),

    #[error("unknown preset {0:?} (expected one of: orbit, twobodies, threebodies)")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects NaN, infinity, and anything not strictly greater than zero.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidArgument { name, value })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument { name, value })
    }
}
