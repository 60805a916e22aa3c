use thiserror::Error;

/// Input rejected before any calculation or state change happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("invalid email: {0}")]
    InvalidEmail(String),
}

impl ValidationError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite { field });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { field, value });
        }
        Ok(value)
    }

    /// Checks that `value` is finite and zero or more.
    pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, Self> {
        let value = Self::finite(field, value)?;
        if value < 0.0 {
            return Err(Self::Negative { field, value });
        }
        Ok(value)
    }

    pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite { field })
        }
    }
}

/// Durable key-value failures. Never fatal: the in-memory session stays authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize session snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
