//! Error types
//!
//! Every fallible operation in the crate returns [`MarkovResult`]. The three
//! domain kinds map onto the ways an analysis can be rejected before any
//! output is produced: bad input data, bad parameters, and a returns sample
//! that cannot drive a Normal draw.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkovError {
    /// Malformed or insufficient input series
    #[error("data error: {reason}")]
    Data { reason: String },

    /// A parameter outside its allowed range
    #[error("configuration error: `{parameter}` must be {constraint} (got {value})")]
    Configuration {
        parameter: &'static str,
        constraint: &'static str,
        value: String,
    },

    /// Returns sample with zero or non-finite dispersion
    #[error("numeric degeneracy: {reason}")]
    NumericDegeneracy { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl MarkovError {
    pub(crate) fn data(reason: impl Into<String>) -> Self {
        Self::Data {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(
        parameter: &'static str,
        constraint: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::Configuration {
            parameter,
            constraint,
            value: value.to_string(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::NumericDegeneracy {
            reason: reason.into(),
        }
    }

    /// True for [`MarkovError::Configuration`]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// True for [`MarkovError::Data`]
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// True for [`MarkovError::NumericDegeneracy`]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::NumericDegeneracy { .. })
    }
}

/// Result type for estimator and simulator operations
pub type MarkovResult<T> = Result<T, MarkovError>;
