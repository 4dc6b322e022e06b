//! Error types for the generation pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur during planet generation.
///
/// Every failure is a configuration problem caught before any grid work
/// starts, so there is never partially-built state to clean up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// A numeric parameter failed a stage's precondition.
    #[error("{stage}: invalid argument {param} = {value} ({reason})")]
    InvalidArgument {
        /// Pipeline stage that rejected the parameter.
        stage: &'static str,
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
        /// Which precondition failed.
        reason: &'static str,
    },
}

impl GenError {
    pub(crate) fn invalid(
        stage: &'static str,
        param: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        GenError::InvalidArgument {
            stage,
            param,
            value,
            reason,
        }
    }
}
