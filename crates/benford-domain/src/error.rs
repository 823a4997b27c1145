//! Error taxonomy for the analysis core

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, BenfordError>;

/// Errors raised by the analysis core.
///
/// The first three variants are caller mistakes and are raised before any
/// statistical work starts. [`BenfordError::ComputationFailure`] is raised when
/// the goodness-of-fit computation itself fails on inputs that passed
/// validation.
#[derive(Debug, Error)]
pub enum BenfordError {
    /// Blank input text, or evaluator inputs of the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Significance level outside the closed interval [0, 1]
    #[error("Significance level must be between 0 and 1, got {0}")]
    InvalidSignificanceLevel(f64),

    /// Too few leading digits to run the test
    #[error("Not enough numeric values to analyze: found {found}, need at least {required}")]
    InsufficientData {
        /// Number of leading digits extracted from the input
        found: usize,
        /// Minimum sample size
        required: usize,
    },

    /// The statistical computation failed
    #[error("{message}")]
    ComputationFailure {
        /// What was being computed
        message: String,
        /// Underlying numeric failure
        #[source]
        source: NumericError,
    },
}

/// Underlying cause of a [`BenfordError::ComputationFailure`].
#[derive(Debug, Error)]
pub enum NumericError {
    /// The chi-square distribution could not be evaluated
    #[error(transparent)]
    Distribution(#[from] crate::chi_square::DistributionError),

    /// A value could not be represented as an exact decimal
    #[error("decimal conversion failed: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// A decimal value could not be represented as a float
    #[error("value {0} is not representable as f64")]
    NotRepresentable(rust_decimal::Decimal),
}

/// Error category without payload, for boundary layers that map errors to
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BenfordError::InvalidInput`]
    InvalidInput,
    /// See [`BenfordError::InvalidSignificanceLevel`]
    InvalidSignificanceLevel,
    /// See [`BenfordError::InsufficientData`]
    InsufficientData,
    /// See [`BenfordError::ComputationFailure`]
    ComputationFailure,
}

impl BenfordError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BenfordError::InvalidInput(_) => ErrorKind::InvalidInput,
            BenfordError::InvalidSignificanceLevel(_) => ErrorKind::InvalidSignificanceLevel,
            BenfordError::InsufficientData { .. } => ErrorKind::InsufficientData,
            BenfordError::ComputationFailure { .. } => ErrorKind::ComputationFailure,
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::ComputationFailure)
    }

    pub(crate) fn computation(message: impl Into<String>, source: impl Into<NumericError>) -> Self {
        BenfordError::ComputationFailure {
            message: message.into(),
            source: source.into(),
        }
    }
}
