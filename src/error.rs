use thiserror::Error;

/// Rejections raised when checking user-entered policy or bet data.
///
/// The calculation core never produces these; they belong to whoever collects
/// input before handing it to the core (the ledger and the CLI).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("fixed staking requires a positive fixed amount")]
    MissingFixedAmount,

    #[error("stake percentage must be in (0, 100], got {0}")]
    PercentageOutOfRange(f64),

    #[error("initial bankroll must be positive, got {0}")]
    NonPositiveBankroll(f64),

    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("odds must be greater than 1.00, got {0}")]
    OddsTooLow(f64),

    #[error("stake must be positive, got {0}")]
    NonPositiveStake(f64),

    #[error("estimated probability must be between 0% and 100% (exclusive), got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
}

/// Reject NaN and infinities before any range check runs.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

/// Reject empty or whitespace-only text fields.
pub(crate) fn ensure_present(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
