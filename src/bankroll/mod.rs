pub mod kelly;
pub mod settlement;
pub mod stake;

pub use kelly::{expected_value, kelly_fraction, potential_return, KellyAssessment};
pub use settlement::settlement_profit;
pub use stake::{advise, suggested_stake, StakeAdvice};

/// Collapse NaN and infinities to zero so callers only ever see finite numbers.
pub(crate) fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
