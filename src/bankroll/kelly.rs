//! Kelly Criterion and expected-value calculations on decimal odds.
//!
//! The Kelly formula sizes a bet to maximise the expected logarithm of wealth.
//!
//! Standard formula:
//!   f* = (b·p − q) / b
//! where
//!   b  = net odds received on the bet (decimal odds − 1)
//!   p  = estimated probability of winning
//!   q  = 1 − p  (probability of losing)
//!
//! Probabilities enter these functions in percent (0–100), the unit the
//! bettor types in.  Nothing here fails: out-of-domain input degrades to a
//! zero result so that every reported number stays finite.

use serde::{Deserialize, Serialize};

use super::finite_or_zero;

/// Kelly verdict for one candidate bet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KellyAssessment {
    /// Raw f* (negative when there is no edge)
    pub fraction: f64,
    /// f* in percent, floored at 0
    pub percentage: f64,
    /// f* > 0
    pub is_value_bet: bool,
    /// Bankroll share to stake, floored at 0
    pub recommended_stake: f64,
}

/// Expected value of staking `stake` at `odds` with a win probability of
/// `probability_pct` percent.
///
/// EV = p · odds · stake − stake
pub fn expected_value(odds: f64, probability_pct: f64, stake: f64) -> f64 {
    let p = probability_pct / 100.0;
    finite_or_zero(p * odds * stake - stake)
}

/// Full-Kelly assessment of a bet against `bankroll`.
///
/// Odds of 1.0 or less pay no profit, which leaves `b = 0` in the
/// denominator; such bets get the zero assessment.
pub fn kelly_fraction(odds: f64, probability_pct: f64, bankroll: f64) -> KellyAssessment {
    if !odds.is_finite() || odds <= 1.0 || !probability_pct.is_finite() {
        return KellyAssessment::default();
    }

    let b = odds - 1.0;
    let p = probability_pct / 100.0;
    let q = 1.0 - p;

    let f = finite_or_zero((b * p - q) / b);
    let is_value_bet = f > 0.0;

    // Never recommend a short position against our own estimate
    let recommended_stake = if is_value_bet {
        finite_or_zero(bankroll * f).max(0.0)
    } else {
        0.0
    };

    KellyAssessment {
        fraction: f,
        percentage: (f * 100.0).max(0.0),
        is_value_bet,
        recommended_stake,
    }
}

/// Gross payout of a winning bet, stake included.
pub fn potential_return(stake: f64, odds: f64) -> f64 {
    finite_or_zero(stake * odds)
}
