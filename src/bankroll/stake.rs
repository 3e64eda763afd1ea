use serde::{Deserialize, Serialize};

use crate::models::{BankrollPolicy, StakingMethod};

use super::finite_or_zero;
use super::kelly::{expected_value, kelly_fraction, potential_return, KellyAssessment};

/// Stake suggested by `policy` against `bankroll`.
///
/// Kelly sizing needs both the odds and the estimated probability (percent);
/// if either is missing the suggestion is zero.  A zero value counts as
/// missing.
pub fn suggested_stake(
    policy: &BankrollPolicy,
    bankroll: f64,
    odds: Option<f64>,
    probability_pct: Option<f64>,
) -> f64 {
    let stake = match policy.method {
        StakingMethod::Fixed => policy.fixed_amount.unwrap_or(0.0),
        StakingMethod::Percentage => bankroll * (policy.percentage.unwrap_or(0.0) / 100.0),
        StakingMethod::Kelly => match (odds, probability_pct) {
            (Some(o), Some(p)) if o != 0.0 && p != 0.0 => {
                kelly_fraction(o, p, bankroll).recommended_stake
            }
            _ => 0.0,
        },
    };
    finite_or_zero(stake)
}

/// Everything the bet form shows while a draft is being edited
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeAdvice {
    pub suggested_stake: f64,
    /// Stake the EV and return figures were computed for
    pub stake: f64,
    pub expected_value: f64,
    pub potential_return: f64,
    pub kelly: KellyAssessment,
}

/// Recompute the draft-form figures for a candidate bet.
///
/// `stake` is the amount the bettor typed in; without one the suggested
/// stake is evaluated instead.  Cheap enough to call on every keystroke.
pub fn advise(
    policy: &BankrollPolicy,
    bankroll: f64,
    odds: f64,
    probability_pct: f64,
    stake: Option<f64>,
) -> StakeAdvice {
    let suggested = suggested_stake(policy, bankroll, Some(odds), Some(probability_pct));
    let stake = stake.map(finite_or_zero).unwrap_or(suggested);

    StakeAdvice {
        suggested_stake: suggested,
        stake,
        expected_value: expected_value(odds, probability_pct, stake),
        potential_return: potential_return(stake, odds),
        kelly: kelly_fraction(odds, probability_pct, bankroll),
    }
}
