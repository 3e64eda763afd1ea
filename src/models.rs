use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{ensure_finite, ensure_present, ValidationError};

/// Outcome of a bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetResult {
    #[default]
    Pending,
    Win,
    Loss,
    Void,
}

impl BetResult {
    /// Whether the bet has been graded (anything but pending)
    pub fn is_settled(self) -> bool {
        self != BetResult::Pending
    }
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetResult::Pending => write!(f, "pending"),
            BetResult::Win => write!(f, "win"),
            BetResult::Loss => write!(f, "loss"),
            BetResult::Void => write!(f, "void"),
        }
    }
}

/// How stakes are sized
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StakingMethod {
    /// Same amount on every bet
    Fixed,
    /// A fixed share of the current bankroll
    #[default]
    Percentage,
    /// Full Kelly, computed per bet from odds and probability
    Kelly,
}

impl fmt::Display for StakingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakingMethod::Fixed => write!(f, "fixed"),
            StakingMethod::Percentage => write!(f, "percentage"),
            StakingMethod::Kelly => write!(f, "kelly"),
        }
    }
}

/// Bankroll management configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankrollPolicy {
    pub method: StakingMethod,
    /// Stake per bet; only read by `StakingMethod::Fixed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_amount: Option<f64>,
    /// Share of bankroll in percent (0 < p ≤ 100); only read by `StakingMethod::Percentage`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    pub initial_bankroll: f64,
    /// Balance the caller last derived from its records
    pub current_bankroll: f64,
}

impl Default for BankrollPolicy {
    fn default() -> Self {
        Self {
            method: StakingMethod::Percentage,
            fixed_amount: None,
            percentage: Some(3.0),
            initial_bankroll: 1000.0,
            current_bankroll: 1000.0,
        }
    }
}

impl BankrollPolicy {
    /// Check that the parameter required by the selected method is present and in range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let initial = ensure_finite("initial bankroll", self.initial_bankroll)?;
        if initial <= 0.0 {
            return Err(ValidationError::NonPositiveBankroll(initial));
        }
        match self.method {
            StakingMethod::Fixed => match self.fixed_amount {
                Some(amount) if amount.is_finite() && amount > 0.0 => Ok(()),
                _ => Err(ValidationError::MissingFixedAmount),
            },
            StakingMethod::Percentage => {
                let pct = ensure_finite("stake percentage", self.percentage.unwrap_or(0.0))?;
                if pct > 0.0 && pct <= 100.0 {
                    Ok(())
                } else {
                    Err(ValidationError::PercentageOutOfRange(pct))
                }
            }
            StakingMethod::Kelly => Ok(()),
        }
    }
}

/// A bet being drafted, before it is placed in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetDraft {
    pub date: NaiveDate,
    /// Display name; derived from the teams when absent
    #[serde(default)]
    pub event: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub bet_type: String,
    pub odds: f64,
    pub stake_amount: f64,
    /// Win probability in percent (0–100 exclusive)
    pub estimated_probability: f64,
    #[serde(default)]
    pub result: BetResult,
}

impl BetDraft {
    /// Event name, e.g. "Arsenal vs Chelsea" when none was typed in.
    pub fn event_name(&self) -> String {
        match &self.event {
            Some(event) if !event.trim().is_empty() => event.clone(),
            _ => format!("{} vs {}", self.home_team, self.away_team),
        }
    }

    /// Field checks done before a draft may be recorded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("home team", &self.home_team)?;
        ensure_present("away team", &self.away_team)?;
        ensure_present("league", &self.league)?;
        ensure_present("bet type", &self.bet_type)?;

        let odds = ensure_finite("odds", self.odds)?;
        if odds <= 1.0 {
            return Err(ValidationError::OddsTooLow(odds));
        }
        let stake = ensure_finite("stake", self.stake_amount)?;
        if stake <= 0.0 {
            return Err(ValidationError::NonPositiveStake(stake));
        }
        let prob = ensure_finite("estimated probability", self.estimated_probability)?;
        if prob <= 0.0 || prob >= 100.0 {
            return Err(ValidationError::ProbabilityOutOfRange(prob));
        }
        Ok(())
    }
}

/// A placed bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    /// Opaque identifier; empty until the ledger assigns one
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub event: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub bet_type: String,
    /// Decimal odds (≥ 1.01)
    pub odds: f64,
    pub stake_amount: f64,
    /// Win probability in percent
    pub estimated_probability: f64,
    /// Frozen at placement
    pub expected_value: f64,
    /// Frozen at placement (gross, stake included)
    pub potential_return: f64,
    pub result: BetResult,
    pub net_profit: f64,
    /// Running balance once this bet is graded
    pub bankroll_after: f64,
    /// Frozen at placement
    pub percentage_of_bankroll: f64,
}

impl BetRecord {
    pub fn is_settled(&self) -> bool {
        self.result.is_settled()
    }
}

/// Portfolio statistics over a record history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub total_bets: usize,
    pub total_staked: f64,
    /// Gross amount paid back (stakes plus net profit)
    pub total_return: f64,
    pub net_profit: f64,
    /// Percent of total staked
    pub roi: f64,
    /// Percent of settled bets won
    pub win_rate: f64,
    pub average_odds: f64,
    pub longest_win_streak: u32,
    pub longest_loss_streak: u32,
    pub profit_by_bet_type: HashMap<String, f64>,
    pub profit_by_league: HashMap<String, f64>,
}
