use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{BetRecord, BetResult};

/// One point on the bankroll-over-time chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankrollPoint {
    /// 1-based position of the bet in the history
    pub bet: usize,
    pub date: NaiveDate,
    pub bankroll: f64,
}

/// Count of records per result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDistribution {
    pub wins: usize,
    pub losses: usize,
    pub voids: usize,
    pub pending: usize,
}

/// Running balance after every record, pending ones included.
pub fn bankroll_evolution(records: &[BetRecord]) -> Vec<BankrollPoint> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| BankrollPoint {
            bet: i + 1,
            date: r.date,
            bankroll: r.bankroll_after,
        })
        .collect()
}

/// Count records per result, pending included.
pub fn result_distribution(records: &[BetRecord]) -> ResultDistribution {
    let mut dist = ResultDistribution::default();
    for r in records {
        match r.result {
            BetResult::Win => dist.wins += 1,
            BetResult::Loss => dist.losses += 1,
            BetResult::Void => dist.voids += 1,
            BetResult::Pending => dist.pending += 1,
        }
    }
    dist
}

/// The `limit` most profitable categories of a profit breakdown, best first.
///
/// Ties are ordered by name so the output is stable.
pub fn top_categories(profit: &HashMap<String, f64>, limit: usize) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = profit.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(limit);
    entries
}

/// Mean placement-time EV over all records (0 for an empty history).
pub fn average_expected_value(records: &[BetRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.expected_value).sum::<f64>() / records.len() as f64
}

/// Mean stake over all records (0 for an empty history).
pub fn average_stake(records: &[BetRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.stake_amount).sum::<f64>() / records.len() as f64
}
