//! Portfolio statistics over a bettor's record history.
//!
//! Always a full recompute in one pass over the records; nothing is cached
//! between calls.

use std::collections::HashMap;

use crate::bankroll::finite_or_zero;
use crate::models::{BetRecord, BetResult, PerformanceSnapshot};

/// Running win/loss streak counters
#[derive(Debug, Clone, Copy, Default)]
struct StreakTracker {
    current_win: u32,
    current_loss: u32,
    longest_win: u32,
    longest_loss: u32,
}

impl StreakTracker {
    fn observe(&mut self, result: BetResult) {
        match result {
            BetResult::Win => {
                self.current_win += 1;
                self.current_loss = 0;
                self.longest_win = self.longest_win.max(self.current_win);
            }
            BetResult::Loss => {
                self.current_loss += 1;
                self.current_win = 0;
                self.longest_loss = self.longest_loss.max(self.current_loss);
            }
            // Voided bets are not outcomes; they neither extend nor break a run
            BetResult::Void | BetResult::Pending => {}
        }
    }
}

/// Aggregate every settled record into a `PerformanceSnapshot`.
///
/// Records are taken in the order given, which is assumed chronological.
/// Pending bets are ignored.  An empty settled set yields the all-zero
/// snapshot, and every figure is finite even when a record is not.
pub fn aggregate(records: &[BetRecord]) -> PerformanceSnapshot {
    let settled: Vec<&BetRecord> = records.iter().filter(|r| r.is_settled()).collect();
    if settled.is_empty() {
        return PerformanceSnapshot::default();
    }

    let total_bets = settled.len();
    let mut total_staked = 0.0;
    let mut net_profit = 0.0;
    let mut odds_sum = 0.0;
    let mut wins = 0usize;
    let mut streaks = StreakTracker::default();
    let mut profit_by_bet_type: HashMap<String, f64> = HashMap::new();
    let mut profit_by_league: HashMap<String, f64> = HashMap::new();

    for bet in &settled {
        total_staked += bet.stake_amount;
        net_profit += bet.net_profit;
        odds_sum += bet.odds;
        if bet.result == BetResult::Win {
            wins += 1;
        }
        streaks.observe(bet.result);

        *profit_by_bet_type.entry(bet.bet_type.clone()).or_insert(0.0) += bet.net_profit;
        *profit_by_league.entry(bet.league.clone()).or_insert(0.0) += bet.net_profit;
    }

    let total_staked = finite_or_zero(total_staked);
    let net_profit = finite_or_zero(net_profit);
    let roi = if total_staked > 0.0 {
        finite_or_zero(net_profit / total_staked * 100.0)
    } else {
        0.0
    };
    for profit in profit_by_bet_type
        .values_mut()
        .chain(profit_by_league.values_mut())
    {
        *profit = finite_or_zero(*profit);
    }

    PerformanceSnapshot {
        total_bets,
        total_staked,
        total_return: finite_or_zero(total_staked + net_profit),
        net_profit,
        roi,
        win_rate: wins as f64 / total_bets as f64 * 100.0,
        average_odds: finite_or_zero(odds_sum / total_bets as f64),
        longest_win_streak: streaks.longest_win,
        longest_loss_streak: streaks.longest_loss,
        profit_by_bet_type,
        profit_by_league,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bankroll::settlement_profit;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_record(
        result: BetResult,
        stake: f64,
        odds: f64,
        league: &str,
        bet_type: &str,
    ) -> BetRecord {
        BetRecord {
            id: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            event: "Home vs Away".into(),
            home_team: "Home".into(),
            away_team: "Away".into(),
            league: league.into(),
            bet_type: bet_type.into(),
            odds,
            stake_amount: stake,
            estimated_probability: 50.0,
            expected_value: 0.0,
            potential_return: stake * odds,
            result,
            net_profit: settlement_profit(result, stake, odds),
            bankroll_after: 0.0,
            percentage_of_bankroll: 0.0,
        }
    }

    fn outcome(result: BetResult) -> BetRecord {
        make_record(result, 10.0, 2.0, "Serie A", "1X2")
    }

    #[test]
    fn test_empty_history() {
        let snapshot = aggregate(&[]);
        assert_eq!(snapshot, PerformanceSnapshot::default());
        assert_eq!(snapshot.total_bets, 0);
        assert_eq!(snapshot.roi, 0.0);
        assert!(snapshot.profit_by_bet_type.is_empty());
        assert!(snapshot.profit_by_league.is_empty());
    }

    #[test]
    fn test_only_pending_is_empty() {
        let records = vec![outcome(BetResult::Pending), outcome(BetResult::Pending)];
        assert_eq!(aggregate(&records), PerformanceSnapshot::default());
    }

    #[test]
    fn test_totals_and_ratios() {
        let records = vec![
            make_record(BetResult::Win, 100.0, 2.5, "Premier League", "1X2"),
            make_record(BetResult::Loss, 50.0, 1.8, "La Liga", "Over 2.5"),
            make_record(BetResult::Void, 20.0, 3.0, "La Liga", "1X2"),
            make_record(BetResult::Pending, 999.0, 9.0, "Bundesliga", "BTTS"),
        ];
        let s = aggregate(&records);

        assert_eq!(s.total_bets, 3);
        assert_relative_eq!(s.total_staked, 170.0, epsilon = 1e-9);
        assert_relative_eq!(s.net_profit, 100.0, epsilon = 1e-9);
        assert_relative_eq!(s.total_return, 270.0, epsilon = 1e-9);
        assert_relative_eq!(s.roi, 100.0 / 170.0 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(s.win_rate, 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(s.average_odds, (2.5 + 1.8 + 3.0) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_profit_breakdowns() {
        let records = vec![
            make_record(BetResult::Win, 100.0, 2.5, "Premier League", "1X2"),
            make_record(BetResult::Loss, 50.0, 1.8, "La Liga", "Over 2.5"),
            make_record(BetResult::Win, 10.0, 2.0, "La Liga", "1X2"),
            make_record(BetResult::Pending, 999.0, 9.0, "Bundesliga", "BTTS"),
        ];
        let s = aggregate(&records);

        assert_eq!(s.profit_by_bet_type.len(), 2);
        assert_relative_eq!(s.profit_by_bet_type["1X2"], 160.0, epsilon = 1e-9);
        assert_relative_eq!(s.profit_by_bet_type["Over 2.5"], -50.0, epsilon = 1e-9);

        assert_eq!(s.profit_by_league.len(), 2);
        assert_relative_eq!(s.profit_by_league["Premier League"], 150.0, epsilon = 1e-9);
        assert_relative_eq!(s.profit_by_league["La Liga"], -40.0, epsilon = 1e-9);
        assert!(!s.profit_by_league.contains_key("Bundesliga"));
    }

    #[test]
    fn test_void_does_not_break_streak() {
        use BetResult::*;
        let records: Vec<BetRecord> = [Win, Win, Loss, Win, Void, Win, Win, Win]
            .into_iter()
            .map(outcome)
            .collect();
        let s = aggregate(&records);
        assert_eq!(s.longest_win_streak, 3);
        assert_eq!(s.longest_loss_streak, 1);
    }

    #[test]
    fn test_pending_does_not_break_streak() {
        use BetResult::*;
        let records: Vec<BetRecord> = [Loss, Pending, Loss, Void, Loss, Win]
            .into_iter()
            .map(outcome)
            .collect();
        let s = aggregate(&records);
        assert_eq!(s.longest_loss_streak, 3);
        assert_eq!(s.longest_win_streak, 1);
    }

    #[test]
    fn test_all_void() {
        let records = vec![outcome(BetResult::Void), outcome(BetResult::Void)];
        let s = aggregate(&records);
        assert_eq!(s.total_bets, 2);
        assert_eq!(s.win_rate, 0.0);
        assert_eq!(s.net_profit, 0.0);
        assert_eq!(s.longest_win_streak, 0);
        assert_eq!(s.longest_loss_streak, 0);
    }

    #[test]
    fn test_zero_stake_roi_guard() {
        let records = vec![
            make_record(BetResult::Win, 0.0, 2.0, "Serie A", "1X2"),
            make_record(BetResult::Loss, 0.0, 2.0, "Serie A", "1X2"),
        ];
        let s = aggregate(&records);
        assert_eq!(s.roi, 0.0);
        assert!(s.roi.is_finite());
        assert_eq!(s.total_staked, 0.0);
    }

    #[test]
    fn test_non_finite_records_yield_finite_snapshot() {
        let mut runaway = make_record(BetResult::Loss, 10.0, 2.0, "Serie A", "1X2");
        runaway.stake_amount = f64::INFINITY;
        runaway.net_profit = f64::NEG_INFINITY;
        let records = vec![
            make_record(BetResult::Win, 100.0, 2.5, "Serie A", "1X2"),
            runaway,
            make_record(BetResult::Win, 10.0, f64::NAN, "La Liga", "BTTS"),
        ];
        let s = aggregate(&records);

        assert_eq!(s.total_bets, 3);
        assert_eq!(s.total_staked, 0.0);
        assert_eq!(s.net_profit, 0.0);
        assert_eq!(s.roi, 0.0);
        assert_eq!(s.total_return, 0.0);
        assert_eq!(s.average_odds, 0.0);
        assert_eq!(s.profit_by_league["Serie A"], 0.0);
        assert_eq!(s.profit_by_bet_type["1X2"], 0.0);
        assert_eq!(s.longest_win_streak, 1);
        assert_eq!(s.longest_loss_streak, 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            make_record(BetResult::Win, 100.0, 2.5, "Premier League", "1X2"),
            make_record(BetResult::Loss, 50.0, 1.8, "La Liga", "Over 2.5"),
        ];
        let before = records.clone();
        let first = aggregate(&records);
        let second = aggregate(&records);
        assert_eq!(first, second);
        assert_eq!(records, before);
    }
}
