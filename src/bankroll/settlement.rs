use crate::models::BetResult;

use super::finite_or_zero;

/// Realised profit of a graded bet.
///
/// A win pays `stake * odds` back, so the profit is that minus the stake.
/// Void bets refund the stake and pending bets have no profit yet.
pub fn settlement_profit(result: BetResult, stake: f64, odds: f64) -> f64 {
    let profit = match result {
        BetResult::Win => stake * odds - stake,
        BetResult::Loss => -stake,
        BetResult::Void | BetResult::Pending => 0.0,
    };
    finite_or_zero(profit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_win_profit() {
        assert_relative_eq!(
            settlement_profit(BetResult::Win, 100.0, 2.5),
            150.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_loss_profit() {
        assert_eq!(settlement_profit(BetResult::Loss, 100.0, 2.5), -100.0);
    }

    #[test]
    fn test_void_and_pending_profit() {
        assert_eq!(settlement_profit(BetResult::Void, 100.0, 2.5), 0.0);
        assert_eq!(settlement_profit(BetResult::Pending, 100.0, 2.5), 0.0);
    }

    #[test]
    fn test_even_odds_win_is_flat() {
        assert_eq!(settlement_profit(BetResult::Win, 100.0, 1.0), 0.0);
    }
}
