//! Bankroll Tracker - sports betting stake sizing and performance tracking
//!
//! This library provides:
//! - Stake suggestions (fixed, percentage of bankroll, Kelly criterion)
//! - Expected value and settlement profit of individual bets
//! - Portfolio statistics (ROI, win rate, streaks, profit breakdowns)
//! - An in-memory ledger keeping the running bankroll balance
//!
//! # Example
//!
//! ```
//! use bankroll_tracker::bankroll::kelly_fraction;
//! use bankroll_tracker::performance::aggregate;
//!
//! let kelly = kelly_fraction(2.0, 60.0, 1000.0);
//! assert!(kelly.is_value_bet);
//!
//! let snapshot = aggregate(&[]);
//! assert_eq!(snapshot.total_bets, 0);
//! ```

pub mod bankroll;
pub mod error;
pub mod ledger;
pub mod models;
pub mod performance;

pub use error::ValidationError;
pub use ledger::Ledger;
pub use models::{
    BankrollPolicy, BetDraft, BetRecord, BetResult, PerformanceSnapshot, StakingMethod,
};
