pub mod aggregate;
pub mod series;

pub use aggregate::aggregate;
pub use series::{
    average_expected_value, average_stake, bankroll_evolution, result_distribution,
    top_categories, BankrollPoint, ResultDistribution,
};
