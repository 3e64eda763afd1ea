use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bankroll_tracker::{BankrollPolicy, StakingMethod};

/// Sports betting bankroll sizing and performance tracker
#[derive(Parser, Debug, Clone)]
#[command(name = "bankroll-tracker", version, about)]
pub struct Config {
    /// Stake sizing method
    #[arg(
        long,
        env = "STAKING_METHOD",
        value_enum,
        default_value = "percentage",
        global = true
    )]
    pub method: StakingMethod,

    /// Stake per bet for the fixed method
    #[arg(long, env = "FIXED_AMOUNT", global = true)]
    pub fixed_amount: Option<f64>,

    /// Share of bankroll per bet for the percentage method (0–100]
    #[arg(long, env = "STAKE_PERCENTAGE", default_value = "3.0", global = true)]
    pub percentage: f64,

    /// Starting bankroll
    #[arg(long, env = "INITIAL_BANKROLL", default_value = "1000.0", global = true)]
    pub initial_bankroll: f64,

    /// Bankroll to size stakes against; defaults to the initial bankroll.
    /// Record summaries always report the balance after the last record
    #[arg(long, env = "CURRENT_BANKROLL", global = true)]
    pub current_bankroll: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest a stake and evaluate a candidate bet
    Advise {
        /// Decimal odds
        #[arg(long)]
        odds: f64,

        /// Estimated win probability in percent
        #[arg(long)]
        probability: f64,

        /// Stake to evaluate; defaults to the suggested stake
        #[arg(long)]
        stake: Option<f64>,
    },

    /// Performance report for a JSON array of bet records
    Summary {
        /// Path to the records file
        #[arg(long)]
        records: PathBuf,

        /// Number of leagues / bet types listed in the top tables
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Place a JSON array of bet drafts into a fresh ledger
    Replay {
        /// Path to the drafts file
        #[arg(long)]
        drafts: PathBuf,
    },
}

impl Config {
    pub fn policy(&self) -> BankrollPolicy {
        BankrollPolicy {
            method: self.method,
            fixed_amount: self.fixed_amount,
            percentage: Some(self.percentage),
            initial_bankroll: self.initial_bankroll,
            current_bankroll: self.current_bankroll.unwrap_or(self.initial_bankroll),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.policy().validate()?;
        if let Some(current) = self.current_bankroll {
            if !current.is_finite() {
                anyhow::bail!("current_bankroll must be a finite number");
            }
        }
        if let Command::Summary { top, .. } = &self.command {
            if *top == 0 {
                anyhow::bail!("top must be at least 1");
            }
        }
        Ok(())
    }
}
