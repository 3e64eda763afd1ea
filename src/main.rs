use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

mod config;

use bankroll_tracker::bankroll::advise;
use bankroll_tracker::performance::{
    average_expected_value, average_stake, bankroll_evolution, result_distribution,
    top_categories, BankrollPoint, ResultDistribution,
};
use bankroll_tracker::{BankrollPolicy, BetDraft, BetRecord, Ledger, PerformanceSnapshot};
use config::{Command, Config};

/// Everything the dashboard needs, as plain data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport {
    policy: BankrollPolicy,
    snapshot: PerformanceSnapshot,
    result_distribution: ResultDistribution,
    bankroll_evolution: Vec<BankrollPoint>,
    top_leagues: Vec<(String, f64)>,
    top_bet_types: Vec<(String, f64)>,
    average_expected_value: f64,
    average_stake: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayReport {
    policy: BankrollPolicy,
    records: Vec<BetRecord>,
    rejected: usize,
    snapshot: PerformanceSnapshot,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;
    let policy = config.policy();
    info!(
        "Staking method: {} (initial bankroll {:.2})",
        policy.method, policy.initial_bankroll
    );

    match &config.command {
        Command::Advise {
            odds,
            probability,
            stake,
        } => {
            if *odds <= 1.0 {
                warn!("Odds of {:.2} pay no profit; every figure will be zero", odds);
            }
            let advice = advise(
                &policy,
                policy.current_bankroll,
                *odds,
                *probability,
                *stake,
            );
            if !advice.kelly.is_value_bet {
                info!("No edge at {:.2} with {:.1}% estimated", odds, probability);
            }
            print_json(&advice)?;
        }
        Command::Summary { records, top } => {
            let records: Vec<BetRecord> = read_json(records)?;
            info!("Loaded {} bet record(s)", records.len());

            let ledger = Ledger::from_records(policy, records);
            let snapshot = ledger.snapshot();
            let report = SummaryReport {
                policy: ledger.policy(),
                top_leagues: top_categories(&snapshot.profit_by_league, *top),
                top_bet_types: top_categories(&snapshot.profit_by_bet_type, *top),
                result_distribution: result_distribution(ledger.records()),
                bankroll_evolution: bankroll_evolution(ledger.records()),
                average_expected_value: average_expected_value(ledger.records()),
                average_stake: average_stake(ledger.records()),
                snapshot,
            };
            print_json(&report)?;
        }
        Command::Replay { drafts } => {
            let drafts: Vec<BetDraft> = read_json(drafts)?;
            info!("Replaying {} draft(s)", drafts.len());

            let mut ledger = Ledger::new(policy);
            let mut rejected = 0;
            for (i, draft) in drafts.iter().enumerate() {
                if let Err(e) = ledger.add_record(draft) {
                    warn!("Skipping draft {}: {}", i + 1, e);
                    rejected += 1;
                }
            }
            let report = ReplayReport {
                policy: ledger.policy(),
                snapshot: ledger.snapshot(),
                records: ledger.records().to_vec(),
                rejected,
            };
            print_json(&report)?;
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
