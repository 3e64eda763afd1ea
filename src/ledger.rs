use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::bankroll::{expected_value, potential_return, settlement_profit, suggested_stake};
use crate::error::ValidationError;
use crate::models::{BankrollPolicy, BetDraft, BetRecord, BetResult, PerformanceSnapshot};
use crate::performance::aggregate;

/// In-memory bet history with its running bankroll balance.
///
/// The ledger owns the records and the bankroll policy.  It keeps
/// `bankroll_after` consistent as records are added, graded or removed, and
/// hands out a fresh `PerformanceSnapshot` whenever asked.  Persisting the
/// records is left to the caller.
#[derive(Debug, Clone)]
pub struct Ledger {
    policy: BankrollPolicy,
    records: Vec<BetRecord>,
    /// Counter behind ledger-assigned ids; only ever advanced by allocation
    next_seq: u64,
}

impl Ledger {
    pub fn new(policy: BankrollPolicy) -> Self {
        Ledger {
            policy,
            records: Vec::new(),
            next_seq: 1,
        }
    }

    /// Resume from a previously exported history.
    ///
    /// Balances are taken as given.  Ids are opaque strings; a record with an
    /// empty id, or one repeating an earlier record's id, gets a fresh one.
    pub fn from_records(policy: BankrollPolicy, records: Vec<BetRecord>) -> Self {
        let mut ledger = Ledger {
            policy,
            records,
            next_seq: 1,
        };
        let mut seen: HashSet<String> = HashSet::with_capacity(ledger.records.len());
        for i in 0..ledger.records.len() {
            let id = &ledger.records[i].id;
            if !id.is_empty() && seen.insert(id.clone()) {
                continue;
            }
            let fresh = ledger.allocate_id();
            warn!("Record {} has a missing or duplicate id; assigned #{}", i + 1, fresh);
            seen.insert(fresh.clone());
            ledger.records[i].id = fresh;
        }
        debug!("Ledger loaded with {} record(s)", ledger.records.len());
        ledger
    }

    /// Next sequence number not already taken by any record
    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = self.next_seq.to_string();
            self.next_seq = self.next_seq.wrapping_add(1);
            if !self.records.iter().any(|r| r.id == candidate) {
                return candidate;
            }
        }
    }

    // ── Bankroll ──────────────────────────────────────────────────────────────

    /// Balance after the latest record, or the initial bankroll when empty
    pub fn current_bankroll(&self) -> f64 {
        self.records
            .last()
            .map(|r| r.bankroll_after)
            .unwrap_or(self.policy.initial_bankroll)
    }

    /// The policy, with `current_bankroll` reflecting the record history
    pub fn policy(&self) -> BankrollPolicy {
        BankrollPolicy {
            current_bankroll: self.current_bankroll(),
            ..self.policy.clone()
        }
    }

    /// Replace the bankroll policy.
    ///
    /// A different initial bankroll shifts every running balance.
    pub fn set_policy(&mut self, policy: BankrollPolicy) {
        let rebase = policy.initial_bankroll != self.policy.initial_bankroll;
        info!(
            "Bankroll policy set: method={} initial={:.2}",
            policy.method, policy.initial_bankroll
        );
        self.policy = policy;
        if rebase {
            self.rebalance_from(0);
        }
    }

    /// Stake the policy suggests for a candidate bet at the current bankroll
    pub fn suggest(&self, odds: Option<f64>, probability_pct: Option<f64>) -> f64 {
        suggested_stake(&self.policy, self.current_bankroll(), odds, probability_pct)
    }

    // ── Records ───────────────────────────────────────────────────────────────

    pub fn records(&self) -> &[BetRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&BetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Place a validated draft at the end of the history.
    ///
    /// EV, potential return and share of bankroll are frozen here against the
    /// current bankroll and never recomputed.
    pub fn add_record(&mut self, draft: &BetDraft) -> Result<&BetRecord, ValidationError> {
        draft.validate()?;

        let bankroll = self.current_bankroll();
        let stake = draft.stake_amount;
        let net_profit = settlement_profit(draft.result, stake, draft.odds);
        let percentage_of_bankroll = if bankroll > 0.0 {
            stake / bankroll * 100.0
        } else {
            0.0
        };

        let record = BetRecord {
            id: self.allocate_id(),
            date: draft.date,
            event: draft.event_name(),
            home_team: draft.home_team.clone(),
            away_team: draft.away_team.clone(),
            league: draft.league.clone(),
            bet_type: draft.bet_type.clone(),
            odds: draft.odds,
            stake_amount: stake,
            estimated_probability: draft.estimated_probability,
            expected_value: expected_value(draft.odds, draft.estimated_probability, stake),
            potential_return: potential_return(stake, draft.odds),
            result: draft.result,
            net_profit,
            bankroll_after: bankroll + net_profit,
            percentage_of_bankroll,
        };
        info!(
            "Recorded bet #{} '{}' stake {:.2} @ {:.2} ({})",
            record.id, record.event, record.stake_amount, record.odds, record.result
        );

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Grade a pending bet and carry its profit through every later balance.
    ///
    /// Settled records are final: grading one again is refused and leaves the
    /// ledger untouched.
    pub fn update_result(&mut self, id: &str, result: BetResult) -> Option<&BetRecord> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            warn!("Cannot update bet #{}: not in ledger", id);
            return None;
        };

        let record = &mut self.records[idx];
        if record.is_settled() {
            warn!(
                "Cannot update bet #{}: already settled as {}",
                id, record.result
            );
            return None;
        }

        record.result = result;
        record.net_profit = settlement_profit(result, record.stake_amount, record.odds);
        info!("Bet #{} graded {} (net {:.2})", id, result, record.net_profit);

        self.rebalance_from(idx);
        self.records.get(idx)
    }

    /// Remove a bet; later balances no longer include its profit.
    pub fn delete_record(&mut self, id: &str) -> Option<BetRecord> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            warn!("Cannot delete bet #{}: not in ledger", id);
            return None;
        };

        let removed = self.records.remove(idx);
        info!("Deleted bet #{} '{}'", removed.id, removed.event);
        self.rebalance_from(idx);
        Some(removed)
    }

    // ── Stats ─────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> PerformanceSnapshot {
        aggregate(&self.records)
    }

    /// Re-run the balance fold from `start` to the end of the history.
    fn rebalance_from(&mut self, start: usize) {
        let mut balance = match start.checked_sub(1) {
            Some(prev) => self.records[prev].bankroll_after,
            None => self.policy.initial_bankroll,
        };
        for record in self.records.iter_mut().skip(start) {
            balance += record.net_profit;
            record.bankroll_after = balance;
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(BankrollPolicy::default())
    }
}
