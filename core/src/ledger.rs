//! Loka token ledger.
//!
//! The running balance and the append-only log are only ever touched together
//! by [`TokenLedger::earn`] and [`TokenLedger::spend`], so the counter cannot
//! drift from the log.

use chrono::{DateTime, Utc};
use thiserror::Error;

use loka_types::{AiService, LedgerEntry, LedgerEvent};

pub const DEFAULT_STARTING_BALANCE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("token amount must be positive")]
    ZeroAmount,
    #[error("insufficient balance: {requested} requested, {available} available")]
    InsufficientBalance { requested: u64, available: u64 },
    #[error("token balance would overflow")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLedger {
    balance: u64,
    spent: u64,
    entries: Vec<LedgerEntry>,
}

impl Default for TokenLedger {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl TokenLedger {
    /// A fresh ledger. The starting grant is not logged.
    #[must_use]
    pub fn new(starting_balance: u64) -> Self {
        Self {
            balance: starting_balance,
            spent: 0,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    #[must_use]
    pub fn spent(&self) -> u64 {
        self.spent
    }

    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn earned_history(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(|entry| entry.is_earn())
    }

    /// Credit `amount` tokens. On error nothing changes.
    pub fn earn(
        &mut self,
        amount: u64,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<u64, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balance = balance;
        self.entries.push(LedgerEntry {
            amount,
            event: LedgerEvent::Earned {
                reason: reason.into(),
            },
            at,
        });
        Ok(balance)
    }

    /// Debit `amount` tokens for `service` if the balance covers it.
    /// On error nothing changes.
    ///
    /// The balance check is the only guard. A zero spend always succeeds and
    /// is not logged, since neither counter moves.
    pub fn spend(
        &mut self,
        amount: u64,
        service: AiService,
        at: DateTime<Utc>,
    ) -> Result<u64, LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        if amount == 0 {
            return Ok(self.balance);
        }
        let spent = self.spent.checked_add(amount).ok_or(LedgerError::Overflow)?;
        self.balance -= amount;
        self.spent = spent;
        self.entries.push(LedgerEntry {
            amount,
            event: LedgerEvent::Spent { service },
            at,
        });
        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use loka_types::{AiService, LedgerEvent};

    use super::{LedgerError, TokenLedger};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn starts_with_default_grant_and_empty_log() {
        let ledger = TokenLedger::default();
        assert_eq!(ledger.balance(), 100);
        assert_eq!(ledger.spent(), 0);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn earn_adds_exactly_amount_and_one_entry() {
        let mut ledger = TokenLedger::new(0);
        assert_eq!(ledger.earn(15, "Selected startup stage", at()), Ok(15));
        assert_eq!(ledger.balance(), 15);
        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.earned_history().count(), 1);
        assert_eq!(ledger.entries()[0].label(), "Selected startup stage");
    }

    #[test]
    fn zero_earn_is_refused() {
        let mut ledger = TokenLedger::new(10);
        assert_eq!(ledger.earn(0, "nothing", at()), Err(LedgerError::ZeroAmount));
        assert_eq!(ledger.balance(), 10);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn overflowing_earn_is_refused() {
        let mut ledger = TokenLedger::new(u64::MAX);
        assert_eq!(ledger.earn(1, "one more", at()), Err(LedgerError::Overflow));
        assert_eq!(ledger.balance(), u64::MAX);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn spend_within_balance_debits_and_logs() {
        let mut ledger = TokenLedger::new(100);
        assert_eq!(ledger.spend(5, AiService::RdHelp, at()), Ok(95));
        assert_eq!(ledger.balance(), 95);
        assert_eq!(ledger.spent(), 5);
        assert_eq!(
            ledger.entries()[0].event,
            LedgerEvent::Spent {
                service: AiService::RdHelp
            }
        );
        assert_eq!(ledger.earned_history().count(), 0);
    }

    #[test]
    fn spend_of_exact_balance_is_allowed() {
        let mut ledger = TokenLedger::new(5);
        assert_eq!(ledger.spend(5, AiService::ColdCalling, at()), Ok(0));
    }

    #[test]
    fn zero_spend_succeeds_without_an_entry() {
        let mut ledger = TokenLedger::new(0);
        assert_eq!(ledger.spend(0, AiService::RdHelp, at()), Ok(0));
        assert_eq!(ledger.spent(), 0);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn spend_over_balance_changes_nothing() {
        let mut ledger = TokenLedger::new(3);
        let before = ledger.clone();
        assert_eq!(
            ledger.spend(5, AiService::RdHelp, at()),
            Err(LedgerError::InsufficientBalance {
                requested: 5,
                available: 3
            })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn balance_matches_log_after_mixed_activity() {
        let mut ledger = TokenLedger::new(0);
        let _ = ledger.earn(10, "a", at());
        let _ = ledger.spend(4, AiService::PitchDeckHelp, at());
        let _ = ledger.spend(40, AiService::PitchDeckHelp, at());
        let _ = ledger.earn(25, "b", at());
        let earned: u64 = ledger.earned_history().map(|e| e.amount).sum();
        assert_eq!(ledger.balance(), earned - ledger.spent());
        assert_eq!(ledger.entries().len(), 3);
    }
}
