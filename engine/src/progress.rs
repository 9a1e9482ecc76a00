//! Progress store: the single owned record of a founder's journey.
//!
//! Every mutation goes through a method here. Nothing panics; inputs that
//! make no sense degrade to no-ops (with a log line) or typed errors.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};

use loka_core::ledger::DEFAULT_STARTING_BALANCE;
use loka_core::registry::{self, StepDefinition, StepKind};
use loka_core::{LedgerError, TokenLedger, resolve_next_step};
use loka_types::{AiService, Choice, DecisionKey, StepId, SupportService};

use crate::profile::FounderProfile;

#[derive(Debug, Clone)]
pub struct ProgressStore {
    current_step: StepId,
    completed_steps: Vec<StepId>,
    decisions: BTreeMap<DecisionKey, Choice>,
    ledger: TokenLedger,
    starting_balance: u64,
    services_used: BTreeSet<AiService>,
    support_services: BTreeSet<SupportService>,
    errors: BTreeMap<String, String>,
    loading: bool,
    /// One-shot redirect signal; `Some` means pending.
    redirect: Option<StepId>,
    clock: fn() -> DateTime<Utc>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl ProgressStore {
    #[must_use]
    pub fn new(starting_balance: u64) -> Self {
        Self {
            current_step: StepId::default(),
            completed_steps: Vec::new(),
            decisions: BTreeMap::new(),
            ledger: TokenLedger::new(starting_balance),
            starting_balance,
            services_used: BTreeSet::new(),
            support_services: BTreeSet::new(),
            errors: BTreeMap::new(),
            loading: false,
            redirect: None,
            clock: Utc::now,
        }
    }

    /// Replace the timestamp source used for ledger entries.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    #[must_use]
    pub fn completed_steps(&self) -> &[StepId] {
        &self.completed_steps
    }

    #[must_use]
    pub fn decisions(&self) -> &BTreeMap<DecisionKey, Choice> {
        &self.decisions
    }

    #[must_use]
    pub fn decision(&self, key: &DecisionKey) -> Option<&Choice> {
        self.decisions.get(key)
    }

    #[must_use]
    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    #[must_use]
    pub fn spent(&self) -> u64 {
        self.ledger.spent()
    }

    #[must_use]
    pub fn service_used(&self, service: AiService) -> bool {
        self.services_used.contains(&service)
    }

    #[must_use]
    pub fn support_selected(&self, service: SupportService) -> bool {
        self.support_services.contains(&service)
    }

    pub fn support_services(&self) -> impl Iterator<Item = SupportService> + '_ {
        self.support_services.iter().copied()
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<StepId> {
        self.redirect
    }

    #[must_use]
    pub fn redirect_pending(&self) -> bool {
        self.redirect.is_some()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump straight to `step`. No history is recorded.
    pub fn go_to_step(&mut self, step: StepId) {
        tracing::debug!(from = %self.current_step, to = %step, "go to step");
        self.current_step = step;
    }

    /// Like [`go_to_step`](Self::go_to_step) for a wire name.
    /// Unknown names are logged and ignored.
    pub fn go_to_step_named(&mut self, name: &str) {
        match StepId::parse(name) {
            Some(step) => self.go_to_step(step),
            None => tracing::warn!("Ignoring navigation to unknown step {:?}", name),
        }
    }

    /// Record a decision and follow it.
    ///
    /// The previous step is appended to the history, the routed target
    /// becomes current, and the redirect signal is raised for the target.
    /// Decisions the router does not know keep the founder on the same step
    /// but still raise the signal.
    pub fn make_decision(&mut self, key: impl Into<DecisionKey>, choice: impl Into<Choice>) {
        let key = key.into();
        let choice = choice.into();
        let previous = self.current_step;
        let next = resolve_next_step(&key, &choice, previous);
        tracing::debug!(decision = %key, %choice, from = %previous, to = %next, "decision");

        self.decisions.insert(key, choice);
        self.completed_steps.push(previous);
        self.current_step = next;
        self.redirect = Some(next);
    }

    /// Advance without a decision. Does not raise the redirect signal.
    pub fn complete_step(&mut self, next: Option<StepId>) {
        let previous = self.current_step;
        let next = next.unwrap_or_else(|| registry::completion_target(previous));
        tracing::debug!(from = %previous, to = %next, "complete step");
        self.completed_steps.push(previous);
        self.current_step = next;
    }

    /// Idempotent.
    pub fn clear_redirect_flag(&mut self) {
        if let Some(step) = self.redirect.take() {
            tracing::debug!(target_step = %step, "redirect consumed");
        }
    }

    #[must_use]
    pub fn can_access_step(&self, step: StepId) -> bool {
        registry::can_access(self.current_step, step)
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    /// Credit tokens. Returns the new balance.
    pub fn earn_tokens(&mut self, amount: u64, reason: &str) -> Result<u64, LedgerError> {
        let at = (self.clock)();
        match self.ledger.earn(amount, reason, at) {
            Ok(balance) => {
                tracing::debug!(amount, reason, balance, "earned tokens");
                Ok(balance)
            }
            Err(err) => {
                tracing::warn!("Refused to earn {} tokens ({}): {}", amount, reason, err);
                Err(err)
            }
        }
    }

    /// Debit tokens for `service` and mark it used.
    ///
    /// When the balance does not cover `amount` nothing changes; the returned
    /// error says why.
    pub fn spend_tokens(&mut self, amount: u64, service: AiService) -> Result<u64, LedgerError> {
        let at = (self.clock)();
        match self.ledger.spend(amount, service, at) {
            Ok(balance) => {
                self.services_used.insert(service);
                tracing::debug!(amount, %service, balance, "spent tokens");
                Ok(balance)
            }
            Err(err) => {
                tracing::debug!(amount, %service, %err, "spend refused");
                Err(err)
            }
        }
    }

    // ========================================================================
    // Form state
    // ========================================================================

    /// Merge support-service selections; services not mentioned keep their state.
    pub fn update_support_services<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (SupportService, bool)>,
    {
        for (service, selected) in updates {
            if selected {
                self.support_services.insert(service);
            } else {
                self.support_services.remove(&service);
            }
        }
    }

    pub fn set_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Back to a fresh session with the same starting balance and clock.
    pub fn reset_progress(&mut self) {
        tracing::info!("Progress reset");
        *self = Self::new(self.starting_balance).with_clock(self.clock);
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    #[must_use]
    pub fn calculate_progress(&self) -> u64 {
        registry::progress_percentage(self.completed_steps.len())
    }

    #[must_use]
    pub fn current_step_info(&self) -> Option<&'static StepDefinition> {
        registry::lookup(self.current_step)
    }

    /// Answers offered by the current step, when it is a decision step.
    #[must_use]
    pub fn decision_options(&self) -> &'static [&'static str] {
        match self.current_step_info() {
            Some(def) if def.kind == StepKind::Decision => def.options,
            _ => &[],
        }
    }

    #[must_use]
    pub fn founder_profile(&self) -> FounderProfile {
        FounderProfile::from_store(self)
    }

    #[must_use]
    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            current_step: self.current_step,
            title: self.current_step_info().map(|def| def.title),
            completed: self.completed_steps.len(),
            total: registry::total_steps(),
            percentage: self.calculate_progress(),
            next_step: registry::positional_next(self.current_step),
            options: self.decision_options(),
            tokens_available: self.ledger.balance(),
            tokens_spent: self.ledger.spent(),
            redirect_pending: self.redirect_pending(),
        }
    }
}

/// Snapshot of where the founder stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub current_step: StepId,
    /// `None` for steps the registry does not list.
    pub title: Option<&'static str>,
    pub completed: usize,
    pub total: usize,
    pub percentage: u64,
    /// Positional lookahead from the registry, not the routed next step.
    pub next_step: Option<StepId>,
    pub options: &'static [&'static str],
    pub tokens_available: u64,
    pub tokens_spent: u64,
    pub redirect_pending: bool,
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title {
            Some(title) => writeln!(f, "Step:     {} ({title})", self.current_step)?,
            None => writeln!(f, "Step:     {}", self.current_step)?,
        }
        writeln!(
            f,
            "Progress: {}/{} ({}%)",
            self.completed, self.total, self.percentage
        )?;
        match self.next_step {
            Some(next) => writeln!(f, "Next:     {next}")?,
            None => writeln!(f, "Next:     -")?,
        }
        if !self.options.is_empty() {
            writeln!(f, "Options:  {}", self.options.join(", "))?;
        }
        write!(
            f,
            "Tokens:   {} available, {} spent",
            self.tokens_available, self.tokens_spent
        )
    }
}
