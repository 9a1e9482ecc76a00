//! Core engine for Loka - progress state and navigation.
//!
//! This crate contains the App state machine without TUI dependencies.

mod config;
mod profile;
mod progress;
mod shell;

pub use config::{
    AppConfig, ConfigError, CostsConfig, DEFAULT_SERVICE_COST, LokaConfig, TokenSchedule,
    TokensConfig, config_path, log_file_candidates, log_path,
};
pub use profile::FounderProfile;
pub use progress::{ProgressStore, ProgressSummary};
pub use shell::{NavigationShell, ShellEffect, ShellEvent, primary_step, view_for_step};

pub use loka_core::{
    COMMUNITY_STATS, CommunityStats, LedgerError, StepDefinition, StepKind, TokenLedger,
    resolve_next_step,
};
pub use loka_types::ui::{Selection, UiOptions};
pub use loka_types::{
    AiService, Choice, DecisionKey, DecisionKind, LedgerEntry, LedgerEvent, RewardKind, StepId,
    SupportService, View,
};

// ============================================================================
// App
// ============================================================================

/// Owns the session: progress store, shell, and the bits of UI state the
/// renderer needs between frames.
#[derive(Debug)]
pub struct App {
    store: ProgressStore,
    shell: NavigationShell,
    schedule: TokenSchedule,
    ui: UiOptions,
    selection: Selection,
    status: Option<String>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    #[must_use]
    pub fn new(config: Option<&LokaConfig>) -> Self {
        let schedule = LokaConfig::token_schedule(config);
        let ui = LokaConfig::ui_options(config);
        Self::with_parts(ProgressStore::new(schedule.starting_balance()), schedule, ui)
    }

    /// Build from an explicit store. Used by tests that pin the clock.
    #[must_use]
    pub fn with_parts(store: ProgressStore, schedule: TokenSchedule, ui: UiOptions) -> Self {
        Self {
            store,
            shell: NavigationShell::new(),
            schedule,
            ui,
            selection: Selection::default(),
            status: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.shell.view()
    }

    #[must_use]
    pub fn schedule(&self) -> &TokenSchedule {
        &self.schedule
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn select_next(&mut self, len: usize) {
        self.selection.down(len);
    }

    pub fn select_prev(&mut self, len: usize) {
        self.selection.up(len);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Run one shell event and fold its effects into UI state.
    pub fn dispatch(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        let effects = self.shell.reduce(&mut self.store, event);
        for effect in &effects {
            match effect {
                ShellEffect::ViewChanged { .. } => self.selection.reset(),
                ShellEffect::RedirectConsumed(_) => {}
                ShellEffect::SpendRefused { service, error } => {
                    self.status = Some(format!("{}: {error}", service.display_name()));
                }
                // A zero reward is how config switches a payout off.
                ShellEffect::EarnRefused {
                    error: LedgerError::ZeroAmount,
                    ..
                } => {}
                ShellEffect::EarnRefused { reason, error } => {
                    self.status = Some(format!("{reason}: {error}"));
                }
            }
        }
        effects
    }

    pub fn navigate(&mut self, view: View) {
        self.status = None;
        self.dispatch(ShellEvent::Navigate(view));
    }

    pub fn back(&mut self) {
        self.status = None;
        self.dispatch(ShellEvent::Back);
    }

    /// Record a decision, pay out `reward`, then optionally move on to `then`.
    pub fn decide(
        &mut self,
        key: impl Into<DecisionKey>,
        choice: impl Into<Choice>,
        reward: Option<RewardKind>,
        then: Option<View>,
    ) {
        self.status = None;
        self.dispatch(ShellEvent::Decide {
            key: key.into(),
            choice: choice.into(),
        });
        if let Some(kind) = reward {
            self.earn(kind);
        }
        if then.is_some() {
            self.dispatch(ShellEvent::Complete { next: then });
        }
    }

    /// Pay out `reward` (if any) and show `next`, or the dashboard.
    pub fn complete(&mut self, reward: Option<RewardKind>, next: Option<View>) {
        self.status = None;
        if let Some(kind) = reward {
            self.earn(kind);
        }
        self.dispatch(ShellEvent::Complete { next });
    }

    /// Advance the store without a decision and follow it with the view.
    pub fn advance(&mut self) {
        self.status = None;
        self.store.complete_step(None);
        let next = view_for_step(self.store.current_step());
        self.dispatch(ShellEvent::Complete { next: Some(next) });
    }

    /// Spend the configured cost for `service`. Returns whether it went through.
    pub fn spend_on(&mut self, service: AiService) -> bool {
        let amount = self.schedule.cost(service);
        let refused = self
            .dispatch(ShellEvent::Spend { amount, service })
            .iter()
            .any(|effect| matches!(effect, ShellEffect::SpendRefused { .. }));
        if !refused {
            self.status = Some(if amount == 0 {
                format!("{}: free", service.display_name())
            } else {
                format!("-{amount} tokens: {}", service.display_name())
            });
        }
        !refused
    }

    pub fn toggle_support(&mut self, service: SupportService) {
        let selected = self.store.support_selected(service);
        self.store.update_support_services([(service, !selected)]);
    }

    pub fn reset(&mut self) {
        self.store.reset_progress();
        self.shell = NavigationShell::new();
        self.selection.reset();
        self.status = Some("Progress reset".to_string());
    }

    fn earn(&mut self, kind: RewardKind) {
        let amount = self.schedule.reward(kind);
        let reason = kind.reason();
        let refused = self
            .dispatch(ShellEvent::Earn {
                amount,
                reason: reason.to_string(),
            })
            .iter()
            .any(|effect| matches!(effect, ShellEffect::EarnRefused { .. }));
        if !refused {
            self.status = Some(format!("+{amount} tokens: {reason}"));
        }
    }
}
