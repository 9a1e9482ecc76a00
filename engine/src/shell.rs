//! Navigation shell: picks the view to render and consumes redirect signals.
//!
//! The shell is a plain reducer over [`ProgressStore`]. It owns only the
//! current [`View`]; everything else lives in the store.

use loka_core::LedgerError;
use loka_types::{AiService, Choice, DecisionKey, StepId, View};

use crate::progress::ProgressStore;

/// Input to [`NavigationShell::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Show `view`, moving the store to its primary step when it has one.
    Navigate(View),
    /// Back to the dashboard.
    Back,
    /// A screen finished; show `next` or the dashboard.
    Complete { next: Option<View> },
    Decide { key: DecisionKey, choice: Choice },
    Earn { amount: u64, reason: String },
    Spend { amount: u64, service: AiService },
    /// Re-check the redirect signal after a mutation made outside the shell.
    Observe,
}

/// What the renderer should know about after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    ViewChanged { from: View, to: View },
    RedirectConsumed(StepId),
    SpendRefused { service: AiService, error: LedgerError },
    EarnRefused { reason: String, error: LedgerError },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationShell {
    view: View,
}

impl NavigationShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    pub fn reduce(&mut self, store: &mut ProgressStore, event: ShellEvent) -> Vec<ShellEffect> {
        let mut effects = Vec::new();
        match event {
            ShellEvent::Navigate(view) => {
                if let Some(step) = primary_step(view) {
                    store.go_to_step(step);
                }
                self.set_view(view, &mut effects);
            }
            ShellEvent::Back => self.set_view(View::Dashboard, &mut effects),
            ShellEvent::Complete { next } => {
                self.set_view(next.unwrap_or(View::Dashboard), &mut effects);
            }
            ShellEvent::Decide { key, choice } => store.make_decision(key, choice),
            ShellEvent::Earn { amount, reason } => {
                if let Err(error) = store.earn_tokens(amount, &reason) {
                    effects.push(ShellEffect::EarnRefused { reason, error });
                }
            }
            ShellEvent::Spend { amount, service } => {
                if let Err(error) = store.spend_tokens(amount, service) {
                    effects.push(ShellEffect::SpendRefused { service, error });
                }
            }
            ShellEvent::Observe => {}
        }
        self.consume_redirect(store, &mut effects);
        effects
    }

    fn consume_redirect(&mut self, store: &mut ProgressStore, effects: &mut Vec<ShellEffect>) {
        let Some(step) = store.redirect_target() else {
            return;
        };
        self.set_view(view_for_step(step), effects);
        store.clear_redirect_flag();
        effects.push(ShellEffect::RedirectConsumed(step));
    }

    fn set_view(&mut self, to: View, effects: &mut Vec<ShellEffect>) {
        let from = self.view;
        if from == to {
            return;
        }
        tracing::debug!(from = %from, to = %to, "view changed");
        self.view = to;
        effects.push(ShellEffect::ViewChanged { from, to });
    }
}

/// The view that renders `step`.
#[must_use]
pub fn view_for_step(step: StepId) -> View {
    match step {
        StepId::FirstTimeCheck => View::FounderTypeSelection,
        StepId::StartupStageSelection => View::StartupStageSelection,
        StepId::IdeaStatusCheck => View::IdeaStatusCheck,
        StepId::IdeaStrategy => View::IdeaStrategy,
        StepId::DomainSelection => View::DomainSelection,
        StepId::AiAgentsHelp => View::AiIdeaGenerator,
        StepId::FundingDecision | StepId::FundingForm => View::FundingForm,
        StepId::BeyondFundingSupport => View::MentorshipOptions,
        StepId::CofounderDecision | StepId::CofounderPortal => View::TeamStatusCheck,
        StepId::PitchDeckCreation => View::PitchDeck,
        StepId::InvestorConnection => View::InvestorConnection,
        StepId::ProgressTracking => View::ProgressTracking,
        StepId::FounderStart | StepId::StartupCategorySelection => View::Unmapped(step),
    }
}

/// The step a founder lands on when opening `view` directly.
///
/// Views shared by several steps open on the earliest one.
#[must_use]
pub fn primary_step(view: View) -> Option<StepId> {
    match view {
        View::Dashboard | View::Leaderboard => None,
        View::FounderTypeSelection => Some(StepId::FirstTimeCheck),
        View::StartupStageSelection => Some(StepId::StartupStageSelection),
        View::IdeaStatusCheck => Some(StepId::IdeaStatusCheck),
        View::IdeaStrategy => Some(StepId::IdeaStrategy),
        View::DomainSelection => Some(StepId::DomainSelection),
        View::AiIdeaGenerator => Some(StepId::AiAgentsHelp),
        View::TeamStatusCheck => Some(StepId::CofounderDecision),
        View::FundingForm => Some(StepId::FundingDecision),
        View::PitchDeck => Some(StepId::PitchDeckCreation),
        View::InvestorConnection => Some(StepId::InvestorConnection),
        View::MentorshipOptions => Some(StepId::BeyondFundingSupport),
        View::ProgressTracking => Some(StepId::ProgressTracking),
        View::Unmapped(step) => Some(step),
    }
}
