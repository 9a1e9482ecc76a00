//! Decision table: maps a decision to the step the founder goes to next.

use loka_types::{Choice, DecisionKey, DecisionKind, StepId};

/// Resolve the step that follows a decision.
///
/// Pure and total. Boolean decisions take their "yes" branch only for an
/// explicit `true` flag. Decision names the table does not know leave the
/// founder on `current`.
#[must_use]
pub fn resolve_next_step(key: &DecisionKey, choice: &Choice, current: StepId) -> StepId {
    match key {
        DecisionKey::Known(kind) => resolve_known(*kind, choice),
        DecisionKey::Custom(_) => current,
    }
}

fn resolve_known(kind: DecisionKind, choice: &Choice) -> StepId {
    match kind {
        DecisionKind::IsFirstTime => {
            if choice.is_yes() {
                StepId::IdeaStatusCheck
            } else {
                StepId::StartupStageSelection
            }
        }
        DecisionKind::StartupStage => StepId::IdeaStatusCheck,
        DecisionKind::HasIdea => {
            if choice.is_yes() {
                StepId::IdeaStrategy
            } else {
                StepId::DomainSelection
            }
        }
        DecisionKind::SelectedDomain => StepId::AiAgentsHelp,
        DecisionKind::NeedsCofounder => StepId::FundingDecision,
        DecisionKind::NeedsFunding => {
            if choice.is_yes() {
                StepId::FundingForm
            } else {
                StepId::BeyondFundingSupport
            }
        }
        DecisionKind::FundingComplete => StepId::PitchDeckCreation,
    }
}

/// Every step a known decision can route to.
#[must_use]
pub fn routing_targets() -> Vec<StepId> {
    let mut targets: Vec<StepId> = DecisionKind::ALL
        .into_iter()
        .flat_map(|kind| {
            [
                resolve_known(kind, &Choice::Flag(true)),
                resolve_known(kind, &Choice::Flag(false)),
            ]
        })
        .collect();
    targets.sort();
    targets.dedup();
    targets
}
