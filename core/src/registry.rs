//! Step registry: ordered metadata for every registered wizard step.
//!
//! Registry order is the *positional* notion of "next step", used by the
//! progress summary and the access gate. It is independent of decision
//! routing (see [`crate::routing`]) and the two may disagree.

use loka_types::StepId;

/// How a step collects input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Intro,
    Decision,
    Selection,
    Form,
    Services,
    MultiSelect,
    Portal,
    Matching,
    Tracking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: StepKind,
    /// Valid answers; empty when the step takes free-form input.
    pub options: &'static [&'static str],
    /// Declared successor used by step completion.
    pub next: Option<StepId>,
}

const YES_NO: &[&str] = &["yes", "no"];

pub static STEPS: [StepDefinition; 15] = [
    StepDefinition {
        id: StepId::FounderStart,
        title: "Welcome Founder",
        description: "Starting your founder journey",
        kind: StepKind::Intro,
        options: &[],
        next: Some(StepId::FirstTimeCheck),
    },
    StepDefinition {
        id: StepId::FirstTimeCheck,
        title: "Experience Level",
        description: "First Time/Experienced?",
        kind: StepKind::Decision,
        options: YES_NO,
        next: None,
    },
    StepDefinition {
        id: StepId::StartupStageSelection,
        title: "Startup Stage",
        description: "Select your current stage",
        kind: StepKind::Selection,
        options: &["early-stage", "running", "profitable", "bootstrapped"],
        next: None,
    },
    StepDefinition {
        id: StepId::IdeaStatusCheck,
        title: "Idea Status",
        description: "Do you have the idea ready?",
        kind: StepKind::Decision,
        options: YES_NO,
        next: None,
    },
    StepDefinition {
        id: StepId::IdeaStrategy,
        title: "Idea Strategy",
        description: "Pitch deck, early traction, Live url, Documentation",
        kind: StepKind::Form,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::DomainSelection,
        title: "Domain Selection",
        description: "Which domain you want to make startup in",
        kind: StepKind::Selection,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::AiAgentsHelp,
        title: "AI Assistance",
        description: "Help in creating R&D, cold calling, Pitch deck, small prototype",
        kind: StepKind::Services,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::FundingDecision,
        title: "Funding Need",
        description: "Do you need funding?",
        kind: StepKind::Decision,
        options: YES_NO,
        next: None,
    },
    StepDefinition {
        id: StepId::StartupCategorySelection,
        title: "Startup Category",
        description: "C4S/Fintech/Web3/B2B",
        kind: StepKind::Selection,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::BeyondFundingSupport,
        title: "Support Services",
        description: "AI chatbot, Mentorship, Legal, Auditing, Exit Planning",
        kind: StepKind::MultiSelect,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::CofounderDecision,
        title: "Co-founder Need",
        description: "Do you need a co-founder?",
        kind: StepKind::Decision,
        options: YES_NO,
        next: None,
    },
    StepDefinition {
        id: StepId::CofounderPortal,
        title: "Co-founder Portal",
        description: "Connect with potential co-founders",
        kind: StepKind::Portal,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::PitchDeckCreation,
        title: "Pitch Deck",
        description: "Create comprehensive pitch deck with all details",
        kind: StepKind::Form,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::InvestorConnection,
        title: "Investor Matching",
        description: "Connect with investor expertise who loves to invest in X domain",
        kind: StepKind::Matching,
        options: &[],
        next: None,
    },
    StepDefinition {
        id: StepId::ProgressTracking,
        title: "Progress Tracking",
        description: "User Traction - CRM Portal smart traction/viewership proof of work",
        kind: StepKind::Tracking,
        options: &[],
        next: None,
    },
];

#[must_use]
pub fn lookup(step: StepId) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|def| def.id == step)
}

#[must_use]
pub fn position(step: StepId) -> Option<usize> {
    STEPS.iter().position(|def| def.id == step)
}

#[must_use]
pub const fn total_steps() -> usize {
    STEPS.len()
}

/// The step after `step` in registry order.
///
/// `None` for the last step and for steps the registry does not list.
/// An unlisted step such as `funding-form` has no position, so it does not
/// wrap around to `founder-start` as an index of -1 plus one would.
#[must_use]
pub fn positional_next(step: StepId) -> Option<StepId> {
    let index = position(step)?;
    STEPS.get(index + 1).map(|def| def.id)
}

/// Where `complete_step` goes when the caller gives no override.
#[must_use]
pub fn completion_target(step: StepId) -> StepId {
    if let Some(next) = lookup(step).and_then(|def| def.next) {
        return next;
    }
    match step {
        StepId::FounderStart => StepId::FirstTimeCheck,
        StepId::StartupCategorySelection => StepId::PitchDeckCreation,
        StepId::IdeaStrategy | StepId::AiAgentsHelp => StepId::CofounderDecision,
        StepId::DomainSelection => StepId::AiAgentsHelp,
        StepId::PitchDeckCreation => StepId::InvestorConnection,
        _ => StepId::ProgressTracking,
    }
}

/// Positional access gate: `target` is reachable when it sits no further
/// than one place past `current`. Unregistered steps count as index -1.
#[must_use]
pub fn can_access(current: StepId, target: StepId) -> bool {
    let index = |step| position(step).map_or(-1, |i| i as i64);
    index(target) <= index(current) + 1
}

/// `round(100 * completed / total_steps)`, halves rounding up.
///
/// Not clamped: revisited steps are counted again, so this can exceed 100.
#[must_use]
pub fn progress_percentage(completed: usize) -> u64 {
    let total = total_steps() as u64;
    (200 * completed as u64 + total) / (2 * total)
}
