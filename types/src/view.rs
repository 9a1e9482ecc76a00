//! Renderable views selected by the navigation shell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StepId;

/// What the shell renders.
///
/// Views and steps are related but distinct: several steps share a view, and
/// some views (dashboard, leaderboard) have no step. A step with no mapped
/// view is carried verbatim as `Unmapped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Leaderboard,
    FounderTypeSelection,
    StartupStageSelection,
    IdeaStatusCheck,
    IdeaStrategy,
    DomainSelection,
    AiIdeaGenerator,
    TeamStatusCheck,
    FundingForm,
    PitchDeck,
    InvestorConnection,
    MentorshipOptions,
    ProgressTracking,
    Unmapped(StepId),
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Leaderboard => "leaderboard",
            View::FounderTypeSelection => "founder-type-selection",
            View::StartupStageSelection => "startup-stage-selection",
            View::IdeaStatusCheck => "idea-status-check",
            View::IdeaStrategy => "idea-strategy",
            View::DomainSelection => "domain-selection",
            View::AiIdeaGenerator => "ai-idea-generator",
            View::TeamStatusCheck => "team-status-check",
            View::FundingForm => "funding-form",
            View::PitchDeck => "pitch-deck",
            View::InvestorConnection => "investor-connection",
            View::MentorshipOptions => "mentorship-options",
            View::ProgressTracking => "progress-tracking",
            View::Unmapped(step) => step.as_str(),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Founder Dashboard",
            View::Leaderboard => "Community Leaderboard",
            View::FounderTypeSelection => "What type of founder are you?",
            View::StartupStageSelection => "Startup Stage Selection",
            View::IdeaStatusCheck => "Do you have a startup idea?",
            View::IdeaStrategy => "Idea Strategy",
            View::DomainSelection => "Choose your domain",
            View::AiIdeaGenerator => "AI Idea Generator",
            View::TeamStatusCheck => "Team Status",
            View::FundingForm => "Funding",
            View::PitchDeck => "Pitch Deck",
            View::InvestorConnection => "Investor Connection",
            View::MentorshipOptions => "Support Services",
            View::ProgressTracking => "Progress Tracking",
            View::Unmapped(_) => "Founder Dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
