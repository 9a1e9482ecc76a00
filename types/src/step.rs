//! Wizard step identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A wizard screen the founder can be on.
///
/// The set is closed. Variants are declared in registry order, with
/// `FundingForm` last: it is a routing target that has no registry entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    #[default]
    FounderStart,
    FirstTimeCheck,
    StartupStageSelection,
    IdeaStatusCheck,
    IdeaStrategy,
    DomainSelection,
    AiAgentsHelp,
    FundingDecision,
    StartupCategorySelection,
    BeyondFundingSupport,
    CofounderDecision,
    CofounderPortal,
    PitchDeckCreation,
    InvestorConnection,
    ProgressTracking,
    FundingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step: {0:?}")]
pub struct ParseStepError(pub String);

impl StepId {
    pub const ALL: [StepId; 16] = [
        StepId::FounderStart,
        StepId::FirstTimeCheck,
        StepId::StartupStageSelection,
        StepId::IdeaStatusCheck,
        StepId::IdeaStrategy,
        StepId::DomainSelection,
        StepId::AiAgentsHelp,
        StepId::FundingDecision,
        StepId::StartupCategorySelection,
        StepId::BeyondFundingSupport,
        StepId::CofounderDecision,
        StepId::CofounderPortal,
        StepId::PitchDeckCreation,
        StepId::InvestorConnection,
        StepId::ProgressTracking,
        StepId::FundingForm,
    ];

    /// Kebab-case wire name, e.g. `"idea-status-check"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StepId::FounderStart => "founder-start",
            StepId::FirstTimeCheck => "first-time-check",
            StepId::StartupStageSelection => "startup-stage-selection",
            StepId::IdeaStatusCheck => "idea-status-check",
            StepId::IdeaStrategy => "idea-strategy",
            StepId::DomainSelection => "domain-selection",
            StepId::AiAgentsHelp => "ai-agents-help",
            StepId::FundingDecision => "funding-decision",
            StepId::StartupCategorySelection => "startup-category-selection",
            StepId::BeyondFundingSupport => "beyond-funding-support",
            StepId::CofounderDecision => "cofounder-decision",
            StepId::CofounderPortal => "cofounder-portal",
            StepId::PitchDeckCreation => "pitch-deck-creation",
            StepId::InvestorConnection => "investor-connection",
            StepId::ProgressTracking => "progress-tracking",
            StepId::FundingForm => "funding-form",
        }
    }

    /// Parse a wire name. Matching is exact after trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|step| step.as_str() == raw)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseStepError(s.to_string()))
    }
}
