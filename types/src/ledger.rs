//! Token ledger rows and reward categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AiService;

/// What moved the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    Earned { reason: String },
    Spent { service: AiService },
}

/// One immutable row of the token log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub amount: u64,
    pub event: LedgerEvent,
    pub at: DateTime<Utc>,
}

impl LedgerEntry {
    #[must_use]
    pub fn is_earn(&self) -> bool {
        matches!(self.event, LedgerEvent::Earned { .. })
    }

    /// Reason or service name, for display.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.event {
            LedgerEvent::Earned { reason } => reason,
            LedgerEvent::Spent { service } => service.display_name(),
        }
    }
}

/// Screen completions that pay out tokens.
///
/// Amounts live in configuration; this only names the occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    FounderType,
    StartupStage,
    IdeaStatus,
    IdeaStrategy,
    Domain,
    AiIdea,
    SoloFounder,
    TeamDetails,
    FundingNeed,
    FundingApplication,
    PitchDeck,
    InvestorConnection,
    SupportServices,
    ProgressTracking,
}

impl RewardKind {
    pub const ALL: [RewardKind; 14] = [
        RewardKind::FounderType,
        RewardKind::StartupStage,
        RewardKind::IdeaStatus,
        RewardKind::IdeaStrategy,
        RewardKind::Domain,
        RewardKind::AiIdea,
        RewardKind::SoloFounder,
        RewardKind::TeamDetails,
        RewardKind::FundingNeed,
        RewardKind::FundingApplication,
        RewardKind::PitchDeck,
        RewardKind::InvestorConnection,
        RewardKind::SupportServices,
        RewardKind::ProgressTracking,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RewardKind::FounderType => "founder_type",
            RewardKind::StartupStage => "startup_stage",
            RewardKind::IdeaStatus => "idea_status",
            RewardKind::IdeaStrategy => "idea_strategy",
            RewardKind::Domain => "domain",
            RewardKind::AiIdea => "ai_idea",
            RewardKind::SoloFounder => "solo_founder",
            RewardKind::TeamDetails => "team_details",
            RewardKind::FundingNeed => "funding_need",
            RewardKind::FundingApplication => "funding_application",
            RewardKind::PitchDeck => "pitch_deck",
            RewardKind::InvestorConnection => "investor_connection",
            RewardKind::SupportServices => "support_services",
            RewardKind::ProgressTracking => "progress_tracking",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Default payout when configuration does not override it.
    #[must_use]
    pub const fn default_amount(self) -> u64 {
        match self {
            RewardKind::FounderType => 10,
            RewardKind::StartupStage
            | RewardKind::IdeaStatus
            | RewardKind::SoloFounder
            | RewardKind::FundingNeed => 15,
            RewardKind::Domain | RewardKind::SupportServices => 20,
            RewardKind::AiIdea | RewardKind::TeamDetails => 25,
            RewardKind::IdeaStrategy | RewardKind::ProgressTracking => 30,
            RewardKind::FundingApplication => 35,
            RewardKind::InvestorConnection => 40,
            RewardKind::PitchDeck => 50,
        }
    }

    /// Ledger reason recorded with the payout.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            RewardKind::FounderType => "Completed founder type selection",
            RewardKind::StartupStage => "Selected startup stage",
            RewardKind::IdeaStatus => "Completed idea status check",
            RewardKind::IdeaStrategy => "Completed idea strategy",
            RewardKind::Domain => "Selected startup domain",
            RewardKind::AiIdea => "Selected AI-generated idea",
            RewardKind::SoloFounder => "Completed team status check - solo founder",
            RewardKind::TeamDetails => "Completed team details form",
            RewardKind::FundingNeed => "Selected funding need",
            RewardKind::FundingApplication => "Completed funding application with equity details",
            RewardKind::PitchDeck => "Completed pitch deck",
            RewardKind::InvestorConnection => "Connected with investors",
            RewardKind::SupportServices => "Selected support services",
            RewardKind::ProgressTracking => "Completed progress tracking setup",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{LedgerEntry, LedgerEvent, RewardKind};
    use crate::AiService;

    #[test]
    fn labels_come_from_reason_or_service() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let earn = LedgerEntry {
            amount: 10,
            event: LedgerEvent::Earned {
                reason: "Completed founder type selection".into(),
            },
            at,
        };
        let spend = LedgerEntry {
            amount: 5,
            event: LedgerEvent::Spent {
                service: AiService::RdHelp,
            },
            at,
        };
        assert!(earn.is_earn());
        assert!(!spend.is_earn());
        assert_eq!(earn.label(), "Completed founder type selection");
        assert_eq!(spend.label(), "R&D help");
    }

    #[test]
    fn every_reward_pays_something() {
        for kind in RewardKind::ALL {
            assert!(kind.default_amount() > 0, "{kind:?}");
            assert!(!kind.reason().is_empty());
        }
    }

    #[test]
    fn reward_names_match_config_keys() {
        for kind in RewardKind::ALL {
            assert_eq!(RewardKind::parse(kind.as_str()), Some(kind));
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert_eq!(RewardKind::parse("pitch-deck"), None);
    }
}
