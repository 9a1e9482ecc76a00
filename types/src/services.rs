//! Paid AI services and free support services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// AI-assisted features that cost Loka tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AiService {
    RdHelp,
    ColdCalling,
    PitchDeckHelp,
    PrototypeCreation,
}

impl AiService {
    pub const ALL: [AiService; 4] = [
        AiService::RdHelp,
        AiService::ColdCalling,
        AiService::PitchDeckHelp,
        AiService::PrototypeCreation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AiService::RdHelp => "rdHelp",
            AiService::ColdCalling => "coldCalling",
            AiService::PitchDeckHelp => "pitchDeckHelp",
            AiService::PrototypeCreation => "prototypeCreation",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            AiService::RdHelp => "R&D help",
            AiService::ColdCalling => "Cold calling",
            AiService::PitchDeckHelp => "Pitch deck help",
            AiService::PrototypeCreation => "Prototype creation",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.as_str() == raw)
    }
}

impl fmt::Display for AiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-funding support the founder can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupportService {
    AiChatbot,
    Mentorship,
    Legal,
    Auditing,
    ExitPlanning,
}

impl SupportService {
    pub const ALL: [SupportService; 5] = [
        SupportService::AiChatbot,
        SupportService::Mentorship,
        SupportService::Legal,
        SupportService::Auditing,
        SupportService::ExitPlanning,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SupportService::AiChatbot => "aiChatbot",
            SupportService::Mentorship => "mentorship",
            SupportService::Legal => "legal",
            SupportService::Auditing => "auditing",
            SupportService::ExitPlanning => "exitPlanning",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            SupportService::AiChatbot => "AI chatbot for help",
            SupportService::Mentorship => "Mentorship",
            SupportService::Legal => "Legal team",
            SupportService::Auditing => "Auditing & finance",
            SupportService::ExitPlanning => "Exit planning",
        }
    }
}
