//! Decision keys and choice values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decision types the router knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecisionKind {
    IsFirstTime,
    StartupStage,
    HasIdea,
    SelectedDomain,
    NeedsCofounder,
    NeedsFunding,
    FundingComplete,
}

impl DecisionKind {
    pub const ALL: [DecisionKind; 7] = [
        DecisionKind::IsFirstTime,
        DecisionKind::StartupStage,
        DecisionKind::HasIdea,
        DecisionKind::SelectedDomain,
        DecisionKind::NeedsCofounder,
        DecisionKind::NeedsFunding,
        DecisionKind::FundingComplete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DecisionKind::IsFirstTime => "isFirstTime",
            DecisionKind::StartupStage => "startupStage",
            DecisionKind::HasIdea => "hasIdea",
            DecisionKind::SelectedDomain => "selectedDomain",
            DecisionKind::NeedsCofounder => "needsCofounder",
            DecisionKind::NeedsFunding => "needsFunding",
            DecisionKind::FundingComplete => "fundingComplete",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// Key under which a decision is recorded.
///
/// Screens may send names the router does not know (e.g. `"ideaStrategyComplete"`).
/// Those are still recorded, but routing leaves the founder where they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecisionKey {
    Known(DecisionKind),
    Custom(String),
}

impl DecisionKey {
    /// Classify a raw decision name. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        DecisionKind::parse(raw).map_or_else(|| Self::Custom(raw.to_string()), Self::Known)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Custom(name) => name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<DecisionKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Custom(_) => None,
        }
    }
}

impl From<DecisionKind> for DecisionKey {
    fn from(kind: DecisionKind) -> Self {
        Self::Known(kind)
    }
}

impl From<String> for DecisionKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for DecisionKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<DecisionKey> for String {
    fn from(key: DecisionKey) -> Self {
        match key {
            DecisionKey::Known(kind) => kind.as_str().to_string(),
            DecisionKey::Custom(name) => name,
        }
    }
}

impl fmt::Display for DecisionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value a founder picked: a yes/no answer or one of several named options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Flag(bool),
    Option(String),
}

impl Choice {
    /// Only an explicit `true` flag counts as "yes".
    #[must_use]
    pub fn is_yes(&self) -> bool {
        matches!(self, Choice::Flag(true))
    }
}

impl From<bool> for Choice {
    fn from(value: bool) -> Self {
        Choice::Flag(value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::Option(value.to_string())
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Choice::Option(value)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Flag(true) => f.write_str("yes"),
            Choice::Flag(false) => f.write_str("no"),
            Choice::Option(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Choice, DecisionKey, DecisionKind};

    #[test]
    fn known_names_classify_as_known() {
        for kind in DecisionKind::ALL {
            assert_eq!(DecisionKey::parse(kind.as_str()), DecisionKey::Known(kind));
        }
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let key = DecisionKey::parse("ideaStrategyComplete");
        assert_eq!(key, DecisionKey::Custom("ideaStrategyComplete".into()));
        assert_eq!(key.kind(), None);
        assert_eq!(key.as_str(), "ideaStrategyComplete");
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let json = serde_json::to_string(&DecisionKey::from(DecisionKind::HasIdea)).unwrap();
        assert_eq!(json, "\"hasIdea\"");
        let back: DecisionKey = serde_json::from_str("\"needsFunding\"").unwrap();
        assert_eq!(back, DecisionKey::Known(DecisionKind::NeedsFunding));
    }

    #[test]
    fn only_true_flag_is_yes() {
        assert!(Choice::from(true).is_yes());
        assert!(!Choice::from(false).is_yes());
        assert!(!Choice::from("true").is_yes());
    }

    #[test]
    fn choice_is_untagged_on_the_wire() {
        let flag: Choice = serde_json::from_str("true").unwrap();
        assert_eq!(flag, Choice::Flag(true));
        let option: Choice = serde_json::from_str("\"AI\"").unwrap();
        assert_eq!(option, Choice::Option("AI".into()));
    }
}
