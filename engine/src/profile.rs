//! Read-only founder profile assembled from recorded decisions.

use loka_types::{Choice, DecisionKey, DecisionKind};

use crate::progress::ProgressStore;

const NOT_SPECIFIED: &str = "Not specified";
const NOT_SELECTED: &str = "Not selected";

/// What the founder has told the wizard so far.
///
/// Every field is `None` until the matching decision is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FounderProfile {
    pub first_time: Option<bool>,
    pub stage: Option<String>,
    pub has_idea: Option<bool>,
    pub domain: Option<String>,
    pub looking_for_cofounder: Option<bool>,
    pub needs_funding: Option<bool>,
    pub funding_submitted: bool,
}

impl FounderProfile {
    #[must_use]
    pub fn from_store(store: &ProgressStore) -> Self {
        let decision = move |kind: DecisionKind| store.decision(&DecisionKey::from(kind));
        let flag = move |kind| decision(kind).map(Choice::is_yes);
        let text = move |kind| match decision(kind) {
            Some(Choice::Option(value)) => Some(value.clone()),
            _ => None,
        };
        Self {
            first_time: flag(DecisionKind::IsFirstTime),
            stage: text(DecisionKind::StartupStage),
            has_idea: flag(DecisionKind::HasIdea),
            domain: text(DecisionKind::SelectedDomain),
            looking_for_cofounder: flag(DecisionKind::NeedsCofounder),
            needs_funding: flag(DecisionKind::NeedsFunding),
            funding_submitted: decision(DecisionKind::FundingComplete).is_some(),
        }
    }

    /// True before the founder has answered anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn founder_type(&self) -> &'static str {
        match self.first_time {
            Some(true) => "First-time founder",
            Some(false) => "Experienced founder",
            None => NOT_SPECIFIED,
        }
    }

    #[must_use]
    pub fn stage(&self) -> &str {
        self.stage.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(NOT_SELECTED)
    }

    #[must_use]
    pub fn idea_status(&self) -> Option<&'static str> {
        self.has_idea
            .map(|has| if has { "Has an idea" } else { "Looking for an idea" })
    }

    #[must_use]
    pub fn team_status(&self) -> Option<&'static str> {
        self.looking_for_cofounder.map(|looking| {
            if looking {
                "Looking for a co-founder"
            } else {
                "Solo founder"
            }
        })
    }

    /// A submitted application outranks the yes/no answer that led to it.
    #[must_use]
    pub fn funding_status(&self) -> Option<&'static str> {
        if self.funding_submitted {
            return Some("Funding application submitted");
        }
        self.needs_funding.map(|needs| {
            if needs {
                "Needs funding"
            } else {
                "Not seeking funding"
            }
        })
    }
}
