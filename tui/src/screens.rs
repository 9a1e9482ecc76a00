//! What each view offers and what choosing it does.
//!
//! A screen is a list of [`ScreenOption`]s. Rendering draws the list; input
//! hands the selected option's [`ScreenAction`] to [`activate`].

use loka_engine::{
    AiService, App, Choice, DecisionKey, DecisionKind, RewardKind, StepId, SupportService, View,
};

const FOUNDER_TYPES: [(&str, bool); 2] = [
    ("First-time founder", true),
    ("Experienced founder", false),
];

const STARTUP_STAGES: [(&str, &str); 4] = [
    ("Early stage", "early-stage"),
    ("Running", "running"),
    ("Profitable", "profitable"),
    ("Bootstrapped", "bootstrapped"),
];

const DOMAINS: [(&str, &str); 6] = [
    ("AI", "AI"),
    ("Web3", "Web3"),
    ("Fintech", "Fintech"),
    ("B2B", "B2B"),
    ("C4S", "C4S"),
    ("Other", "Other"),
];

const DASHBOARD_LINKS: [(&str, View); 8] = [
    ("Start founder journey", View::FounderTypeSelection),
    ("Team status", View::TeamStatusCheck),
    ("Idea status", View::IdeaStatusCheck),
    ("Choose a domain", View::DomainSelection),
    ("Funding", View::FundingForm),
    ("Support services", View::MentorshipOptions),
    ("Progress tracking", View::ProgressTracking),
    ("Community leaderboard", View::Leaderboard),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    Navigate(View),
    Back,
    Decide {
        key: DecisionKey,
        choice: Choice,
        reward: Option<RewardKind>,
        then: Option<View>,
    },
    Complete {
        reward: Option<RewardKind>,
        next: Option<View>,
    },
    Spend(AiService),
    ToggleSupport(SupportService),
    /// Move past a step that has no screen of its own.
    Advance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOption {
    pub label: String,
    pub action: ScreenAction,
}

impl ScreenOption {
    fn new(label: impl Into<String>, action: ScreenAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

fn decide(
    kind: impl Into<DecisionKey>,
    choice: impl Into<Choice>,
    reward: Option<RewardKind>,
) -> ScreenAction {
    ScreenAction::Decide {
        key: kind.into(),
        choice: choice.into(),
        reward,
        then: None,
    }
}

/// Options for the view `app` is showing.
#[must_use]
pub fn options(app: &App) -> Vec<ScreenOption> {
    match app.view() {
        View::Dashboard => DASHBOARD_LINKS
            .iter()
            .map(|(label, view)| ScreenOption::new(*label, ScreenAction::Navigate(*view)))
            .collect(),
        View::Leaderboard => vec![ScreenOption::new("Back to dashboard", ScreenAction::Back)],
        View::FounderTypeSelection => FOUNDER_TYPES
            .iter()
            .map(|(label, first_time)| {
                ScreenOption::new(
                    *label,
                    decide(
                        DecisionKind::IsFirstTime,
                        *first_time,
                        Some(RewardKind::FounderType),
                    ),
                )
            })
            .collect(),
        View::StartupStageSelection => STARTUP_STAGES
            .iter()
            .map(|(label, stage)| {
                ScreenOption::new(
                    *label,
                    decide(
                        DecisionKind::StartupStage,
                        *stage,
                        Some(RewardKind::StartupStage),
                    ),
                )
            })
            .collect(),
        View::IdeaStatusCheck => vec![
            ScreenOption::new(
                "Yes, I have an idea",
                decide(DecisionKind::HasIdea, true, Some(RewardKind::IdeaStatus)),
            ),
            ScreenOption::new(
                "No, help me find one",
                decide(DecisionKind::HasIdea, false, Some(RewardKind::IdeaStatus)),
            ),
        ],
        View::IdeaStrategy => vec![ScreenOption::new(
            "Submit idea strategy",
            ScreenAction::Decide {
                key: DecisionKey::parse("ideaStrategyComplete"),
                choice: Choice::Flag(true),
                reward: Some(RewardKind::IdeaStrategy),
                then: Some(View::TeamStatusCheck),
            },
        )],
        View::DomainSelection => DOMAINS
            .iter()
            .map(|(label, domain)| {
                ScreenOption::new(
                    *label,
                    decide(DecisionKind::SelectedDomain, *domain, Some(RewardKind::Domain)),
                )
            })
            .collect(),
        View::AiIdeaGenerator => ai_idea_options(app),
        View::TeamStatusCheck => vec![
            ScreenOption::new(
                "I'm a solo founder",
                decide(
                    DecisionKind::NeedsCofounder,
                    false,
                    Some(RewardKind::SoloFounder),
                ),
            ),
            ScreenOption::new(
                "I'm looking for a co-founder",
                decide(
                    DecisionKind::NeedsCofounder,
                    true,
                    Some(RewardKind::TeamDetails),
                ),
            ),
        ],
        View::FundingForm => funding_options(app),
        View::PitchDeck => vec![ScreenOption::new(
            "Submit pitch deck",
            ScreenAction::Complete {
                reward: Some(RewardKind::PitchDeck),
                next: Some(View::InvestorConnection),
            },
        )],
        View::InvestorConnection => vec![ScreenOption::new(
            "Connect with investors",
            ScreenAction::Complete {
                reward: Some(RewardKind::InvestorConnection),
                next: Some(View::ProgressTracking),
            },
        )],
        View::MentorshipOptions => support_options(app),
        View::ProgressTracking => vec![ScreenOption::new(
            "Finish tracking setup",
            ScreenAction::Complete {
                reward: Some(RewardKind::ProgressTracking),
                next: None,
            },
        )],
        View::Unmapped(_) => vec![
            ScreenOption::new("Continue", ScreenAction::Advance),
            ScreenOption::new("Back to dashboard", ScreenAction::Back),
        ],
    }
}

fn ai_idea_options(app: &App) -> Vec<ScreenOption> {
    let mut options: Vec<ScreenOption> = AiService::ALL
        .iter()
        .map(|service| {
            let cost = app.schedule().cost(*service);
            ScreenOption::new(
                format!("{} ({cost} tokens)", service.display_name()),
                ScreenAction::Spend(*service),
            )
        })
        .collect();
    options.push(ScreenOption::new(
        "Use an AI-generated idea",
        ScreenAction::Complete {
            reward: Some(RewardKind::AiIdea),
            next: Some(View::TeamStatusCheck),
        },
    ));
    options
}

// The funding view serves two steps: the yes/no question, then the
// application itself once the founder said yes.
fn funding_options(app: &App) -> Vec<ScreenOption> {
    if app.store().current_step() == StepId::FundingForm {
        return vec![ScreenOption::new(
            "Submit funding application",
            decide(
                DecisionKind::FundingComplete,
                true,
                Some(RewardKind::FundingApplication),
            ),
        )];
    }
    vec![
        ScreenOption::new(
            "Yes, I need funding",
            decide(DecisionKind::NeedsFunding, true, Some(RewardKind::FundingNeed)),
        ),
        ScreenOption::new(
            "No, not right now",
            decide(DecisionKind::NeedsFunding, false, None),
        ),
    ]
}

fn support_options(app: &App) -> Vec<ScreenOption> {
    let glyphs = crate::theme::glyphs(app.ui_options());
    let mut options: Vec<ScreenOption> = SupportService::ALL
        .iter()
        .map(|service| {
            let mark = if app.store().support_selected(*service) {
                glyphs.checked
            } else {
                glyphs.unchecked
            };
            ScreenOption::new(
                format!("{mark} {}", service.display_name()),
                ScreenAction::ToggleSupport(*service),
            )
        })
        .collect();
    options.push(ScreenOption::new(
        "Confirm selection",
        ScreenAction::Complete {
            reward: Some(RewardKind::SupportServices),
            next: None,
        },
    ));
    options
}

/// Apply `action` to `app`.
pub fn activate(app: &mut App, action: ScreenAction) {
    tracing::debug!(?action, view = %app.view(), "activate");
    match action {
        ScreenAction::Navigate(view) => app.navigate(view),
        ScreenAction::Back => app.back(),
        ScreenAction::Decide {
            key,
            choice,
            reward,
            then,
        } => app.decide(key, choice, reward, then),
        ScreenAction::Complete { reward, next } => app.complete(reward, next),
        ScreenAction::Spend(service) => {
            let _ = app.spend_on(service);
        }
        ScreenAction::ToggleSupport(service) => app.toggle_support(service),
        ScreenAction::Advance => app.advance(),
    }
}

/// Activate whatever option the cursor is on.
pub fn activate_selected(app: &mut App) {
    let options = options(app);
    if options.is_empty() {
        return;
    }
    let index = app.selection().clamped(options.len());
    if let Some(option) = options.into_iter().nth(index) {
        activate(app, option.action);
    }
}

#[cfg(test)]
mod tests {
    use loka_engine::{AiService, App, DecisionKind, StepId, SupportService, View};

    use super::{ScreenAction, activate, activate_selected, options};

    fn labels(app: &App) -> Vec<String> {
        options(app).into_iter().map(|option| option.label).collect()
    }

    #[test]
    fn every_view_offers_something() {
        let mut app = App::default();
        let views = [
            View::Dashboard,
            View::Leaderboard,
            View::FounderTypeSelection,
            View::StartupStageSelection,
            View::IdeaStatusCheck,
            View::IdeaStrategy,
            View::DomainSelection,
            View::AiIdeaGenerator,
            View::TeamStatusCheck,
            View::FundingForm,
            View::PitchDeck,
            View::InvestorConnection,
            View::MentorshipOptions,
            View::ProgressTracking,
            View::Unmapped(StepId::FounderStart),
        ];
        for view in views {
            app.navigate(view);
            assert_eq!(app.view(), view);
            assert!(!options(&app).is_empty(), "{view}");
        }
    }

    #[test]
    fn founder_type_options_record_is_first_time() {
        let mut app = App::default();
        app.navigate(View::FounderTypeSelection);
        let first = options(&app).remove(0);
        match &first.action {
            ScreenAction::Decide { key, choice, .. } => {
                assert_eq!(key.kind(), Some(DecisionKind::IsFirstTime));
                assert!(choice.is_yes());
            }
            other => panic!("unexpected action {other:?}"),
        }
        activate(&mut app, first.action);
        assert_eq!(app.view(), View::IdeaStatusCheck);
        assert_eq!(app.store().balance(), 110);
    }

    #[test]
    fn funding_view_switches_to_application_after_yes() {
        let mut app = App::default();
        app.navigate(View::FundingForm);
        assert_eq!(labels(&app), vec!["Yes, I need funding", "No, not right now"]);
        activate_selected(&mut app);
        assert_eq!(app.store().current_step(), StepId::FundingForm);
        assert_eq!(labels(&app), vec!["Submit funding application"]);
        activate_selected(&mut app);
        assert_eq!(app.store().current_step(), StepId::PitchDeckCreation);
        assert_eq!(app.view(), View::PitchDeck);
        assert_eq!(app.store().balance(), 100 + 15 + 35);
    }

    #[test]
    fn declining_funding_leads_to_support_services() {
        let mut app = App::default();
        app.navigate(View::FundingForm);
        app.select_next(2);
        activate_selected(&mut app);
        assert_eq!(app.view(), View::MentorshipOptions);
        assert_eq!(app.store().balance(), 100);
    }

    #[test]
    fn ai_generator_lists_priced_services() {
        let mut app = App::default();
        app.navigate(View::AiIdeaGenerator);
        let labels = labels(&app);
        assert_eq!(labels[0], "R&D help (5 tokens)");
        assert_eq!(labels.len(), AiService::ALL.len() + 1);
        activate_selected(&mut app);
        assert_eq!(app.store().balance(), 95);
        assert!(app.store().service_used(AiService::RdHelp));
    }

    #[test]
    fn support_toggles_show_their_state() {
        let mut app = App::default();
        app.navigate(View::MentorshipOptions);
        activate(&mut app, ScreenAction::ToggleSupport(SupportService::AiChatbot));
        let glyphs = crate::theme::glyphs(app.ui_options());
        let labels = labels(&app);
        assert_eq!(labels[0], format!("{} AI chatbot for help", glyphs.checked));
        assert_eq!(labels[1], format!("{} Mentorship", glyphs.unchecked));
        assert_eq!(labels.last().map(String::as_str), Some("Confirm selection"));
    }

    #[test]
    fn unmapped_step_can_continue() {
        let mut app = App::default();
        app.navigate(View::Unmapped(StepId::FounderStart));
        activate_selected(&mut app);
        assert_eq!(app.store().current_step(), StepId::FirstTimeCheck);
        assert_eq!(app.view(), View::FounderTypeSelection);
    }
}
