//! End-to-end founder journeys driven through the screen catalog.

use crossterm::event::KeyCode;
use loka_engine::{AiService, Choice, DecisionKey, DecisionKind, StepId, SupportService, View};

use crate::common::{ascii_app, choose, press};

#[test]
fn first_time_founder_with_idea_reaches_investors() {
    let mut app = ascii_app();

    choose(&mut app, "Start founder journey");
    assert_eq!(app.view(), View::FounderTypeSelection);
    choose(&mut app, "First-time founder");
    assert_eq!(app.view(), View::IdeaStatusCheck);
    choose(&mut app, "Yes, I have an idea");
    assert_eq!(app.view(), View::IdeaStrategy);
    choose(&mut app, "Submit idea strategy");
    assert_eq!(app.view(), View::TeamStatusCheck);
    choose(&mut app, "I'm looking for a co-founder");
    assert_eq!(app.view(), View::FundingForm);
    choose(&mut app, "Yes, I need funding");
    assert_eq!(app.store().current_step(), StepId::FundingForm);
    choose(&mut app, "Submit funding application");
    assert_eq!(app.view(), View::PitchDeck);
    choose(&mut app, "Submit pitch deck");
    assert_eq!(app.view(), View::InvestorConnection);
    choose(&mut app, "Connect with investors");
    assert_eq!(app.view(), View::ProgressTracking);
    choose(&mut app, "Finish tracking setup");
    assert_eq!(app.view(), View::Dashboard);

    let store = app.store();
    assert_eq!(store.current_step(), StepId::PitchDeckCreation);
    assert_eq!(
        store.completed_steps(),
        &[
            StepId::FirstTimeCheck,
            StepId::IdeaStatusCheck,
            StepId::IdeaStrategy,
            StepId::IdeaStrategy,
            StepId::FundingDecision,
            StepId::FundingForm,
        ]
    );
    assert_eq!(store.calculate_progress(), 40);
    assert_eq!(store.balance(), 350);
    assert_eq!(store.spent(), 0);
    assert_eq!(store.ledger().earned_history().count(), 9);
    assert!(!store.redirect_pending());
}

#[test]
fn experienced_founder_without_idea_skips_funding() {
    let mut app = ascii_app();

    choose(&mut app, "Start founder journey");
    choose(&mut app, "Experienced founder");
    assert_eq!(app.view(), View::StartupStageSelection);
    choose(&mut app, "Bootstrapped");
    assert_eq!(app.view(), View::IdeaStatusCheck);
    choose(&mut app, "No, help me find one");
    assert_eq!(app.view(), View::DomainSelection);
    choose(&mut app, "AI");
    assert_eq!(app.view(), View::AiIdeaGenerator);
    assert_eq!(app.store().current_step(), StepId::AiAgentsHelp);
    choose(&mut app, "R&D help (5 tokens)");
    choose(&mut app, "Use an AI-generated idea");
    assert_eq!(app.view(), View::TeamStatusCheck);
    choose(&mut app, "I'm a solo founder");
    assert_eq!(app.view(), View::FundingForm);
    choose(&mut app, "No, not right now");
    assert_eq!(app.view(), View::MentorshipOptions);
    choose(&mut app, "[ ] Legal team");
    choose(&mut app, "Confirm selection");
    assert_eq!(app.view(), View::Dashboard);

    let store = app.store();
    assert_eq!(store.current_step(), StepId::BeyondFundingSupport);
    assert_eq!(store.balance(), 215);
    assert_eq!(store.spent(), 5);
    assert!(store.service_used(AiService::RdHelp));
    assert!(store.support_selected(SupportService::Legal));
    assert_eq!(store.decisions().len(), 6);
    assert_eq!(
        store.decision(&DecisionKey::from(DecisionKind::StartupStage)),
        Some(&Choice::from("bootstrapped"))
    );
    assert_eq!(
        store.decision(&DecisionKey::from(DecisionKind::NeedsFunding)),
        Some(&Choice::Flag(false))
    );
}

#[test]
fn keyboard_drives_the_same_flow() {
    let mut app = ascii_app();
    assert!(!press(&mut app, KeyCode::Enter));
    assert!(!press(&mut app, KeyCode::Down));
    assert!(!press(&mut app, KeyCode::Enter));
    assert_eq!(app.view(), View::StartupStageSelection);
    assert_eq!(app.selection().index(), 0);
    assert!(!press(&mut app, KeyCode::Esc));
    assert_eq!(app.view(), View::Dashboard);
    assert_eq!(app.store().current_step(), StepId::StartupStageSelection);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn broke_founder_cannot_buy_ai_help() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = crate::common::load_config(dir.path(), "[tokens]\nstarting_balance = 3\n");
    let mut app = loka_engine::App::new(Some(&config));

    app.navigate(View::AiIdeaGenerator);
    choose(&mut app, "Cold calling (5 tokens)");
    assert_eq!(app.store().balance(), 3);
    assert!(!app.store().service_used(AiService::ColdCalling));
    assert!(app.store().ledger().entries().is_empty());
    assert_eq!(
        app.status_message(),
        Some("Cold calling: insufficient balance: 5 requested, 3 available")
    );
}

#[test]
fn leaving_mid_journey_and_jumping_back_in() {
    let mut app = ascii_app();
    choose(&mut app, "Idea status");
    choose(&mut app, "No, help me find one");
    assert_eq!(app.view(), View::DomainSelection);
    press(&mut app, KeyCode::Esc);
    choose(&mut app, "Choose a domain");
    choose(&mut app, "Web3");
    assert_eq!(app.store().current_step(), StepId::AiAgentsHelp);
    assert_eq!(
        app.store().completed_steps(),
        &[StepId::IdeaStatusCheck, StepId::DomainSelection]
    );
}
