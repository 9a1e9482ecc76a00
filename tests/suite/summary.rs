//! Plain-text progress summary, as printed when the app exits.

use insta::assert_snapshot;
use loka_engine::{AiService, DecisionKind, ProgressStore, StepId};

#[test]
fn summary_after_first_decision() {
    let mut store = ProgressStore::default();
    store
        .earn_tokens(10, "Completed founder type selection")
        .expect("earn");
    store.make_decision(DecisionKind::IsFirstTime, true);

    assert_snapshot!(store.progress_summary().to_string(), @r"
    Step:     idea-status-check (Idea Status)
    Progress: 1/15 (7%)
    Next:     idea-strategy
    Options:  yes, no
    Tokens:   110 available, 0 spent
    ");
}

#[test]
fn summary_on_funding_form_has_no_lookahead() {
    let mut store = ProgressStore::default();
    store.go_to_step(StepId::FundingDecision);
    store.make_decision(DecisionKind::NeedsFunding, true);
    store.spend_tokens(5, AiService::RdHelp).expect("spend");

    assert_snapshot!(store.progress_summary().to_string(), @r"
    Step:     funding-form
    Progress: 1/15 (7%)
    Next:     -
    Tokens:   95 available, 5 spent
    ");
}

#[test]
fn fresh_summary() {
    let store = ProgressStore::new(40);
    assert_snapshot!(store.progress_summary().to_string(), @r"
    Step:     founder-start (Welcome Founder)
    Progress: 0/15 (0%)
    Next:     first-time-check
    Tokens:   40 available, 0 spent
    ");
}
