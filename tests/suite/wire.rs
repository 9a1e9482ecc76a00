//! JSON shapes of the state a screen or an export would see.

use loka_core::resolve_next_step;
use loka_engine::{AiService, DecisionKind, ProgressStore, StepId};
use loka_types::{Choice, DecisionKey};
use serde_json::json;

#[test]
fn decisions_serialize_as_a_flat_object() {
    let mut store = ProgressStore::default();
    store.go_to_step(StepId::IdeaStatusCheck);
    store.make_decision(DecisionKind::HasIdea, false);
    store.make_decision(DecisionKind::SelectedDomain, "AI");
    store.make_decision("ideaStrategyComplete", true);

    let value = serde_json::to_value(store.decisions()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "hasIdea": false,
            "ideaStrategyComplete": true,
            "selectedDomain": "AI",
        })
    );
}

#[test]
fn steps_use_kebab_case_names() {
    let mut store = ProgressStore::default();
    store.make_decision(DecisionKind::IsFirstTime, false);
    let value = serde_json::to_value(store.completed_steps()).expect("serialize");
    assert_eq!(value, json!(["founder-start"]));
    let current = serde_json::to_value(store.current_step()).expect("serialize");
    assert_eq!(current, json!("startup-stage-selection"));
}

#[test]
fn ledger_entries_are_tagged() {
    let mut store = ProgressStore::default();
    store.spend_tokens(5, AiService::RdHelp).expect("spend");
    let entry = &store.ledger().entries()[0];
    let value = serde_json::to_value(entry).expect("serialize");
    assert_eq!(value["amount"], json!(5));
    assert_eq!(value["event"], json!({"type": "spent", "service": "rdHelp"}));
}

#[test]
fn decisions_read_back_from_json_route_the_same() {
    let raw = r#"{"needsFunding": true, "someFutureFlag": "x"}"#;
    let decisions: std::collections::BTreeMap<DecisionKey, Choice> =
        serde_json::from_str(raw).expect("deserialize");
    let key = DecisionKey::from(DecisionKind::NeedsFunding);
    let choice = &decisions[&key];
    assert_eq!(
        resolve_next_step(&key, choice, StepId::FundingDecision),
        StepId::FundingForm
    );
    let custom = DecisionKey::parse("someFutureFlag");
    assert_eq!(
        resolve_next_step(&custom, &decisions[&custom], StepId::FundingDecision),
        StepId::FundingDecision
    );
}
