//! Configuration files feeding the app.

use loka_engine::{AiService, App, ConfigError, LokaConfig, RewardKind, View};
use tempfile::tempdir;

use crate::common::{choose, load_config};

#[test]
fn configured_amounts_reach_the_screens() {
    let dir = tempdir().expect("tempdir");
    let config = load_config(
        dir.path(),
        r"
[app]
ascii_only = true

[tokens]
starting_balance = 20

[tokens.costs]
prototype_creation = 8

[tokens.rewards]
founder_type = 1
",
    );
    let mut app = App::new(Some(&config));
    assert!(app.ui_options().ascii_only);
    assert_eq!(app.store().balance(), 20);
    assert_eq!(app.schedule().cost(AiService::PrototypeCreation), 8);
    assert_eq!(app.schedule().reward(RewardKind::PitchDeck), 50);

    choose(&mut app, "Start founder journey");
    choose(&mut app, "First-time founder");
    assert_eq!(app.store().balance(), 21);

    app.navigate(View::AiIdeaGenerator);
    choose(&mut app, "Prototype creation (8 tokens)");
    assert_eq!(app.store().balance(), 13);

    app.reset();
    assert_eq!(app.store().balance(), 20);
}

#[test]
fn broken_config_is_reported_and_defaults_apply() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tokens]\nstarting_balance = \"lots\"\n").expect("write");

    let err = LokaConfig::load_from(&path).expect_err("type mismatch");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));

    let app = App::new(None);
    assert_eq!(app.store().balance(), 100);
}

#[test]
fn missing_config_means_defaults() {
    let dir = tempdir().expect("tempdir");
    let loaded = LokaConfig::load_from(&dir.path().join("absent.toml")).expect("no error");
    assert!(loaded.is_none());
    let app = App::new(loaded.as_ref());
    assert_eq!(app.schedule().cost(AiService::RdHelp), 5);
}
