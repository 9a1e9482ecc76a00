//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loka_engine::{App, LokaConfig, ProgressStore, TokenSchedule, UiOptions};
use loka_tui::{handle_key, screens};

/// App with default tokens and ASCII glyphs.
pub fn ascii_app() -> App {
    let schedule = TokenSchedule::default();
    App::with_parts(
        ProgressStore::new(schedule.starting_balance()),
        schedule,
        UiOptions {
            ascii_only: true,
            high_contrast: false,
        },
    )
}

/// Pick the option labelled `label` on the current view.
pub fn choose(app: &mut App, label: &str) {
    let options = screens::options(app);
    let Some(option) = options.iter().find(|option| option.label == label) else {
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        panic!("no option {label:?} on {}; have {labels:?}", app.view());
    };
    screens::activate(app, option.action.clone());
}

/// Feed a key press through the same path the terminal uses.
pub fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

/// Write `contents` as a config file under `dir` and load it.
pub fn load_config(dir: &Path, contents: &str) -> LokaConfig {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    LokaConfig::load_from(&path)
        .expect("config parses")
        .expect("config exists")
}
