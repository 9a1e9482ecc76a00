//! Core domain types for Loka.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod decision;
mod ledger;
mod services;
mod step;
pub mod ui;
mod view;

pub use decision::{Choice, DecisionKey, DecisionKind};
pub use ledger::{LedgerEntry, LedgerEvent, RewardKind};
pub use services::{AiService, SupportService};
pub use step::{ParseStepError, StepId};
pub use view::View;
