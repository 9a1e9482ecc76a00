//! Core domain logic for Loka.
//!
//! This crate holds the static wizard data (decision table, step registry)
//! and the token ledger. Nothing here performs IO or reads the clock; callers
//! pass timestamps in.

mod community;
pub mod ledger;
pub mod registry;
pub mod routing;

pub use community::{COMMUNITY_STATS, CommunityStats};
pub use ledger::{LedgerError, TokenLedger};
pub use registry::{StepDefinition, StepKind};
pub use routing::resolve_next_step;
