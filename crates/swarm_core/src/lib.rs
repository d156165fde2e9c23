//! Deterministic role-playground core: text normalization, canned role
//! transforms, run dispatch, and a bounded run history.
//!
//! The crate is UI-free. A presentation shell owns a [`SwarmSession`], feeds
//! user actions into it, and renders its snapshots.

pub mod domain;
pub mod history;
pub mod roles;
pub mod session;
pub mod text;

pub use domain::{Assessment, RemixArtifact, Role, RunRecord};
pub use history::{HistoryLog, HISTORY_CAP};
pub use session::SwarmSession;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
