//! View state for one widget session: current input, latest output, and the
//! run history.

use chrono::Utc;
use tracing::info;

use crate::domain::{Role, RunRecord};
use crate::history::HistoryLog;
use crate::roles;

/// Session state owned by the presentation shell.
///
/// Every update runs to completion synchronously on the interaction thread;
/// there is no module-level mutable state behind it.
#[derive(Debug, Clone, Default)]
pub struct SwarmSession {
    input: String,
    output: String,
    history: HistoryLog,
}

impl SwarmSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Editable input buffer, handed to the text widget.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Runs `role` against the current input, overwriting the output and
    /// prepending a record to the history.
    pub fn run(&mut self, role: Role) {
        let result = roles::dispatch(role, &self.input);
        info!(role = role.label(), "role executed");
        self.output = result.clone();
        self.history.record(RunRecord {
            role,
            input: self.input.clone(),
            result,
            run_at_ms: Utc::now().timestamp_millis(),
        });
    }

    /// Resets input and output to empty. The history log is left untouched.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }
}
