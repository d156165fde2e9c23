use std::fmt;

/// The seven canned text-transform behaviors a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Promptor,
    Orchestrator,
    Coder,
    Reviewer,
    FactChecker,
    Assessor,
    GeniusRemix,
}

impl Role {
    /// Every role, in action-surface order.
    pub const ALL: [Role; 7] = [
        Role::Promptor,
        Role::Orchestrator,
        Role::Coder,
        Role::Reviewer,
        Role::FactChecker,
        Role::Assessor,
        Role::GeniusRemix,
    ];

    /// The five roles that render a display string directly.
    pub const SIMPLE: [Role; 5] = [
        Role::Promptor,
        Role::Orchestrator,
        Role::Coder,
        Role::Reviewer,
        Role::FactChecker,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Promptor => "Promptor",
            Role::Orchestrator => "Orchestrator",
            Role::Coder => "Coder",
            Role::Reviewer => "Reviewer",
            Role::FactChecker => "FactChecker",
            Role::Assessor => "Assessor",
            Role::GeniusRemix => "GeniusRemix",
        }
    }
}

/// Immutable snapshot of one executed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub role: Role,
    /// Input text exactly as it read when the run was triggered.
    pub input: String,
    /// Rendered display string the run produced.
    pub result: String,
    /// Milliseconds since the Unix epoch.
    pub run_at_ms: i64,
}

/// Heuristic readiness verdict produced by the Assessor role.
///
/// The scoring weights cap the attainable score at 80.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub score: u8,
    pub note: &'static str,
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}\n{}", self.score, self.note)
    }
}

/// Shareable three-field artifact produced by the GeniusRemix role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemixArtifact {
    pub blurb: String,
    pub commit: String,
    pub tweet: String,
}

impl fmt::Display for RemixArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--- Genius Remix ---\n{}\n\nCommit: {}\nTweet: {}",
            self.blurb, self.commit, self.tweet
        )
    }
}
