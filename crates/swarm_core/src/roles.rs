//! The canned role transforms and the dispatcher that renders them.
//!
//! Every function here is pure and total. Each one normalizes its input and
//! branches on emptiness; there is no I/O and no failure path.

use crate::domain::{Assessment, RemixArtifact, Role};
use crate::text::{first_words, is_word_char, normalize, slug};

/// Number of words quoted when a role echoes the idea back.
const HEAD_WORDS: usize = 6;

pub fn promptor(input: &str) -> String {
    let base = normalize(input);
    if base.is_empty() {
        return "Provide a short idea to start.".to_string();
    }
    format!("{base} — short concise brief, target audience: early adopters, 1-line value prop.")
}

pub fn orchestrator(input: &str) -> String {
    let p = normalize(input);
    let ellipsis = if p.chars().count() > 40 { "..." } else { "" };
    [
        format!(
            "Clarify: extract main goal from '{}{}'",
            first_words(&p, HEAD_WORDS),
            ellipsis
        ),
        "Design minimal UX: single flow, 3 actions".to_string(),
        "Deliverables: README, demo, 1 test, 1 screenshot".to_string(),
    ]
    .join("\n")
}

pub fn coder(input: &str) -> String {
    let n = normalize(input).to_lowercase();
    if n.is_empty() {
        return "No idea to code.".to_string();
    }
    let ident = n
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .take(3)
        .collect::<Vec<_>>()
        .join("-");
    let ident = if ident.is_empty() {
        "demo".to_string()
    } else {
        ident
    };
    let func = ident.replace('-', "_");
    format!("// {ident}.js\nexport default function {func}(){{ return 'hello from {ident}'; }}")
}

pub fn reviewer(input: &str) -> String {
    let s = normalize(input);
    if s.is_empty() {
        return "Nothing to review.".to_string();
    }
    let mut bullets = Vec::new();
    if s.chars().count() < 40 {
        bullets.push("Expand the narrative with 1 user story.");
    }
    if !s.chars().any(|c| c.is_ascii_uppercase()) {
        bullets.push("Add a capitalized headline.");
    }
    bullets.push("Remove jargon; prefer outcomes.");
    bullets.join("\n")
}

pub fn fact_checker(input: &str) -> String {
    let s = normalize(input);
    if s.is_empty() {
        return "Nothing to check.".to_string();
    }
    // Raw substring scan, so e.g. "maintain" trips the "ai" pattern.
    let lower = s.to_lowercase();
    let mut flags = Vec::new();
    if ["all", "always", "never"].iter().any(|p| lower.contains(p)) {
        flags.push("Vague absolutes detected: 'all/always/never'. Consider softening.");
    }
    if ["blockchain", "ai", "crypto"]
        .iter()
        .any(|p| lower.contains(p))
    {
        flags.push("Buzzword present: add concrete metric or user scenario.");
    }
    if flags.is_empty() {
        "No obvious factual red flags.".to_string()
    } else {
        flags.join("\n")
    }
}

pub fn assess(input: &str) -> Assessment {
    let s = normalize(input);
    if s.is_empty() {
        return Assessment {
            score: 0,
            note: "Empty",
        };
    }
    let len_factor = (s.chars().count() as f64 / 120.0).min(1.0);
    let clarity = if has_adjacent_word_tokens(&s) { 0.6 } else { 0.3 };
    let score = ((0.5 * len_factor + 0.5 * clarity) * 100.0).round() as u8;
    let note = if score > 70 {
        "Ready for demo"
    } else {
        "Needs iteration"
    };
    Assessment { score, note }
}

/// True when some space has a word character on both sides, i.e. the
/// normalized text holds at least two adjacent word tokens.
fn has_adjacent_word_tokens(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars
        .windows(3)
        .any(|w| is_word_char(w[0]) && w[1] == ' ' && is_word_char(w[2]))
}

pub fn remix(input: &str) -> RemixArtifact {
    let s = normalize(input);
    let one_liner = if s.is_empty() {
        "A tiny idea that scales.".to_string()
    } else {
        let head = first_words(&s, HEAD_WORDS);
        if s.split_whitespace().count() > HEAD_WORDS {
            format!("{head}...")
        } else {
            head
        }
    };
    RemixArtifact {
        blurb: format!(
            "{one_liner}\n\nWhy it matters: Converts friction into action.\nTry it: clone, run, iterate."
        ),
        commit: format!("feat: prototype {}", slug(&one_liner)),
        tweet: format!("{one_liner} — demo + repo in bio. #buildinpublic"),
    }
}

/// Renders the display string for any role against the current input.
///
/// Total over the closed [`Role`] enum. The structured Assessor and
/// GeniusRemix results are formatted here, before anything reaches the
/// history log.
pub fn dispatch(role: Role, input: &str) -> String {
    match role {
        Role::Promptor => promptor(input),
        Role::Orchestrator => orchestrator(input),
        Role::Coder => coder(input),
        Role::Reviewer => reviewer(input),
        Role::FactChecker => fact_checker(input),
        Role::Assessor => assess(input).to_string(),
        Role::GeniusRemix => remix(input).to_string(),
    }
}

#[cfg(test)]
#[path = "tests/roles_tests.rs"]
mod tests;
