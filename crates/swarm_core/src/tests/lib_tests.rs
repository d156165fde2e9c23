use crate::domain::Role;
use crate::session::SwarmSession;

#[test]
fn run_overwrites_output_and_records_history() {
    let mut session = SwarmSession::new();
    session.input_mut().push_str("meeting scheduler");

    session.run(Role::Promptor);
    assert!(session.output().starts_with("meeting scheduler"));
    assert_eq!(session.history().len(), 1);

    session.run(Role::Coder);
    assert!(session.output().starts_with("// meeting-scheduler.js"));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().entries()[0].role, Role::Coder);
}

#[test]
fn history_snapshots_input_at_run_time() {
    let mut session = SwarmSession::new();
    session.input_mut().push_str("first idea");
    session.run(Role::Reviewer);

    session.input_mut().clear();
    session.input_mut().push_str("second idea");
    session.run(Role::Reviewer);

    let entries = session.history().entries();
    assert_eq!(entries[0].input, "second idea");
    assert_eq!(entries[1].input, "first idea");
}

#[test]
fn clear_resets_text_but_keeps_history() {
    let mut session = SwarmSession::new();
    session.input_mut().push_str("an idea worth keeping");
    session.run(Role::FactChecker);
    let before = session.history().entries().to_vec();

    session.clear();
    assert_eq!(session.input(), "");
    assert_eq!(session.output(), "");
    assert_eq!(session.history().entries(), before.as_slice());
}

#[test]
fn runs_on_cleared_input_fall_back_per_role() {
    let mut session = SwarmSession::new();
    session.run(Role::Promptor);
    assert_eq!(session.output(), "Provide a short idea to start.");
    session.run(Role::Assessor);
    assert_eq!(session.output(), "Score: 0\nEmpty");
}

#[test]
fn run_stamps_epoch_milliseconds() {
    let mut session = SwarmSession::new();
    session.input_mut().push_str("x");
    session.run(Role::Promptor);
    assert!(session.history().entries()[0].run_at_ms > 0);
}

#[test]
fn twenty_one_runs_keep_only_twenty_records() {
    let mut session = SwarmSession::new();
    for n in 0..21 {
        session.input_mut().clear();
        session.input_mut().push_str(&format!("idea number {n}"));
        session.run(Role::Orchestrator);
    }
    assert_eq!(session.history().len(), 20);
    assert_eq!(session.history().entries()[0].input, "idea number 20");
    assert!(session
        .history()
        .entries()
        .iter()
        .all(|r| r.input != "idea number 0"));
}
