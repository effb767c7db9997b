//! Scripted runs of the interactive review loop.

use std::io::Cursor;
use std::path::Path;

use chrono::{TimeZone, Utc};

use review_cli::interactive::ReviewLoop;
use review_core::{DateStyle, ReviewSession};
use review_corpus::Corpus;
use review_model::{DocId, PrivilegeCode, ResponsivenessCode};
use review_store::{CodingStore, ManualClock, MemoryBlobStore};

type Session = ReviewSession<MemoryBlobStore, ManualClock>;

fn session(size: usize) -> Session {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());
    ReviewSession::new(
        Corpus::generate(size),
        CodingStore::with_clock(MemoryBlobStore::new(), clock),
    )
}

fn run_script(session: &mut Session, script: &str, export_dir: &Path) -> String {
    let mut review = ReviewLoop::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        DateStyle::Iso,
        export_dir,
    );
    review.run(session).unwrap();
    String::from_utf8(review.into_output()).unwrap()
}

fn id(n: usize) -> DocId {
    DocId::from_sequence(n)
}

#[test]
fn key_lines_navigate_the_view() {
    let mut session = session(5);
    let output = run_script(&mut session, "jj\nk\nquit\n", Path::new("."));

    assert_eq!(session.selected_id(), Some(&id(2)));
    assert!(output.contains("DOC-0003"));
    assert!(output.contains("(2/5)"));
}

#[test]
fn filter_then_navigate_enters_the_view() {
    let mut session = session(25);
    let output = run_script(
        &mut session,
        "filter tag Litigation Hold\nj\nj\n",
        Path::new("."),
    );

    assert!(output.contains("5 of 25 documents shown, 0 coded"));
    assert!(output.contains("No document selected"));
    assert_eq!(session.selected_id(), Some(&id(5)));
}

#[test]
fn coding_prompts_treat_j_as_text() {
    let mut session = session(5);
    let script = "open doc-0002\ncode\nresponsive\nnot privileged\nj\nk\nquit\n";
    let output = run_script(&mut session, script, Path::new("."));

    assert_eq!(session.selected_id(), Some(&id(2)));
    let record = session.coding_for(&id(2)).unwrap();
    assert_eq!(record.responsiveness, ResponsivenessCode::Responsive);
    assert_eq!(record.privilege, PrivilegeCode::NotPrivileged);
    assert_eq!(record.issues, "j");
    assert_eq!(record.notes, "k");
    assert_eq!(record.saved_at_iso(), "2025-03-01T12:00:00.000Z");
    assert!(output.contains("Saved DOC-0002: Responsive / Not Privileged"));
}

#[test]
fn coding_prompts_keep_prefill_and_reprompt_on_bad_codes() {
    let mut session = session(3);
    run_script(
        &mut session,
        "code\nresponsive\nprivileged\nNDA\nfirst pass\n",
        Path::new("."),
    );

    let output = run_script(
        &mut session,
        "code\nmaybe\n\n\n-\n\nshow\n",
        Path::new("."),
    );

    let record = session.coding_for(&id(1)).unwrap();
    assert_eq!(record.responsiveness, ResponsivenessCode::Responsive);
    assert_eq!(record.privilege, PrivilegeCode::Privileged);
    assert_eq!(record.issues, "");
    assert_eq!(record.notes, "first pass");
    assert!(output.contains("Choose one of: Unreviewed, Responsive"));
    assert!(output.contains("Notes:        first pass"));
}

#[test]
fn coding_cancelled_at_end_of_input_saves_nothing() {
    let mut session = session(3);
    let output = run_script(&mut session, "code\nresponsive\n", Path::new("."));

    assert!(output.contains("Coding cancelled."));
    assert_eq!(session.stats().coded, 0);
}

#[test]
fn unknown_and_malformed_ids_leave_selection_alone() {
    let mut session = session(3);
    let output = run_script(&mut session, "open DOC-0099\nopen nonsense\n", Path::new("."));

    assert!(output.contains("document DOC-0099 is not in the corpus"));
    assert!(output.contains("nonsense"));
    assert_eq!(session.selected_id(), Some(&id(1)));
}

#[test]
fn reset_asks_before_clearing() {
    let mut session = session(3);
    let output = run_script(
        &mut session,
        "code\nresponsive\n\n\n\nreset\nn\nstats\nreset\ny\nstats\n",
        Path::new("."),
    );

    assert!(output.contains("Reset cancelled."));
    assert!(output.contains("3 of 3 documents shown, 1 coded"));
    assert!(output.contains("Cleared coding for 1 documents."));
    assert!(output.contains("3 of 3 documents shown, 0 coded"));
    assert_eq!(session.stats().coded, 0);
}

#[test]
fn export_writes_into_the_export_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(3);
    let output = run_script(&mut session, "code\nresponsive\n\n\n\nexport\n", dir.path());

    let path = dir.path().join("doc-review-coding-2025-03-01.csv");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 4);
    assert!(contents.contains("\"DOC-0001\""));
    assert!(output.contains("Exported 3 documents to"));
}

#[test]
fn unknown_commands_do_not_stop_the_loop() {
    let mut session = session(3);
    let output = run_script(&mut session, "dance\nj\n", Path::new("."));

    assert!(output.contains("unknown command"));
    assert_eq!(session.selected_id(), Some(&id(2)));
}
