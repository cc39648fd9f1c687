//! End-to-end checks of the document session's observable behavior:
//! what lands on disk, what survives a cancelled prompt, and how a path
//! gets established.

use inkpad::session::{Gate, Resolution, SaveChoice, SaveOutcome, Session, SessionEvent};

/// Saved bytes equal the buffer, and opening the file again reproduces
/// the exact text.
#[test]
fn save_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("letter.txt");

    let mut session = Session::new();
    session.buffer_mut().push_str("dear reader,\n\nhello.\n");
    session.mark_dirty();
    session.save_as(&path).expect("save as");

    assert_eq!(
        std::fs::read(&path).expect("read bytes"),
        session.text().as_bytes()
    );

    let mut reopened = Session::new();
    reopened.open(&path).expect("open");
    assert_eq!(reopened.text(), session.text());
    assert!(!reopened.is_dirty());
}

/// Two saves with no edits in between leave identical file bytes.
#[test]
fn save_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("note.txt");

    let mut session = Session::new();
    session.buffer_mut().push_str("once\n");
    session.mark_dirty();
    session.save_as(&path).expect("save as");
    let first = std::fs::read(&path).expect("read");

    assert_eq!(session.save().expect("save"), SaveOutcome::Saved);
    let second = std::fs::read(&path).expect("read");
    assert_eq!(first, second);
}

/// A fresh session closing (or doing anything destructive) never prompts.
#[test]
fn fresh_session_needs_no_confirmation() {
    let mut session = Session::new();
    assert_eq!(session.check_unsaved(), Gate::Proceed);
    session.close();
    assert_eq!(session.text(), "");
    assert_eq!(session.path(), None);
}

/// Typing into a pathless session and hitting Save changes nothing: no
/// file appears and the session stays dirty.
#[test]
fn save_without_a_path_is_a_noop() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut session = Session::new();
    session.buffer_mut().push_str("hello");
    session.mark_dirty();

    assert_eq!(session.save().expect("save"), SaveOutcome::NoPath);
    assert!(session.is_dirty());
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

/// Discarding edits at the prompt and opening another file switches the
/// session over completely while the first file keeps its old contents.
#[test]
fn discard_then_open_switches_files_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "alpha").expect("seed a");
    std::fs::write(&b, "bravo").expect("seed b");

    let mut session = Session::new();
    session.open(&a).expect("open a");
    session.buffer_mut().push_str(" with edits");
    session.mark_dirty();

    assert_eq!(session.check_unsaved(), Gate::Confirm);
    assert_eq!(
        session.resolve_choice(SaveChoice::Discard).expect("resolve"),
        Resolution::Proceed
    );
    session.open(&b).expect("open b");

    assert_eq!(session.text(), "bravo");
    assert_eq!(session.path(), Some(b.as_path()));
    assert!(!session.is_dirty());
    assert_eq!(std::fs::read_to_string(&a).expect("read a"), "alpha");
}

/// Cancelling the prompt aborts the operation and leaves every part of
/// the session untouched.
#[test]
fn cancel_during_close_changes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("keep.txt");
    std::fs::write(&path, "original").expect("seed");

    let mut session = Session::new();
    session.open(&path).expect("open");
    session.buffer_mut().push_str(" plus edits");
    session.mark_dirty();
    session.take_events();

    assert_eq!(session.check_unsaved(), Gate::Confirm);
    assert_eq!(
        session.resolve_choice(SaveChoice::Cancel).expect("resolve"),
        Resolution::Aborted
    );
    assert!(session.take_pending_cancel());

    assert_eq!(session.text(), "original plus edits");
    assert_eq!(session.path(), Some(path.as_path()));
    assert!(session.is_dirty());
    assert!(!session.has_events());
}

/// Save at the prompt writes through the existing path and lets the
/// parked operation continue.
#[test]
fn save_choice_writes_through_existing_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("draft.txt");
    std::fs::write(&path, "v1").expect("seed");

    let mut session = Session::new();
    session.open(&path).expect("open");
    session.buffer_mut().push_str(" v2");
    session.mark_dirty();

    assert_eq!(
        session.resolve_choice(SaveChoice::Save).expect("resolve"),
        Resolution::Proceed
    );
    assert!(!session.is_dirty());
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "v1 v2");
}

/// Save As establishes the session path; plain Save then writes there.
#[test]
fn save_as_adopts_the_path_for_later_saves() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("adopted.txt");

    let mut session = Session::new();
    session.buffer_mut().push_str("first");
    session.mark_dirty();
    session.save_as(&path).expect("save as");
    assert_eq!(session.path(), Some(path.as_path()));
    assert_eq!(
        session.take_events(),
        vec![SessionEvent::PathChanged(Some(path.clone()))]
    );

    session.buffer_mut().push_str(" second");
    session.mark_dirty();
    assert_eq!(session.save().expect("save"), SaveOutcome::Saved);
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "first second"
    );
}
