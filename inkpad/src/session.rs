//! Document session — the state machine behind the editor
//!
//! Owns the text buffer, the backing file path and the unsaved-changes
//! flag. Operations that would lose edits go through the unsaved-changes
//! gate: the view layer parks the operation while the prompt is on screen
//! and feeds the user's answer back through [`Session::resolve_choice`].
//!
//! No egui types in here; the module is exercised headless by the tests.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of the unsaved-changes gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Nothing to lose; carry on without prompting.
    Proceed,
    /// Unsaved edits exist; ask the user first.
    Confirm,
}

/// The user's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// What the caller should do once the prompt was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Carry out the parked operation.
    Proceed,
    /// A save was requested but the session has no path; run Save As, then
    /// resume the parked operation.
    NeedsPath,
    /// The user backed out. Drop the parked operation, touch nothing.
    Aborted,
}

/// Outcome of a plain Save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No path is set. Saving is a no-op; Save As establishes a path.
    NoPath,
}

/// Notification from the session to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backing file changed (opened, adopted by Save As, or cleared).
    PathChanged(Option<PathBuf>),
}

/// In-memory document state. Created empty at startup; only file contents
/// outlive it.
#[derive(Default)]
pub struct Session {
    text: String,
    path: Option<PathBuf>,
    dirty: bool,
    pending_cancel: bool,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable buffer access for the text widget. A caller that changed the
    /// buffer must follow up with [`mark_dirty`](Self::mark_dirty).
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The unsaved-changes gate. Never prompts for a clean session or an
    /// empty buffer — losing nothing needs no confirmation.
    pub fn check_unsaved(&self) -> Gate {
        if !self.dirty || self.text.is_empty() {
            Gate::Proceed
        } else {
            Gate::Confirm
        }
    }

    /// Feed the prompt's answer back into the state machine.
    pub fn resolve_choice(&mut self, choice: SaveChoice) -> Result<Resolution, SessionError> {
        match choice {
            SaveChoice::Save => match self.save()? {
                SaveOutcome::Saved => Ok(Resolution::Proceed),
                SaveOutcome::NoPath => Ok(Resolution::NeedsPath),
            },
            SaveChoice::Discard => Ok(Resolution::Proceed),
            SaveChoice::Cancel => {
                self.pending_cancel = true;
                Ok(Resolution::Aborted)
            }
        }
    }

    /// Consume the cancel flag set by [`SaveChoice::Cancel`]. Guarded
    /// operations check this before resuming.
    pub fn take_pending_cancel(&mut self) -> bool {
        std::mem::take(&mut self.pending_cancel)
    }

    /// Replace the buffer with the contents of `path`. On a read failure
    /// the session is left exactly as it was.
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.text = text;
        self.set_path(Some(path.to_path_buf()));
        self.dirty = false;
        Ok(())
    }

    /// Write the buffer to the current path. Without a path this is a
    /// silent no-op and the dirty flag is untouched.
    pub fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let path = match self.path.clone() {
            Some(path) => path,
            None => return Ok(SaveOutcome::NoPath),
        };
        self.write_to(&path)?;
        self.dirty = false;
        Ok(SaveOutcome::Saved)
    }

    /// Write the buffer to `path` and adopt it as the session path.
    pub fn save_as(&mut self, path: &Path) -> Result<(), SessionError> {
        self.write_to(path)?;
        self.set_path(Some(path.to_path_buf()));
        self.dirty = false;
        Ok(())
    }

    /// The New-file step that runs after the gate: create an empty file at
    /// `path` (truncating an existing one) and load it.
    pub fn create(&mut self, path: &Path) -> Result<(), SessionError> {
        std::fs::write(path, "").map_err(|source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.open(path)
    }

    /// Drop the document: empty buffer, no path, clean.
    pub fn close(&mut self) {
        self.text.clear();
        self.set_path(None);
        self.dirty = false;
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Drain queued notifications. The view calls this once per frame.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_path(&mut self, path: Option<PathBuf>) {
        if self.path != path {
            self.path = path.clone();
            self.events.push(SessionEvent::PathChanged(path));
        }
    }

    fn write_to(&self, path: &Path) -> Result<(), SessionError> {
        std::fs::write(path, &self.text).map_err(|source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_is_quiet_for_clean_or_empty_sessions() {
        let mut session = Session::new();
        assert_eq!(session.check_unsaved(), Gate::Proceed);

        // Edits that net out to an empty buffer still need no prompt.
        session.mark_dirty();
        assert_eq!(session.check_unsaved(), Gate::Proceed);

        session.buffer_mut().push_str("draft");
        assert_eq!(session.check_unsaved(), Gate::Confirm);
    }

    #[test]
    fn save_choice_without_path_asks_for_one() {
        let mut session = Session::new();
        session.buffer_mut().push_str("draft");
        session.mark_dirty();

        let resolution = session.resolve_choice(SaveChoice::Save).expect("resolve");
        assert_eq!(resolution, Resolution::NeedsPath);
        assert!(session.is_dirty());
    }

    #[test]
    fn cancel_sets_the_flag_once() {
        let mut session = Session::new();
        session.buffer_mut().push_str("draft");
        session.mark_dirty();

        let resolution = session.resolve_choice(SaveChoice::Cancel).expect("resolve");
        assert_eq!(resolution, Resolution::Aborted);
        assert!(session.take_pending_cancel());
        assert!(!session.take_pending_cancel());
    }

    #[test]
    fn path_changes_are_reported_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a.txt");

        let mut session = Session::new();
        session.buffer_mut().push_str("text");
        session.mark_dirty();
        session.save_as(&path).expect("save as");
        assert_eq!(
            session.take_events(),
            vec![SessionEvent::PathChanged(Some(path.clone()))]
        );

        // Saving again to the same path is not a path change.
        session.save_as(&path).expect("save as");
        assert!(session.take_events().is_empty());

        session.close();
        assert_eq!(session.take_events(), vec![SessionEvent::PathChanged(None)]);
    }

    #[test]
    fn failed_open_leaves_the_session_alone() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut session = Session::new();
        session.buffer_mut().push_str("kept");
        session.mark_dirty();

        let err = session.open(&dir.path().join("absent.txt"));
        assert!(err.is_err());
        assert_eq!(session.text(), "kept");
        assert_eq!(session.path(), None);
        assert!(session.is_dirty());
        assert!(!session.has_events());
    }

    #[test]
    fn create_truncates_and_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("new.txt");
        std::fs::write(&path, "old contents").expect("seed");

        let mut session = Session::new();
        session.create(&path).expect("create");
        assert_eq!(session.text(), "");
        assert_eq!(session.path(), Some(path.as_path()));
        assert!(!session.is_dirty());
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "");
    }
}
