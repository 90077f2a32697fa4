//! Drag-and-drop deletion: confirm each dropped file, then move it to the
//! system trash.
//!
//! The flow is written against two seams so it can run without a desktop:
//! [`Prompter`] (blocking confirm / alert dialogs) and [`Trash`] (the actual
//! move).  [`DialogPrompter`] and [`SystemTrash`] are the real backends.

pub mod dialog;
pub mod recycle;

pub use dialog::DialogPrompter;
pub use recycle::SystemTrash;

use notch_core::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Severity of a one-button alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Warning,
    Error,
}

/// Blocking user prompts.  Both calls return only once dismissed.
pub trait Prompter {
    /// Yes/No question.  Anything but an explicit "Yes", including closing
    /// the dialog, counts as "No".
    fn confirm(&self, title: &str, body: &str) -> bool;

    fn notify(&self, level: Notice, title: &str, body: &str);
}

/// Destination for confirmed deletions.
pub trait Trash {
    fn move_to_trash(&self, path: &Path) -> Result<()>;
}

/// What happened to a single dropped path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Path was empty or missing; nothing was attempted.
    NotFound(PathBuf),
    /// User answered "No".
    Declined(PathBuf),
    Trashed(PathBuf),
    /// Trash call failed; carries the error text shown to the user.
    Failed(PathBuf, String),
}

#[derive(Debug)]
pub struct DeleteFlow<P, T> {
    prompter: P,
    trash:    T,
}

impl DeleteFlow<DialogPrompter, SystemTrash> {
    /// Native dialogs and the platform recycle bin.
    pub fn native() -> Self {
        Self::new(DialogPrompter, SystemTrash)
    }
}

impl<P: Prompter, T: Trash> DeleteFlow<P, T> {
    pub fn new(prompter: P, trash: T) -> Self {
        Self { prompter, trash }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn trash(&self) -> &T {
        &self.trash
    }

    /// Run the confirm → trash → report sequence for one path.
    pub fn handle(&self, path: &Path) -> DropOutcome {
        let shown = path.display();

        if path.as_os_str().is_empty() || !path.exists() {
            warn!(path = %shown, "dropped file does not exist");
            self.prompter.notify(
                Notice::Warning,
                "File Not Found",
                &format!("The file does not exist:\n{shown}"),
            );
            return DropOutcome::NotFound(path.to_path_buf());
        }

        let question = format!("Are you sure you want to delete:\n{shown}?");
        if !self.prompter.confirm("Confirm Delete", &question) {
            info!(path = %shown, "delete declined");
            return DropOutcome::Declined(path.to_path_buf());
        }

        match self.trash.move_to_trash(path) {
            Ok(()) => {
                info!(path = %shown, "moved to trash");
                self.prompter.notify(
                    Notice::Info,
                    "Deleted",
                    &format!("File moved to recycle bin:\n{shown}"),
                );
                DropOutcome::Trashed(path.to_path_buf())
            }
            Err(e) => {
                warn!(path = %shown, "trash failed: {e}");
                self.prompter.notify(
                    Notice::Error,
                    "Error",
                    &format!("Failed to delete {shown}:\n{e}"),
                );
                DropOutcome::Failed(path.to_path_buf(), e.to_string())
            }
        }
    }

    /// Handle several dropped paths in order; a failure never stops the rest.
    pub fn handle_all<I>(&self, paths: I) -> Vec<DropOutcome>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        paths.into_iter().map(|p| self.handle(p.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notch_core::NotchError;
    use std::cell::{Cell, RefCell};

    /// Answers every confirmation with `answer` and records every alert.
    struct ScriptedPrompter {
        answer:   bool,
        confirms: Cell<usize>,
        notices:  RefCell<Vec<(Notice, String)>>,
    }

    impl ScriptedPrompter {
        fn answering(answer: bool) -> Self {
            Self { answer, confirms: Cell::new(0), notices: RefCell::new(Vec::new()) }
        }

        fn titles(&self) -> Vec<String> {
            self.notices.borrow().iter().map(|(_, t)| t.clone()).collect()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, _title: &str, _body: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer
        }

        fn notify(&self, level: Notice, title: &str, _body: &str) {
            self.notices.borrow_mut().push((level, title.to_string()));
        }
    }

    /// Records calls; optionally fails them.  Never touches the filesystem.
    #[derive(Default)]
    struct RecordingTrash {
        calls: RefCell<Vec<PathBuf>>,
        fail:  bool,
    }

    impl Trash for RecordingTrash {
        fn move_to_trash(&self, path: &Path) -> Result<()> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if self.fail {
                return Err(NotchError::Trash("bin is full".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn missing_path_warns_without_prompting_or_trashing() {
        let flow = DeleteFlow::new(ScriptedPrompter::answering(true), RecordingTrash::default());
        let dir = tempfile::tempdir().unwrap();
        let ghost = dir.path().join("ghost.txt");

        let outcome = flow.handle(&ghost);

        assert_eq!(outcome, DropOutcome::NotFound(ghost));
        assert_eq!(flow.prompter().confirms.get(), 0);
        assert_eq!(flow.prompter().notices.borrow()[0].0, Notice::Warning);
        assert_eq!(flow.prompter().titles(), ["File Not Found"]);
        assert!(flow.trash().calls.borrow().is_empty());
    }

    #[test]
    fn empty_path_counts_as_not_found() {
        let flow = DeleteFlow::new(ScriptedPrompter::answering(true), RecordingTrash::default());
        assert!(matches!(flow.handle(Path::new("")), DropOutcome::NotFound(_)));
        assert!(flow.trash().calls.borrow().is_empty());
    }

    #[test]
    fn confirmed_drop_trashes_exactly_once() {
        let flow = DeleteFlow::new(ScriptedPrompter::answering(true), RecordingTrash::default());
        let file = tempfile::NamedTempFile::new().unwrap();

        let outcome = flow.handle(file.path());

        assert_eq!(outcome, DropOutcome::Trashed(file.path().to_path_buf()));
        assert_eq!(*flow.trash().calls.borrow(), vec![file.path().to_path_buf()]);
        assert_eq!(flow.prompter().titles(), ["Deleted"]);
    }

    #[test]
    fn declined_drop_leaves_file_alone() {
        let flow = DeleteFlow::new(ScriptedPrompter::answering(false), RecordingTrash::default());
        let file = tempfile::NamedTempFile::new().unwrap();

        let outcome = flow.handle(file.path());

        assert!(matches!(outcome, DropOutcome::Declined(_)));
        assert_eq!(flow.prompter().confirms.get(), 1);
        assert!(flow.trash().calls.borrow().is_empty());
        assert!(flow.prompter().notices.borrow().is_empty());
        assert!(file.path().exists());
    }

    #[test]
    fn failure_is_reported_and_next_file_still_handled() {
        let trash = RecordingTrash { fail: true, ..Default::default() };
        let flow = DeleteFlow::new(ScriptedPrompter::answering(true), trash);
        let a = tempfile::NamedTempFile::new().unwrap();
        let b = tempfile::NamedTempFile::new().unwrap();

        let outcomes = flow.handle_all([a.path(), b.path()]);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| matches!(o, DropOutcome::Failed(_, msg) if msg.contains("bin is full"))));
        assert_eq!(flow.trash().calls.borrow().len(), 2);
        assert_eq!(flow.prompter().titles(), ["Error", "Error"]);
    }

    #[test]
    fn mixed_drop_processes_each_path_in_order() {
        let flow = DeleteFlow::new(ScriptedPrompter::answering(true), RecordingTrash::default());
        let dir = tempfile::tempdir().unwrap();
        let real = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        let ghost = dir.path().join("missing.bin");

        let outcomes = flow.handle_all([ghost.as_path(), real.path()]);

        assert!(matches!(outcomes[0], DropOutcome::NotFound(_)));
        assert!(matches!(outcomes[1], DropOutcome::Trashed(_)));
        assert_eq!(flow.prompter().titles(), ["File Not Found", "Deleted"]);
    }
}
