use crate::{Notice, Prompter};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native message boxes via `rfd`.  Every call blocks the calling (UI) thread.
///
/// `rfd` cannot preselect a button, so the focused button in the confirm
/// prompt is whatever the platform picks.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPrompter;

impl Prompter for DialogPrompter {
    fn confirm(&self, title: &str, body: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(body)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(answer, MessageDialogResult::Yes)
    }

    fn notify(&self, level: Notice, title: &str, body: &str) {
        let level = match level {
            Notice::Info    => MessageLevel::Info,
            Notice::Warning => MessageLevel::Warning,
            Notice::Error   => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(body)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
