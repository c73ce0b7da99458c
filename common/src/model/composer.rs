//! Event-dispatch facade over the draft and the attachment.
//!
//! One method per discrete input event. Each runs to completion; the only
//! suspended work (reading a file) happens outside, between
//! [`Composer::file_chosen`] and [`Composer::read_completed`].
//!
//! Sending and attaching are independent: a submission carries text only and
//! never clears a staged preview.

use crate::error::AttachmentError;
use crate::model::attachment::{Attachment, AttachmentAction, AttachmentPhase, ReadTicket};
use crate::model::data_uri::DataUri;
use crate::model::draft::Draft;

#[derive(Debug, Default)]
pub struct Composer {
    draft: Draft,
    attachment: Attachment,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        self.draft.text()
    }

    pub fn preview(&self) -> Option<&DataUri> {
        self.attachment.preview()
    }

    pub fn phase(&self) -> AttachmentPhase {
        self.attachment.phase()
    }

    pub fn is_reading(&self) -> bool {
        self.attachment.is_reading()
    }

    /// Keystroke in the text field.
    pub fn input(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
    }

    /// Form submission. `Some(text)` must be handed to the send callback.
    pub fn submit(&mut self) -> Option<String> {
        self.draft.submit()
    }

    /// Click on the attachment control.
    pub fn toggle_attachment(&mut self) -> AttachmentAction {
        self.attachment.activate()
    }

    /// The picker produced one file; its bytes are about to be read.
    pub fn file_chosen(&mut self) -> ReadTicket {
        self.attachment.begin_read()
    }

    pub fn read_completed(
        &mut self,
        ticket: ReadTicket,
        preview: DataUri,
    ) -> Result<(), AttachmentError> {
        self.attachment.complete_read(ticket, preview)
    }

    pub fn read_failed(&mut self, ticket: ReadTicket) {
        self.attachment.fail_read(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submit_leaves_staged_preview() {
        let mut composer = Composer::new();
        let ticket = composer.file_chosen();
        let preview = DataUri::encode("image/png", b"img");
        composer.read_completed(ticket, preview.clone()).unwrap();

        composer.input("caption ");
        assert_eq!(composer.submit(), Some("caption".to_string()));
        assert_eq!(composer.text(), "");
        assert_eq!(composer.phase(), AttachmentPhase::Staged);
        assert_eq!(composer.preview(), Some(&preview));
    }

    #[test]
    fn test_typing_does_not_touch_attachment() {
        let mut composer = Composer::new();
        composer.input("a");
        composer.input("ab");
        assert_eq!(composer.text(), "ab");
        assert_eq!(composer.phase(), AttachmentPhase::Idle);
        assert!(!composer.is_reading());
    }

    #[test]
    fn test_toggle_cycle() {
        let mut composer = Composer::new();
        assert_eq!(composer.toggle_attachment(), AttachmentAction::OpenPicker);
        let ticket = composer.file_chosen();
        composer
            .read_completed(ticket, DataUri::encode("image/png", b"1"))
            .unwrap();
        assert_eq!(composer.toggle_attachment(), AttachmentAction::Cancelled);
        assert_eq!(composer.toggle_attachment(), AttachmentAction::OpenPicker);
    }
}
