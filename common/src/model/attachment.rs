//! Single-image attachment toggle.
//!
//! The attachment control has two observable phases. While `Idle` it asks the
//! host to open a file picker; while `Staged` the same control cancels the
//! preview. Reading the chosen file is asynchronous, so every read is tagged
//! with a [`ReadTicket`]. Only the most recently issued ticket may stage a
//! preview: a completion for a cancelled or superseded read is rejected.

use std::fmt;

use log::debug;

use crate::error::AttachmentError;
use crate::model::data_uri::DataUri;

/// Identifies one in-flight file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadTicket(u64);

impl fmt::Display for ReadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentPhase {
    Idle,
    Staged,
}

/// What the host must do after the attachment control was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentAction {
    /// Open the file-selection surface.
    OpenPicker,
    /// The preview was dropped; reset the file-selection surface so the same
    /// file can be picked again.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct Attachment {
    preview: Option<DataUri>,
    pending: Option<ReadTicket>,
    issued: u64,
}

impl Attachment {
    pub fn phase(&self) -> AttachmentPhase {
        if self.preview.is_some() {
            AttachmentPhase::Staged
        } else {
            AttachmentPhase::Idle
        }
    }

    pub fn preview(&self) -> Option<&DataUri> {
        self.preview.as_ref()
    }

    /// True while a read has been issued and not yet resolved.
    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    /// Handles a click on the attachment control.
    pub fn activate(&mut self) -> AttachmentAction {
        match self.phase() {
            AttachmentPhase::Idle => AttachmentAction::OpenPicker,
            AttachmentPhase::Staged => {
                self.cancel();
                AttachmentAction::Cancelled
            }
        }
    }

    /// Registers a file chosen in the picker and returns the ticket its read
    /// must complete with. Any earlier pending read is superseded.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.issued += 1;
        let ticket = ReadTicket(self.issued);
        if let Some(previous) = self.pending.replace(ticket) {
            debug!("read {} superseded by {}", previous, ticket);
        }
        ticket
    }

    /// Stages `preview` if `ticket` is still the pending read.
    ///
    /// A staged preview from an earlier read is overwritten.
    pub fn complete_read(
        &mut self,
        ticket: ReadTicket,
        preview: DataUri,
    ) -> Result<(), AttachmentError> {
        if self.pending != Some(ticket) {
            return Err(AttachmentError::StaleRead { ticket });
        }
        self.pending = None;
        self.preview = Some(preview);
        debug!("read {} staged", ticket);
        Ok(())
    }

    /// Forgets a read that failed. The phase does not change.
    pub fn fail_read(&mut self, ticket: ReadTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
    }

    /// Drops the preview and invalidates any pending read.
    ///
    /// Calling this while already idle is harmless.
    pub fn cancel(&mut self) {
        self.preview = None;
        if let Some(ticket) = self.pending.take() {
            debug!("read {} cancelled", ticket);
        }
    }
}
