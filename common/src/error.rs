use thiserror::Error;

use crate::model::attachment::ReadTicket;

/// Errors raised by attachment transitions.
///
/// None of these reach the user. The frontend logs them to the console and
/// leaves the composer state as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    /// A read finished after it was cancelled or superseded by a newer one.
    #[error("discarding read {ticket}: no longer the pending read")]
    StaleRead { ticket: ReadTicket },
}
