//! Component state for the chat message input.
//!
//! The draft text and the staged image live in a `Composer` from the `common`
//! crate; this struct adds only what the browser needs on top of it, namely
//! the handle to the hidden file input.

use common::model::composer::Composer;
use yew::prelude::*;

use super::helpers::file_input_id;

/// Main state container for the `MessageInputComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct MessageInputComponent {
    /// Draft text and attachment state machine.
    pub composer: Composer,

    /// Reference to the hidden `<input type="file">` used for image selection.
    pub file_input_ref: NodeRef,

    /// DOM id of the hidden file input, unique per component instance.
    pub file_input_id: String,
}

impl MessageInputComponent {
    /// Both fields start empty: no draft text, nothing staged.
    pub fn new() -> Self {
        Self {
            composer: Composer::new(),
            file_input_ref: NodeRef::default(),
            file_input_id: file_input_id(),
        }
    }
}
