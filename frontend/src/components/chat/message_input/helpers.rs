//! DOM helpers for the message input.
//!
//! Small wrappers around the hidden file input: opening it, resetting it, and
//! pulling the chosen file out of a `change` event.

use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Builds a unique DOM id for the hidden file input, so that several
/// composers on one page never share a picker.
pub fn file_input_id() -> String {
    format!("message-input-file-{}", Uuid::new_v4().simple())
}

/// Asks the browser to open the file-selection dialog.
pub fn open_file_picker(file_input_ref: &NodeRef) {
    if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
        input.click();
    }
}

/// Clears the file input so choosing the same file again fires `change`.
pub fn reset_file_picker(file_input_ref: &NodeRef) {
    if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// Returns the first file of a file input `change` event.
///
/// `None` when the user dismissed the dialog without choosing anything.
pub fn first_selected_file(e: &Event) -> Option<web_sys::File> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.files().and_then(|files| files.get(0))
}
