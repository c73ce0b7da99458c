//! Update function for the chat message input component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Keystrokes replace the draft text.
//! - Submitting forwards the trimmed draft to `on_send` and clears it; blank
//!   drafts are ignored.
//! - The attachment control opens the file picker while idle and drops the
//!   preview while an image is staged.
//! - A chosen file is read asynchronously and turned into a data URI. Reads
//!   that finish after being cancelled or replaced are discarded.

use common::model::attachment::AttachmentAction;
use common::model::data_uri::DataUri;
use gloo_file::futures::read_as_bytes;
use yew::prelude::*;

use super::helpers::{open_file_picker, reset_file_picker};
use super::messages::Msg;
use super::state::MessageInputComponent;

/// Central update function for the component.
pub fn update(
    component: &mut MessageInputComponent,
    ctx: &Context<MessageInputComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateText(text) => {
            component.composer.input(text);
            true
        }
        Msg::Submit => match component.composer.submit() {
            Some(text) => {
                ctx.props().on_send.emit(text);
                true
            }
            None => false,
        },
        Msg::ToggleAttachment => match component.composer.toggle_attachment() {
            AttachmentAction::OpenPicker => {
                open_file_picker(&component.file_input_ref);
                false
            }
            AttachmentAction::Cancelled => {
                reset_file_picker(&component.file_input_ref);
                true
            }
        },
        Msg::FileSelected(file) => {
            let ticket = component.composer.file_chosen();
            let file = gloo_file::File::from(file);
            let mime = DataUri::resolve_mime(&file.raw_mime_type(), &file.name());

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::ReadCompleted {
                        ticket,
                        preview: DataUri::encode(&mime, &bytes),
                    }),
                    Err(err) => link.send_message(Msg::ReadFailed {
                        ticket,
                        reason: err.to_string(),
                    }),
                }
            });
            true
        }
        Msg::ReadCompleted { ticket, preview } => {
            match component.composer.read_completed(ticket, preview) {
                Ok(()) => true,
                Err(err) => {
                    gloo_console::debug!(err.to_string());
                    false
                }
            }
        }
        Msg::ReadFailed { ticket, reason } => {
            gloo_console::error!(format!("could not read image {}: {}", ticket, reason));
            component.composer.read_failed(ticket);
            true
        }
    }
}
