//! View rendering for the chat message input.
//!
//! A single `<form>` row: the text field, the attachment toggle and the send
//! button. The hidden file input sits next to the toggle rather than inside
//! it, so the synthetic click used to open the picker never bubbles back into
//! the toggle's own handler.

use common::model::attachment::AttachmentPhase;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::first_selected_file;
use super::messages::Msg;
use super::state::MessageInputComponent;

/// Main view function for the message input component.
pub fn view(component: &MessageInputComponent, ctx: &Context<MessageInputComponent>) -> Html {
    let link = ctx.link();
    let config = &ctx.props().config;

    html! {
        <form
            class="message-input"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <input
                type="text"
                class="message-input-text"
                placeholder={config.placeholder.clone()}
                autocomplete="off"
                value={component.composer.text().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateText(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <input
                type="file"
                id={component.file_input_id.clone()}
                ref={component.file_input_ref.clone()}
                accept={config.accept.clone()}
                style="display:none;"
                onchange={link.batch_callback(|e: Event| first_selected_file(&e).map(Msg::FileSelected))}
            />
            { build_attachment_button(component, link, config.attachment_label(component.composer.phase())) }
            <button type="submit" class="icon-btn" aria-label={config.send_label.clone()}>
                <i class="material-icons">{"send"}</i>
            </button>
        </form>
    }
}

/// Builds the attachment toggle.
///
/// Idle: an image icon. Staged: the preview fills the button and a close
/// overlay appears on hover.
fn build_attachment_button(
    component: &MessageInputComponent,
    link: &Scope<MessageInputComponent>,
    label: &str,
) -> Html {
    let staged = component.composer.phase() == AttachmentPhase::Staged;
    let class = classes!(
        "icon-btn",
        "attach-btn",
        staged.then_some("staged"),
        component.composer.is_reading().then_some("reading"),
    );

    html! {
        <button
            type="button"
            class={class}
            aria-label={label.to_string()}
            onclick={link.callback(|_| Msg::ToggleAttachment)}
        >
            {
                match component.composer.preview() {
                    Some(preview) => html! {
                        <>
                            <img class="attach-preview" src={preview.to_string()} alt="Preview" />
                            <div class="attach-cancel">
                                <i class="material-icons">{"close"}</i>
                            </div>
                        </>
                    },
                    None => html! { <i class="material-icons">{"image"}</i> },
                }
            }
        </button>
    }
}
