//! The composer row at the bottom of a chat: text field, image toggle, send.
//!
//! Drop it into a parent with an `on_send` callback; the callback only ever
//! sees trimmed, non-blank text. Everything stateful is delegated to the
//! `Composer` in `common`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MessageInputProps;
pub use state::MessageInputComponent;

impl Component for MessageInputComponent {
    type Message = Msg;
    type Properties = MessageInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MessageInputComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
