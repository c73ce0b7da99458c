use crate::components::chat::message_input::MessageInputComponent;
use yew::{html, Component, Context, Html};

pub enum Msg {
    Sent(String),
}

/// Demo host: keeps every text the composer hands to `on_send`.
pub struct App {
    sent: Vec<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { sent: Vec::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Sent(text) => {
                gloo_console::log!(format!("sent: {}", text));
                self.sent.push(text);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chat">
                <ul class="chat-messages">
                    { for self.sent.iter().map(|text| html! { <li>{ text }</li> }) }
                </ul>
                <MessageInputComponent on_send={ctx.link().callback(Msg::Sent)} />
            </div>
        }
    }
}
