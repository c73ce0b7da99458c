use crate::app::App;

mod app;
mod components;

fn main() {
    // Routes `log` records from `common` to the browser console.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        gloo_console::error!(format!("console logger not installed: {}", err));
    }
    yew::Renderer::<App>::new().render();
}
