mod api;
mod components;
mod conversation;
mod models;
mod panel;
mod reply;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat_widget::ChatWidget;

/// Build-time switch: `CHAT_SERVER_MODE=1` makes the widget call the relay.
fn server_mode() -> bool {
    matches!(option_env!("CHAT_SERVER_MODE"), Some("1" | "true"))
}

/// Root application component.
#[component]
fn App() -> impl IntoView {
    view! {
        <ChatWidget server_mode=server_mode() />
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
