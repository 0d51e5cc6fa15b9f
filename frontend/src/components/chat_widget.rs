use leptos::ev;
use leptos::prelude::*;

use crate::models::{Message, Sender};
use crate::state::ChatState;

/// Floating chat launcher plus its panel.
///
/// `server_mode` is read once at mount; by default the widget answers with a
/// canned local reply and never touches the network.
#[component]
pub fn ChatWidget(#[prop(optional)] server_mode: bool) -> impl IntoView {
    let state = ChatState::provide(server_mode);

    view! {
        <div class="chat-launcher">
            <button class="chat-toggle" on:click=move |_| state.toggle()>
                <span class="chat-toggle-icon">"💬"</span>
                <span class="chat-toggle-label">"Chat"</span>
            </button>
        </div>

        <Show when=move || state.panel.get().is_open()>
            <ChatPanel />
        </Show>
    }
}

#[component]
fn ChatPanel() -> impl IntoView {
    let state = expect_context::<ChatState>();

    view! {
        <div class="chat-panel">
            <div class="chat-panel-header">
                <strong>"Chat with Jonathan"</strong>
                <button class="chat-close" on:click=move |_| state.close()>
                    "Close"
                </button>
            </div>

            <div class="chat-messages">
                <For
                    each=move || state.log.get().messages().to_vec()
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
                <Show when=move || state.panel.get().is_loading()>
                    <div class="chat-thinking">"Thinking…"</div>
                </Show>
            </div>

            <ChatInput />

            <p class="chat-hint">"Demo mode by default. Enable serverMode to call your API."</p>
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let (row_class, bubble_class) = match message.from {
        Sender::User => ("chat-row user", "chat-bubble user"),
        Sender::Bot => ("chat-row bot", "chat-bubble bot"),
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>{message.text}</div>
        </div>
    }
}

/// Text input; Enter or the Send button submits. Not disabled while loading.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<ChatState>();

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.send();
        }
    };

    view! {
        <div class="chat-input-row">
            <input
                type="text"
                placeholder="Ask about projects or availability…"
                prop:value=state.input
                on:input=move |ev| {
                    state.set_input.set(event_target_value(&ev));
                }
                on:keydown=on_keydown
            />
            <button class="chat-send" on:click=move |_| state.send()>
                "Send"
            </button>
        </div>
    }
}
