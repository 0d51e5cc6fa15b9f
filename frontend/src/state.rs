use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::conversation::{self, ChatLog, PendingSend, DEMO_DELAY_MS};
use crate::models::Sender;
use crate::panel::PanelState;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Widget state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct ChatState {
    // --- Read signals (for components to subscribe to) ---
    pub panel: ReadSignal<PanelState>,
    pub log: ReadSignal<ChatLog>,
    pub input: ReadSignal<String>,

    // --- Write signals (for mutating state) ---
    pub set_panel: WriteSignal<PanelState>,
    pub set_log: WriteSignal<ChatLog>,
    pub set_input: WriteSignal<String>,

    /// Fixed at mount: `false` replies locally, `true` calls the relay.
    server_mode: bool,
}

impl ChatState {
    /// Create a new `ChatState` and provide it in the current Leptos context.
    pub fn provide(server_mode: bool) -> Self {
        let (panel, set_panel) = signal(PanelState::default());
        let (log, set_log) = signal(ChatLog::seeded());
        let (input, set_input) = signal(String::new());

        let state = Self { panel, log, input, set_panel, set_log, set_input, server_mode };
        provide_context(state);
        state
    }

    pub fn toggle(&self) {
        self.set_panel.update(|p| *p = p.toggle());
    }

    pub fn close(&self) {
        self.set_panel.update(|p| *p = p.close());
    }

    /// Sends the current input. Overlapping sends are not blocked; each reply
    /// is appended whenever its own request completes.
    pub fn send(&self) {
        let raw = self.input.get_untracked();
        if conversation::prepare_input(&raw).is_none() {
            return;
        }

        let Some(PendingSend { text, request }) = self
            .set_log
            .try_update(|log| log.begin_send(&raw, now_ms()))
            .flatten()
        else {
            return;
        };
        self.set_input.set(String::new());
        self.set_panel.update(|p| *p = p.send_started());

        let set_log = self.set_log;
        let set_panel = self.set_panel;

        if !self.server_mode {
            spawn_local(async move {
                TimeoutFuture::new(DEMO_DELAY_MS).await;
                set_log.update(|log| {
                    log.push(Sender::Bot, conversation::demo_reply(&text), now_ms());
                });
                set_panel.update(|p| *p = p.send_finished());
            });
            return;
        }

        log::debug!("Sending {} messages to the relay", request.messages.len());

        spawn_local(async move {
            let reply = conversation::server_reply(api::send_chat(&request).await);
            set_log.update(|log| {
                log.push(Sender::Bot, reply, now_ms());
            });
            set_panel.update(|p| *p = p.send_finished());
        });
    }
}
