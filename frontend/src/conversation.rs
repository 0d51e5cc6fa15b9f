use serde_json::Value;

use crate::models::{Message, RelayRequest, Sender, WireMessage};
use crate::reply::extract_reply;

pub const GREETING: &str = "Hi — I can help with questions about my projects or availability.";
pub const SYSTEM_PROMPT: &str = "You are a friendly portfolio assistant for Jonathan.";
pub const APOLOGY: &str = "Sorry, something went wrong.";
pub const DEMO_DELAY_MS: u32 = 700;

/// The widget's conversation, in insertion order. Lives for one page load.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<Message>,
    next_seq: u64,
}

impl ChatLog {
    /// A log holding only the canned greeting.
    pub fn seeded() -> Self {
        Self {
            messages: vec![Message {
                id: "1".to_string(),
                from: Sender::Bot,
                text: GREETING.to_string(),
            }],
            next_seq: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends a message stamped with `now_ms`. The sequence suffix keeps ids
    /// unique when two messages land in the same millisecond.
    pub fn push(&mut self, from: Sender, text: impl Into<String>, now_ms: u64) -> &Message {
        self.next_seq += 1;
        self.messages.push(Message {
            id: format!("{now_ms}-{}", self.next_seq),
            from,
            text: text.into(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Synchronous half of a send: appends the trimmed user message and
    /// returns it with the relay request built from the history before the
    /// append. `None` (and no change) for blank input.
    pub fn begin_send(&mut self, raw: &str, now_ms: u64) -> Option<PendingSend> {
        let text = prepare_input(raw)?;
        let request = relay_request(&self.messages, &text);
        self.push(Sender::User, text.clone(), now_ms);
        Some(PendingSend { text, request })
    }
}

/// A send whose reply hasn't arrived yet.
#[derive(Clone, Debug)]
pub struct PendingSend {
    pub text: String,
    pub request: RelayRequest,
}

/// Bot text for a finished relay call: the extracted reply, or the apology
/// when the request or JSON parsing failed.
pub fn server_reply(result: Result<Value, String>) -> String {
    match result {
        Ok(json) => extract_reply(&json),
        Err(e) => {
            log::error!("Chat relay failed: {e}");
            APOLOGY.to_string()
        }
    }
}

/// Trimmed input, or `None` when there is nothing to send.
pub fn prepare_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The canned reply used in demo mode.
pub fn demo_reply(text: &str) -> String {
    format!("Thanks — I got: \"{text}\". I'm open to internships & collaborations.")
}

/// System prompt, then `history` (taken before the new message was appended),
/// then the new user message.
pub fn relay_request(history: &[Message], text: &str) -> RelayRequest {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(WireMessage::new("system", SYSTEM_PROMPT));
    messages.extend(history.iter().map(WireMessage::from));
    messages.push(WireMessage::new(Sender::User.wire_role(), text));
    RelayRequest { messages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_log_holds_the_greeting() {
        let log = ChatLog::seeded();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].from, Sender::Bot);
        assert_eq!(log.messages()[0].text, GREETING);
    }

    #[test]
    fn blank_input_is_not_sendable() {
        assert_eq!(prepare_input(""), None);
        assert_eq!(prepare_input("   \t\n"), None);
        assert_eq!(prepare_input("  hello "), Some("hello".to_string()));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut log = ChatLog::seeded();
        let a = log.push(Sender::User, "a", 1_000).id.clone();
        let b = log.push(Sender::Bot, "b", 1_000).id.clone();
        assert_ne!(a, b);
        assert!(a.starts_with("1000-"));
    }

    #[test]
    fn demo_reply_contains_the_text() {
        let reply = demo_reply("what do you build?");
        assert!(reply.contains("what do you build?"));
        assert_eq!(
            reply,
            "Thanks — I got: \"what do you build?\". I'm open to internships & collaborations."
        );
    }

    #[test]
    fn begin_send_ignores_blank_input() {
        let mut log = ChatLog::seeded();
        assert!(log.begin_send("   ", 10).is_none());
        assert!(log.begin_send("", 10).is_none());
        assert_eq!(log, ChatLog::seeded());
    }

    #[test]
    fn begin_send_snapshots_history_before_appending() {
        let mut log = ChatLog::seeded();
        log.push(Sender::User, "first", 1);
        log.push(Sender::Bot, "answer", 2);
        let prior = log.messages().len();

        let pending = log.begin_send("  second ", 3).unwrap();

        assert_eq!(pending.text, "second");
        assert_eq!(log.messages().len(), prior + 1);
        assert_eq!(log.messages()[prior].from, Sender::User);
        assert_eq!(log.messages()[prior].text, "second");

        let wire = &pending.request.messages;
        assert_eq!(wire.len(), prior + 2);
        assert_eq!(wire[0], WireMessage::new("system", SYSTEM_PROMPT));
        assert_eq!(wire.iter().filter(|m| m.content == "second").count(), 1);
        assert_eq!(wire[prior + 1], WireMessage::new("user", "second"));
    }

    #[test]
    fn server_reply_uses_extraction_or_apology() {
        let ok = serde_json::json!({"choices": [{"message": {"content": "X"}}]});
        assert_eq!(server_reply(Ok(ok)), "X");
        assert_eq!(server_reply(Ok(serde_json::json!({"message": "Y"}))), "Y");
        assert_eq!(server_reply(Ok(serde_json::json!({}))), crate::reply::NO_REPLY);
        assert_eq!(server_reply(Err("Network error: offline".into())), APOLOGY);
    }

    #[test]
    fn loading_clears_on_every_reply_path() {
        use crate::panel::PanelState;

        let replies = [
            server_reply(Ok(serde_json::json!({"message": "Y"}))),
            server_reply(Err("Parse error: eof".into())),
            demo_reply("hi"),
        ];
        for reply in replies {
            let mut log = ChatLog::seeded();
            let mut panel = PanelState::OpenIdle;

            log.begin_send("hi", 10).unwrap();
            panel = panel.send_started();
            assert!(panel.is_loading());

            log.push(Sender::Bot, reply, 20);
            panel = panel.send_finished();
            assert!(!panel.is_loading());
            assert_eq!(log.messages().len(), 3);
            assert_eq!(log.messages()[2].from, Sender::Bot);
        }
    }

    #[test]
    fn demo_exchange_appends_user_then_reply() {
        let mut log = ChatLog::seeded();
        let pending = log.begin_send("  are you available?  ", 10).unwrap();
        let text = pending.text;
        log.push(Sender::Bot, demo_reply(&text), 710);

        let messages = log.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].from, Sender::User);
        assert_eq!(messages[1].text, "are you available?");
        assert_eq!(messages[2].from, Sender::Bot);
        assert!(messages[2].text.contains("are you available?"));
    }

    #[test]
    fn relay_request_has_history_plus_two() {
        let mut log = ChatLog::seeded();
        log.push(Sender::User, "first", 1);
        log.push(Sender::Bot, "answer", 2);

        let request = relay_request(log.messages(), "second");

        assert_eq!(request.messages.len(), log.messages().len() + 2);
        assert_eq!(request.messages[0], WireMessage::new("system", SYSTEM_PROMPT));
        assert_eq!(request.messages[1], WireMessage::new("assistant", GREETING));
        assert_eq!(request.messages[2], WireMessage::new("user", "first"));
        assert_eq!(request.messages[3], WireMessage::new("assistant", "answer"));
        assert_eq!(request.messages[4], WireMessage::new("user", "second"));
    }

    #[test]
    fn relay_request_serializes_as_messages_array() {
        let request = relay_request(&[], "hi");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": "hi"},
                ]
            })
        );
    }
}
