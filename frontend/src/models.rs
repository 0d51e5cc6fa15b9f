use serde::Serialize;

/// Who authored a message shown in the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Role name in chat-completions format. Anything not from the user is the assistant.
    pub fn wire_role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "assistant",
        }
    }
}

/// A message in the widget's in-memory conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub from: Sender,
    pub text: String,
}

/// A `{role, content}` pair sent to the relay.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self { role: role.to_string(), content: content.into() }
    }
}

impl From<&Message> for WireMessage {
    fn from(m: &Message) -> Self {
        Self::new(m.from.wire_role(), m.text.clone())
    }
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct RelayRequest {
    pub messages: Vec<WireMessage>,
}
