use crate::model::User;

pub mod add;
pub mod find;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Data an operation hands back for the caller to emit as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Collection(Vec<User>),
    Record(User),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub payload: Option<Payload>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}
