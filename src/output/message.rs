use super::Level;
use chrono::{DateTime, Local};
use serde_derive::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub text: String,
    pub level: Level,
    /// Text is already HTML and must not be escaped again.
    pub html: bool,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, level: Level, html: bool) -> Self {
        Self {
            text: text.into(),
            level,
            html,
            timestamp: Local::now(),
        }
    }
}
