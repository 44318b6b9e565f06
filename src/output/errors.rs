use super::{Message, ResultWriter, SinkResult};

/// Warnings and errors of the whole run, replayed into the output at the end.
#[derive(Debug, Default)]
pub struct ExecutionErrors {
    messages: Vec<Message>,
}

impl ExecutionErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Attempts every call even after a failure and returns the first error.
    pub fn serialize(&self, writer: &mut dyn ResultWriter) -> SinkResult {
        let mut result = writer.start_errors();
        for message in &self.messages {
            result = result.and(writer.message(message));
        }
        result.and(writer.end_errors())
    }
}
