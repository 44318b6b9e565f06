//! Sinks and writers shared by the unit tests.

use super::{Message, ResultWriter, Sink, SinkError, SinkResult, Statistics};
use crate::model::{Keyword, Suite, TestCase};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Records every call as a line of text. Clones share the same record so a
/// test can keep one handle while the multiplexer owns the other.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    name: String,
    events: Rc<RefCell<Vec<String>>>,
    fail_on: Option<String>,
}

impl RecordingSink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            events: Rc::new(RefCell::new(Vec::new())),
            fail_on: None,
        }
    }

    /// Makes every call whose record starts with `prefix` fail after being recorded.
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.fail_on = Some(prefix.to_owned());
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&mut self, event: String) -> SinkResult {
        let fail = self
            .fail_on
            .as_ref()
            .map(|prefix| event.starts_with(prefix.as_str()))
            .unwrap_or(false);
        self.events.borrow_mut().push(event.clone());
        if fail {
            Err(SinkError::Failed(format!("{} refused {}", self.name, event)))
        } else {
            Ok(())
        }
    }
}

impl Sink for RecordingSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_suite(&mut self, suite: &Suite) -> SinkResult {
        self.record(format!("start_suite {}", suite.name))
    }

    fn end_suite(&mut self, suite: &Suite) -> SinkResult {
        self.record(format!("end_suite {}", suite.name))
    }

    fn start_test(&mut self, test: &TestCase) -> SinkResult {
        self.record(format!("start_test {}", test.name))
    }

    fn end_test(&mut self, test: &TestCase) -> SinkResult {
        self.record(format!("end_test {}", test.name))
    }

    fn start_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        self.record(format!("start_keyword {}", keyword.name))
    }

    fn end_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        self.record(format!("end_keyword {}", keyword.name))
    }

    fn close(&mut self) -> SinkResult {
        self.record("close".to_owned())
    }
}

impl ResultWriter for RecordingSink {
    fn message(&mut self, message: &Message) -> SinkResult {
        self.record(format!("message {} {}", message.level, message.text))
    }

    fn statistics(&mut self, statistics: &Statistics) -> SinkResult {
        self.record(format!("statistics {}", statistics.total.len()))
    }

    fn start_errors(&mut self) -> SinkResult {
        self.record("start_errors".to_owned())
    }

    fn end_errors(&mut self) -> SinkResult {
        self.record("end_errors".to_owned())
    }
}

/// In-memory `Write` whose contents stay readable after the writer is moved.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `Write` that rejects everything.
#[derive(Debug, Default)]
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}
