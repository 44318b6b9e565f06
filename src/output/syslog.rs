use super::Level;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub level: Level,
    pub text: String,
}

/// Internal diagnostics of a single run.
///
/// Created when the run starts and handed to every component by reference.
/// Entries are recorded until [`SystemLog::close`] and always mirrored to the
/// `log` facade.
#[derive(Debug, Default)]
pub struct SystemLog {
    entries: RefCell<Vec<Entry>>,
    closed: Cell<bool>,
}

impl SystemLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, level: Level, text: &str) {
        log!(target: "syslog", log::Level::from(level), "{}", text);
        if !self.closed.get() {
            self.entries.borrow_mut().push(Entry {
                level,
                text: text.to_owned(),
            });
        }
    }

    #[inline]
    pub fn info(&self, text: &str) {
        self.write(Level::Info, text)
    }

    #[inline]
    pub fn warn(&self, text: &str) {
        self.write(Level::Warn, text)
    }

    #[inline]
    pub fn error(&self, text: &str) {
        self.write(Level::Error, text)
    }

    pub fn output_file(&self, kind: &str, path: &str) {
        self.info(&format!("{}: {}", kind, path))
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    pub fn close(&self) {
        self.closed.set(true);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}
