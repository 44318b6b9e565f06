use super::{
    listeners, split, DebugFile, ExecutionErrors, JsonWriter, Level, Message, ResultWriter,
    Sink, SinkError, SinkResult, StatisticsProvider, SystemLog,
};
use crate::configuration::settings::Settings;
use crate::error::{Error, Result};
use crate::model::{Keyword, Suite, TestCase};

#[derive(Debug, Clone, Copy, PartialEq)]
enum NodeType {
    Suite,
    Test,
    Keyword,
}

/// Calls `$event` on the primary writer, every listener and the debug file,
/// in that order. Failures are reported and never stop the delivery.
macro_rules! dispatch {
    ($self: ident, $event: ident, $node: expr) => {{
        let result = $self.writer.$event($node);
        $self.check_writer(stringify!($event), result);
        for listener in $self.listeners.iter_mut() {
            if let Err(err) = listener.$event($node) {
                report_failure($self.log, listener.name(), stringify!($event), &err);
            }
        }
        if let Some(debug_file) = $self.debug_file.as_mut() {
            if let Err(err) = debug_file.$event($node) {
                report_failure($self.log, debug_file.name(), stringify!($event), &err);
            }
        }
    }};
}

/// Fans engine events and messages out to the primary writer, listeners and
/// the optional debug file.
///
/// Warnings and errors are mirrored to the [`SystemLog`] and collected so they
/// can be written into the primary output when the run is closed.
pub struct Output<'a> {
    log: &'a SystemLog,
    writer: Box<dyn ResultWriter>,
    listeners: Vec<Box<dyn Sink>>,
    debug_file: Option<DebugFile>,
    errors: ExecutionErrors,
    log_level: Level,
    open: Vec<(NodeType, String)>,
    writer_failed: bool,
    closed: bool,
}

fn report_failure(log: &SystemLog, sink: &str, event: &str, err: &SinkError) {
    log.error(&format!(
        "Calling method '{}' of '{}' failed: {}",
        event, sink, err
    ));
}

impl<'a> Output<'a> {
    pub fn new(log: &'a SystemLog, writer: Box<dyn ResultWriter>, log_level: Level) -> Self {
        Self {
            log,
            writer,
            listeners: Vec::new(),
            debug_file: None,
            errors: ExecutionErrors::new(),
            log_level,
            open: Vec::new(),
            writer_failed: false,
            closed: false,
        }
    }

    /// Opens every sink named by `settings`.
    ///
    /// The primary output is mandatory. A debug file that cannot be created is
    /// reported and skipped.
    pub fn from_settings(log: &'a SystemLog, settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let listeners = listeners::resolve_all(&settings.listeners)?;
        let writer = JsonWriter::create(&settings.output)?;
        let mut output = Self::new(log, Box::new(writer), settings.log_level)
            .with_listeners(listeners);
        if let Some(path) = &settings.debug_file {
            match DebugFile::open(path, settings.debug_level) {
                Ok(debug_file) => output = output.with_debug_file(debug_file),
                Err(err) => log.error(&format!(
                    "Opening debug file '{}' failed: {}",
                    path.display(),
                    err
                )),
            }
        }
        Ok(output)
    }

    pub fn with_listeners(mut self, listeners: Vec<Box<dyn Sink>>) -> Self {
        self.listeners.extend(listeners);
        self
    }

    pub fn with_debug_file(mut self, debug_file: DebugFile) -> Self {
        self.debug_file = Some(debug_file);
        self
    }

    pub fn errors(&self) -> &ExecutionErrors {
        &self.errors
    }

    pub fn start_suite(&mut self, suite: &Suite) {
        self.open.push((NodeType::Suite, suite.name.clone()));
        self.log
            .info(&format!("Running test suite '{}'", self.suite_longname()));
        dispatch!(self, start_suite, suite);
    }

    pub fn end_suite(&mut self, suite: &Suite) {
        self.close_bracket(NodeType::Suite, &suite.name);
        dispatch!(self, end_suite, suite);
    }

    pub fn start_test(&mut self, test: &TestCase) {
        self.open.push((NodeType::Test, test.name.clone()));
        self.log.info(&format!("Running test case '{}'", test.name));
        dispatch!(self, start_test, test);
    }

    pub fn end_test(&mut self, test: &TestCase) {
        self.close_bracket(NodeType::Test, &test.name);
        dispatch!(self, end_test, test);
    }

    pub fn start_keyword(&mut self, keyword: &Keyword) {
        self.open.push((NodeType::Keyword, keyword.name.clone()));
        dispatch!(self, start_keyword, keyword);
    }

    pub fn end_keyword(&mut self, keyword: &Keyword) {
        self.close_bracket(NodeType::Keyword, &keyword.name);
        dispatch!(self, end_keyword, keyword);
    }

    pub fn write(&mut self, text: &str, level: Level, html: bool) {
        let message = Message::new(text, level, html);
        if let Some(debug_file) = self.debug_file.as_mut() {
            if level.is_logged(debug_file.level()) {
                if let Err(err) = debug_file.message(&message) {
                    report_failure(self.log, debug_file.name(), "message", &err);
                }
            }
        }
        if level >= Level::Warn {
            self.log.write(level, text);
            self.errors.append(message.clone());
        }
        if level.is_logged(self.log_level) {
            let result = self.writer.message(&message);
            self.check_writer("message", result);
        }
    }

    /// Splits `output` at its level markers and writes each part separately.
    pub fn log_output(&mut self, output: &str) {
        for message in split(output) {
            self.write(&message.text, message.level, message.html);
        }
    }

    /// Finishes the primary output and closes every sink.
    ///
    /// The primary writer gets the statistics and the execution errors before
    /// it is closed, the other sinks are closed after it. Fails with
    /// [`Error::ArtifactUnavailable`] if anything written to the primary
    /// output was lost.
    pub fn close(&mut self, statistics: &dyn StatisticsProvider) -> Result<()> {
        if self.closed {
            self.log.warn("Output is already closed");
            return Ok(());
        }
        self.closed = true;
        if !self.open.is_empty() {
            self.log.warn(&format!(
                "Closing output with {} unfinished node(s)",
                self.open.len()
            ));
        }
        let result = self.writer.statistics(&statistics.statistics());
        self.check_writer("statistics", result);
        let result = self.errors.serialize(&mut *self.writer);
        self.check_writer("errors", result);
        self.close_sinks();
        if self.writer_failed {
            Err(Error::unavailable(
                self.writer.name(),
                "writing the output failed",
            ))
        } else {
            Ok(())
        }
    }

    fn close_sinks(&mut self) {
        let result = self.writer.close();
        self.check_writer("close", result);
        self.log.output_file("Output", self.writer.name());
        for listener in self.listeners.iter_mut() {
            if let Err(err) = listener.close() {
                report_failure(self.log, listener.name(), "close", &err);
            }
        }
        if let Some(debug_file) = self.debug_file.as_mut() {
            if let Err(err) = debug_file.close() {
                report_failure(self.log, debug_file.name(), "close", &err);
            }
            self.log.output_file("Debug", debug_file.path());
        }
    }

    fn check_writer(&mut self, event: &str, result: SinkResult) {
        if let Err(err) = result {
            self.writer_failed = true;
            report_failure(self.log, self.writer.name(), event, &err);
        }
    }

    fn close_bracket(&mut self, node_type: NodeType, name: &str) {
        match self.open.pop() {
            Some((open_type, ref open_name)) if open_type == node_type && open_name == name => {}
            Some((open_type, open_name)) => self.log.error(&format!(
                "Ending {:?} '{}' while {:?} '{}' is running",
                node_type, name, open_type, open_name
            )),
            None => self.log.error(&format!(
                "Ending {:?} '{}' that was never started",
                node_type, name
            )),
        }
    }

    fn suite_longname(&self) -> String {
        self.open
            .iter()
            .filter(|(node_type, _)| *node_type == NodeType::Suite)
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl<'a> Drop for Output<'a> {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            self.log
                .warn("Output dropped before it was closed, statistics are missing");
            self.close_sinks();
        }
    }
}
