//! Listener sinks selectable from the configuration.

use super::{JsonWriter, Sink, SinkResult};
use crate::error::{Error, Result};
use crate::model::{Keyword, Suite, TestCase};
use std::path::Path;

/// Traces lifecycle events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogListener;

impl Sink for LogListener {
    fn name(&self) -> &str {
        "log"
    }

    fn start_suite(&mut self, suite: &Suite) -> SinkResult {
        debug!("Suite '{}' started, {} tests", suite.name, suite.test_count());
        Ok(())
    }

    fn end_suite(&mut self, suite: &Suite) -> SinkResult {
        debug!("Suite '{}' ended", suite.name);
        Ok(())
    }

    fn start_test(&mut self, test: &TestCase) -> SinkResult {
        debug!("Test '{}' started", test.name);
        Ok(())
    }

    fn end_test(&mut self, test: &TestCase) -> SinkResult {
        debug!("Test '{}' ended", test.name);
        Ok(())
    }

    fn start_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        trace!("{} '{}' started {:?}", keyword.kind().label(), keyword.name, keyword.args);
        Ok(())
    }

    fn end_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        trace!("{} '{}' ended", keyword.kind().label(), keyword.name);
        Ok(())
    }
}

/// Resolves a listener spec once, when the run is configured.
///
/// Known specs are `log` and `json:<path>`.
pub fn resolve(spec: &str) -> Result<Box<dyn Sink>> {
    let mut parts = spec.splitn(2, ':');
    match (parts.next().map(str::trim), parts.next()) {
        (Some("log"), None) => Ok(Box::new(LogListener)),
        (Some("json"), Some(path)) if !path.trim().is_empty() => {
            Ok(Box::new(JsonWriter::create(Path::new(path.trim()))?))
        }
        _ => Err(Error::UnknownListener(spec.to_owned())),
    }
}

pub fn resolve_all(specs: &[String]) -> Result<Vec<Box<dyn Sink>>> {
    specs.iter().map(|spec| resolve(spec)).collect()
}
