use super::{Message, Statistics};
use crate::model::{Keyword, Suite, TestCase};
use std::io;
use thiserror::Error;

pub type SinkResult = Result<(), SinkError>;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Failed(String),
}

/// A consumer of lifecycle events.
///
/// Every callback defaults to doing nothing so sinks only implement the
/// events they care about.
pub trait Sink {
    fn name(&self) -> &str;

    fn start_suite(&mut self, _suite: &Suite) -> SinkResult {
        Ok(())
    }

    fn end_suite(&mut self, _suite: &Suite) -> SinkResult {
        Ok(())
    }

    fn start_test(&mut self, _test: &TestCase) -> SinkResult {
        Ok(())
    }

    fn end_test(&mut self, _test: &TestCase) -> SinkResult {
        Ok(())
    }

    fn start_keyword(&mut self, _keyword: &Keyword) -> SinkResult {
        Ok(())
    }

    fn end_keyword(&mut self, _keyword: &Keyword) -> SinkResult {
        Ok(())
    }

    fn close(&mut self) -> SinkResult {
        Ok(())
    }
}

/// The primary, streaming output. It receives messages, the statistics and
/// the bracketed execution errors before it is closed.
pub trait ResultWriter: Sink {
    fn message(&mut self, message: &Message) -> SinkResult;
    fn statistics(&mut self, statistics: &Statistics) -> SinkResult;
    fn start_errors(&mut self) -> SinkResult;
    fn end_errors(&mut self) -> SinkResult;
}
