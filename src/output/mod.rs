//! Event multiplexing: lifecycle events and log messages fanned out to sinks.

mod debugfile;
mod errors;
mod jsonwriter;
mod level;
pub mod listeners;
mod message;
mod output;
mod sink;
mod splitter;
mod statistics;
mod syslog;

pub use debugfile::DebugFile;
pub use errors::ExecutionErrors;
pub use jsonwriter::JsonWriter;
pub use level::Level;
pub use message::Message;
pub use output::Output;
pub use sink::{ResultWriter, Sink, SinkError, SinkResult};
pub use splitter::{split, SplitMessage};
pub use statistics::{Stat, Statistics, StatisticsProvider};
pub use syslog::{Entry, SystemLog};

#[cfg(test)]
pub(crate) mod testing;
