use crate::error::Result;
use crate::model::{Keyword, Suite, TestCase};
use crate::output::{Level, Output, Statistics};
use serde_derive::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One engine callback as recorded in an event script.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    StartSuite(Suite),
    EndSuite(Suite),
    StartTest(TestCase),
    EndTest(TestCase),
    StartKeyword(Keyword),
    EndKeyword(Keyword),
    Write {
        message: String,
        #[serde(default)]
        level: Level,
        #[serde(default)]
        html: bool,
    },
    LogOutput(String),
}

impl Event {
    pub fn dispatch(&self, output: &mut Output) {
        match self {
            Event::StartSuite(suite) => output.start_suite(suite),
            Event::EndSuite(suite) => output.end_suite(suite),
            Event::StartTest(test) => output.start_test(test),
            Event::EndTest(test) => output.end_test(test),
            Event::StartKeyword(keyword) => output.start_keyword(keyword),
            Event::EndKeyword(keyword) => output.end_keyword(keyword),
            Event::Write {
                message,
                level,
                html,
            } => output.write(message, *level, *html),
            Event::LogOutput(text) => output.log_output(text),
        }
    }
}

/// Recorded engine callbacks together with the statistics of that run.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventScript {
    pub events: Vec<Event>,
    pub statistics: Statistics,
}

impl EventScript {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn play(&self, output: &mut Output) {
        for event in &self.events {
            event.dispatch(output);
        }
    }
}
