use super::{Level, Message, ResultWriter, Sink, SinkResult, Statistics};
use crate::error::{Error, Result};
use crate::model::{Keyword, KeywordKind, Suite, TestCase, Timeout};
use chrono::{DateTime, Local};
use derivative::*;
use serde_derive::Serialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    StartSuite {
        name: &'a str,
        doc: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<&'a Path>,
        metadata: &'a [(String, String)],
    },
    EndSuite {
        name: &'a str,
    },
    StartTest {
        name: &'a str,
        doc: &'a str,
        tags: &'a BTreeSet<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        timeout: Option<&'a Timeout>,
        #[serde(skip_serializing_if = "Option::is_none")]
        template: Option<&'a str>,
    },
    EndTest {
        name: &'a str,
    },
    StartKeyword {
        name: &'a str,
        kind: KeywordKind,
        args: &'a [String],
        assign: &'a [String],
        #[serde(skip_serializing_if = "Option::is_none")]
        for_loop: Option<LoopHeader<'a>>,
    },
    EndKeyword {
        name: &'a str,
    },
    Message {
        level: Level,
        text: &'a str,
        html: bool,
        timestamp: &'a DateTime<Local>,
    },
    Statistics(&'a Statistics),
    ErrorsStart,
    ErrorsEnd,
}

/// Loop definition without its steps, which arrive as keyword events of their own.
#[derive(Serialize)]
struct LoopHeader<'a> {
    vars: &'a [String],
    items: &'a [String],
    range: bool,
}

/// Streams the run as JSON lines, one record per event.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct JsonWriter<W: Write> {
    name: String,
    #[derivative(Debug = "ignore")]
    out: W,
}

impl JsonWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        match File::create(path) {
            Ok(file) => Ok(Self::new(name, BufWriter::new(file))),
            Err(err) => Err(Error::unavailable(name, err)),
        }
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, record: &Record) -> SinkResult {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Sink for JsonWriter<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_suite(&mut self, suite: &Suite) -> SinkResult {
        self.record(&Record::StartSuite {
            name: &suite.name,
            doc: &suite.doc,
            source: suite.source.as_deref(),
            metadata: &suite.metadata,
        })
    }

    fn end_suite(&mut self, suite: &Suite) -> SinkResult {
        self.record(&Record::EndSuite { name: &suite.name })
    }

    fn start_test(&mut self, test: &TestCase) -> SinkResult {
        self.record(&Record::StartTest {
            name: &test.name,
            doc: &test.doc,
            tags: &test.tags,
            timeout: test.timeout.as_ref(),
            template: test.template.as_deref(),
        })
    }

    fn end_test(&mut self, test: &TestCase) -> SinkResult {
        self.record(&Record::EndTest { name: &test.name })
    }

    fn start_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        let for_loop = keyword.for_loop_data().map(|data| LoopHeader {
            vars: &data.vars,
            items: &data.items,
            range: data.range,
        });
        self.record(&Record::StartKeyword {
            name: &keyword.name,
            kind: keyword.kind(),
            args: &keyword.args,
            assign: &keyword.assign,
            for_loop,
        })
    }

    fn end_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        self.record(&Record::EndKeyword {
            name: &keyword.name,
        })
    }

    fn close(&mut self) -> SinkResult {
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> ResultWriter for JsonWriter<W> {
    fn message(&mut self, message: &Message) -> SinkResult {
        self.record(&Record::Message {
            level: message.level,
            text: &message.text,
            html: message.html,
            timestamp: &message.timestamp,
        })
    }

    fn statistics(&mut self, statistics: &Statistics) -> SinkResult {
        self.record(&Record::Statistics(statistics))
    }

    fn start_errors(&mut self) -> SinkResult {
        self.record(&Record::ErrorsStart)
    }

    fn end_errors(&mut self) -> SinkResult {
        self.record(&Record::ErrorsEnd)
    }
}
