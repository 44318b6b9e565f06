use super::{Level, Message, Sink, SinkResult};
use crate::model::{Keyword, Suite, TestCase};
use chrono::{DateTime, Local};
use derivative::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M:%S%.3f";
const SEPARATOR_WIDTH: usize = 78;

/// Plain-text trace of the run meant for humans following a run live.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct DebugFile {
    path: String,
    level: Level,
    indent: usize,
    #[derivative(Debug = "ignore")]
    out: Box<dyn Write>,
}

impl DebugFile {
    pub fn open(path: &Path, level: Level) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(
            path.display().to_string(),
            Box::new(BufWriter::new(file)),
            level,
        ))
    }

    pub fn new(path: impl Into<String>, out: Box<dyn Write>, level: Level) -> Self {
        Self {
            path: path.into(),
            level,
            indent: 0,
            out,
        }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&mut self, message: &Message) -> SinkResult {
        self.line(&message.timestamp, message.level, &message.text)
    }

    fn line(&mut self, timestamp: &DateTime<Local>, level: Level, text: &str) -> SinkResult {
        writeln!(
            self.out,
            "{} - {} - {}",
            timestamp.format(TIMESTAMP_FORMAT),
            level,
            text
        )?;
        Ok(())
    }

    fn separator(&mut self, symbol: char) -> SinkResult {
        let line: String = std::iter::repeat(symbol).take(SEPARATOR_WIDTH).collect();
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn start(&mut self, kind: &str, name: &str, extra: &str) -> SinkResult {
        let text = format!("+{} START {}: {}{}", "-".repeat(self.indent), kind, name, extra);
        self.indent += 1;
        self.line(&Local::now(), Level::Info, &text)
    }

    fn end(&mut self, kind: &str, name: &str) -> SinkResult {
        self.indent = self.indent.saturating_sub(1);
        let text = format!("+{} END {}: {}", "-".repeat(self.indent), kind, name);
        self.line(&Local::now(), Level::Info, &text)
    }
}

impl Sink for DebugFile {
    fn name(&self) -> &str {
        &self.path
    }

    fn start_suite(&mut self, suite: &Suite) -> SinkResult {
        self.separator('=')?;
        self.start("SUITE", &suite.name, "")?;
        self.separator('=')
    }

    fn end_suite(&mut self, suite: &Suite) -> SinkResult {
        self.separator('=')?;
        self.end("SUITE", &suite.name)?;
        self.separator('=')
    }

    fn start_test(&mut self, test: &TestCase) -> SinkResult {
        self.separator('-')?;
        self.start("TEST", &test.name, "")?;
        self.separator('-')
    }

    fn end_test(&mut self, test: &TestCase) -> SinkResult {
        self.separator('-')?;
        self.end("TEST", &test.name)?;
        self.separator('-')
    }

    fn start_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        let extra = if keyword.args.is_empty() {
            String::new()
        } else {
            format!(" [ {} ]", keyword.args.join(" | "))
        };
        self.start(keyword.kind().label(), &keyword.name, &extra)
    }

    fn end_keyword(&mut self, keyword: &Keyword) -> SinkResult {
        self.end(keyword.kind().label(), &keyword.name)
    }

    fn close(&mut self) -> SinkResult {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::SharedBuffer;

    #[test]
    fn test_trace_is_indented_by_depth() {
        let buffer = SharedBuffer::default();
        let mut debug = DebugFile::new("debug.txt", Box::new(buffer.clone()), Level::Debug);
        let suite = Suite::builder().name("Root").build().unwrap();
        let test = TestCase::builder().name("Case").build().unwrap();
        let keyword = Keyword::new("Log").with_args(vec!["a", "b"]);

        debug.start_suite(&suite).unwrap();
        debug.start_test(&test).unwrap();
        debug.start_keyword(&keyword).unwrap();
        debug.message(&Message::new("hello", Level::Warn, false)).unwrap();
        debug.end_keyword(&keyword).unwrap();
        debug.end_test(&test).unwrap();
        debug.end_suite(&suite).unwrap();
        debug.close().unwrap();

        let contents = buffer.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "=".repeat(78));
        assert!(lines[1].ends_with(" - INFO - + START SUITE: Root"));
        assert!(lines[4].ends_with(" - INFO - +- START TEST: Case"));
        assert!(lines[6].ends_with(" - INFO - +-- START KEYWORD: Log [ a | b ]"));
        assert!(lines[7].ends_with(" - WARN - hello"));
        assert!(lines[8].ends_with(" - INFO - +-- END KEYWORD: Log"));
        assert!(lines[10].ends_with(" - INFO - +- END TEST: Case"));
        assert!(lines[13].ends_with(" - INFO - + END SUITE: Root"));
        assert_eq!(lines.len(), 15);
    }
}
