use super::Statement;
use std::io::{self, Write};

/// Writes statements one per line with an optional separator line between them.
pub(super) struct SeparatingWriter<'a, W: Write> {
    out: &'a mut W,
    separator: Option<&'a str>,
    written: usize,
}

impl<'a, W: Write> SeparatingWriter<'a, W> {
    pub fn new(out: &'a mut W, separator: Option<&'a str>) -> Self {
        Self {
            out,
            separator,
            written: 0,
        }
    }

    pub fn statement(&mut self, statement: &Statement) -> io::Result<()> {
        if self.written > 0 {
            if let Some(separator) = self.separator {
                writeln!(self.out, "{}", separator)?;
            }
        }
        writeln!(self.out, "{}", statement)?;
        self.written += 1;
        Ok(())
    }
}
