use super::Level;
use lazy_static::*;
use regex::Regex;

lazy_static! {
    static ref MARKER_REGEX: Regex =
        Regex::new(r"(?m)^\*(TRACE|DEBUG|INFO|WARN|ERROR|HTML)\*").expect("Regex compilation error");
}

/// One message carved out of a block of level-tagged text.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitMessage {
    pub text: String,
    pub level: Level,
    pub html: bool,
}

impl SplitMessage {
    fn new(text: &str, marker: &str) -> Self {
        let (level, html) = match marker {
            "HTML" => (Level::Info, true),
            name => (name.parse().unwrap_or_default(), false),
        };
        Self {
            text: text.trim().to_owned(),
            level,
            html,
        }
    }
}

/// Splits text into messages at `*LEVEL*` and `*HTML*` markers that start a line.
///
/// Text before the first marker becomes an `INFO` message. Unknown markers are
/// kept as part of the surrounding message.
pub fn split(output: &str) -> Vec<SplitMessage> {
    let output = output.trim();
    if output.is_empty() {
        return Vec::new();
    }
    let markers: Vec<_> = MARKER_REGEX.captures_iter(output).collect();
    if markers.is_empty() {
        return vec![SplitMessage::new(output, "INFO")];
    }
    let mut messages = Vec::with_capacity(markers.len() + 1);
    let first = markers[0].get(0).map(|m| m.start()).unwrap_or(0);
    if first > 0 {
        messages.push(SplitMessage::new(&output[..first], "INFO"));
    }
    for (index, caps) in markers.iter().enumerate() {
        let (start, marker) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(name)) => (whole.end(), name.as_str()),
            _ => continue,
        };
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or_else(|| output.len());
        messages.push(SplitMessage::new(&output[start..end], marker));
    }
    messages
}
