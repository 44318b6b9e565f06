use crate::output::SystemLog;
use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub value: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl Variable {
    pub fn new<V, S>(name: impl Into<String>, value: V) -> Self
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    pub fn report_invalid_syntax(&self, log: &SystemLog, message: &str) {
        let source = self
            .source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_owned());
        log.error(&format!(
            "Error in file '{}': Setting variable '{}' failed: {}",
            source, self.name, message
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Level;

    #[test]
    fn test_invalid_syntax_is_reported_to_system_log() {
        let log = SystemLog::new();
        let mut variable = Variable::new("${name}", vec!["value"]);
        variable.report_invalid_syntax(&log, "bad");
        variable.source = Some(PathBuf::from("vars.txt"));
        variable.report_invalid_syntax(&log, "worse");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(
            entries[0].text,
            "Error in file '<unknown>': Setting variable '${name}' failed: bad"
        );
        assert_eq!(
            entries[1].text,
            "Error in file 'vars.txt': Setting variable '${name}' failed: worse"
        );
    }
}
