use super::splitting::{split, Fragment};
use super::writer::SeparatingWriter;
use crate::configuration::settings::Settings;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::io::{Read, Write};

const OUTPUT_VAR: &str = "window.output";
const SETTINGS_VAR: &str = "window.settings";
const PART_PREFIX: &str = "window.sPart";

/// Flattened result data plus the settings of the report that embeds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataModel {
    data: Map<String, Value>,
    settings: Map<String, Value>,
}

impl DataModel {
    pub fn new(data: Map<String, Value>, settings: Map<String, Value>) -> Self {
        Self { data, settings }
    }

    /// Reads the data mapping as JSON, keeping its key order.
    pub fn from_reader<R: Read>(reader: R, settings: Map<String, Value>) -> Result<Self> {
        let data = serde_json::from_reader(reader)?;
        Ok(Self::new(data, settings))
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }
}

/// `target = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub target: String,
    pub value: String,
}

impl Statement {
    fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {};", self.target, self.value)
    }
}

/// Turns a [`DataModel`] into statements for the script host.
///
/// Without a split threshold every top-level key becomes exactly one
/// statement. With one, sequences holding nested sequences are hoisted into
/// `window.sPart<N>` globals and long flat sequences are appended to their key
/// in windows of `threshold` elements. The part counter keeps counting across
/// keys and across calls, so one writer must be used per document.
///
/// Hoisted parts are written whole. A part that is itself a long flat
/// sequence is not windowed, so its statement is not bounded by the
/// threshold.
#[derive(Debug)]
pub struct DataModelWriter {
    split_threshold: Option<usize>,
    separator: Option<String>,
    parts: usize,
}

impl DataModelWriter {
    pub fn new(split_threshold: Option<usize>, separator: Option<String>) -> Result<Self> {
        if split_threshold == Some(0) {
            return Err(Error::InvalidSplitThreshold);
        }
        Ok(Self {
            split_threshold,
            separator,
            parts: 0,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.split_threshold, settings.separator.clone())
    }

    pub fn statements(&mut self, model: &DataModel) -> Result<Vec<Statement>> {
        let mut statements = vec![Statement::new(OUTPUT_VAR, "{}")];
        for (key, value) in &model.data {
            self.element(key, value, &mut statements)?;
        }
        statements.push(Statement::new(
            SETTINGS_VAR,
            serde_json::to_string(&model.settings)?,
        ));
        Ok(statements)
    }

    pub fn write_to<W: Write>(&mut self, model: &DataModel, out: &mut W) -> Result<()> {
        let statements = self.statements(model)?;
        let mut writer = SeparatingWriter::new(out, self.separator.as_deref());
        for statement in &statements {
            writer.statement(statement)?;
        }
        debug!("Wrote {} statements, {} parts so far", statements.len(), self.parts);
        Ok(())
    }

    fn element(&mut self, key: &str, value: &Value, statements: &mut Vec<Statement>) -> Result<()> {
        let target = format!("{}[{}]", OUTPUT_VAR, serde_json::to_string(key)?);
        let (threshold, items) = match (self.split_threshold, value) {
            (Some(threshold), Value::Array(items)) => (threshold, items),
            _ => {
                statements.push(Statement::new(target, serde_json::to_string(value)?));
                return Ok(());
            }
        };
        if items.iter().any(Value::is_array) {
            let parts = &mut self.parts;
            let mut hoist = |list: Fragment| -> serde_json::Result<String> {
                let name = format!("{}{}", PART_PREFIX, *parts);
                *parts += 1;
                statements.push(Statement::new(name.clone(), list.render()?));
                Ok(name)
            };
            let (fragment, _) = split(value, threshold, &mut hoist)?;
            statements.push(Statement::new(target, fragment.render()?));
        } else if items.len() > threshold {
            statements.push(Statement::new(target.clone(), "[]"));
            for window in items.chunks(threshold) {
                let value = format!("{}.concat({})", target, serde_json::to_string(window)?);
                statements.push(Statement::new(target.clone(), value));
            }
        } else {
            statements.push(Statement::new(target, serde_json::to_string(value)?));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(data: Value) -> DataModel {
        match data {
            Value::Object(data) => DataModel::new(data, Map::new()),
            _ => unreachable!(),
        }
    }

    fn lines(data: Value, threshold: Option<usize>, separator: Option<&str>) -> Vec<String> {
        let mut writer = DataModelWriter::new(threshold, separator.map(str::to_owned)).unwrap();
        let mut out = Vec::new();
        writer.write_to(&model(data), &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    fn assert_separators(lines: &[String], separator: &str) {
        assert_eq!(lines.len() % 2, 1);
        for (index, line) in lines.iter().enumerate() {
            if index % 2 == 1 {
                assert_eq!(line, separator);
            } else {
                assert!(line.starts_with("window."), "line {}: {}", index, line);
            }
        }
    }

    #[test]
    fn test_writing_datamodel_elements() {
        let lines = lines(json!({ "baseMillis": 100 }), None, None);

        assert_eq!(
            lines,
            vec![
                "window.output = {};",
                "window.output[\"baseMillis\"] = 100;",
                "window.settings = {};",
            ]
        );
    }

    #[test]
    fn test_writing_datamodel_with_separator() {
        let lines = lines(json!({ "baseMillis": 100 }), None, Some("seppo"));

        assert_eq!(lines.len(), 5);
        assert_separators(&lines, "seppo");
    }

    #[test]
    fn test_splitting_nested_suite() {
        let data = json!({ "baseMillis": 100, "suite": [1, [2, 3], [4, [5], [6, 7]], 8] });
        let lines = lines(data, Some(2), Some("foo"));

        assert_separators(&lines, "foo");
        let parts: Vec<_> = lines.iter().filter(|l| l.starts_with("window.sPart")).collect();
        assert_eq!(
            parts,
            vec![
                "window.sPart0 = [2,3];",
                "window.sPart1 = [6,7];",
                "window.sPart2 = [4,[5],window.sPart1];",
                "window.sPart3 = [1,window.sPart0,window.sPart2,8];",
            ]
        );
        assert_eq!(lines[12], "window.output[\"suite\"] = window.sPart3;");
        assert_eq!(lines[14], "window.settings = {};");
    }

    #[test]
    fn test_splitting_output_integers() {
        let integers: Vec<u32> = (0..900).collect();
        let lines = lines(
            json!({ "baseMillis": 100, "integers": integers }),
            Some(200),
            Some(""),
        );

        assert_separators(&lines, "");
        let parts: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with("window.output[\"int"))
            .collect();
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[0], "window.output[\"integers\"] = [];");
        assert!(parts[5].ends_with(",899]);"));
    }

    #[test]
    fn test_splitting_output_strings() {
        let strings = vec!["data"; 100];
        let lines = lines(
            json!({ "baseMillis": 100, "strings": strings }),
            Some(9),
            Some("?"),
        );

        assert_separators(&lines, "?");
        let parts = lines
            .iter()
            .filter(|l| l.starts_with("window.output[\"strings"))
            .count();
        assert_eq!(parts, 13);
    }

    #[test]
    fn test_short_and_unsplit_sequences_stay_whole() {
        let data = json!({ "short": [1, 2], "suite": [1, [2, 3]] });

        assert_eq!(lines(data.clone(), Some(5), None)[1], "window.output[\"short\"] = [1,2];");
        assert_eq!(lines(data, None, None)[2], "window.output[\"suite\"] = [1,[2,3]];");
    }

    #[test]
    fn test_keys_and_settings_are_escaped() {
        let mut settings = Map::new();
        settings.insert("title".into(), json!("A \"quoted\" title"));
        let data = match json!({ "we\"ird": "</script>" }) {
            Value::Object(data) => data,
            _ => unreachable!(),
        };
        let mut writer = DataModelWriter::new(None, None).unwrap();
        let statements = writer.statements(&DataModel::new(data, settings)).unwrap();

        assert_eq!(statements[1].target, "window.output[\"we\\\"ird\"]");
        assert_eq!(
            statements[2].to_string(),
            "window.settings = {\"title\":\"A \\\"quoted\\\" title\"};"
        );
    }

    #[test]
    fn test_part_counter_continues_across_writes() {
        let data = model(json!({ "suite": [1, [2, 3]] }));
        let mut writer = DataModelWriter::new(Some(2), None).unwrap();

        let first = writer.statements(&data).unwrap();
        let second = writer.statements(&data).unwrap();
        let fresh = DataModelWriter::new(Some(2), None).unwrap().statements(&data).unwrap();

        assert_eq!(first, fresh);
        assert_eq!(first[1].to_string(), "window.sPart0 = [2,3];");
        assert_eq!(second[1].to_string(), "window.sPart2 = [2,3];");
        assert_eq!(second[3].to_string(), "window.output[\"suite\"] = window.sPart3;");
    }

    #[test]
    fn test_hoisted_parts_are_not_windowed() {
        let inner: Vec<u32> = (0..20).collect();
        let lines = lines(json!({ "suite": [inner] }), Some(9), None);

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("window.sPart0 = [0,1,"));
        assert!(lines[1].ends_with(",19];"));
        assert_eq!(lines[2], "window.output[\"suite\"] = [window.sPart0];");
    }

    #[test]
    fn test_rejects_zero_threshold() {
        assert!(matches!(
            DataModelWriter::new(Some(0), None),
            Err(Error::InvalidSplitThreshold)
        ));
    }

    #[test]
    fn test_reads_model_in_key_order() {
        let input = r#"{"zeta": 1, "alpha": [1, 2], "mid": {"b": 1, "a": 2}}"#;
        let model = DataModel::from_reader(input.as_bytes(), Map::new()).unwrap();
        let keys: Vec<_> = model.data().keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        let statements = DataModelWriter::new(None, None).unwrap().statements(&model).unwrap();
        assert_eq!(statements[3].value, r#"{"b":1,"a":2}"#);
    }
}
