use super::{Keyword, Timeout};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserKeyword {
    pub name: String,
    pub args: Vec<String>,
    pub doc: String,
    pub return_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Timeout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teardown: Option<Keyword>,
    pub keywords: Vec<Keyword>,
}

impl UserKeyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
