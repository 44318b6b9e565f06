use super::{Keyword, KeywordKind, Timeout};
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct TestCase {
    pub name: String,
    pub doc: String,
    pub tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Timeout>,
    /// Name of the keyword used as a template, if the test was built from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub keywords: Vec<Keyword>,
}

impl TestCase {
    pub fn builder() -> TestCaseBuilder {
        TestCaseBuilder::default()
    }

    pub fn setup(&self) -> Option<&Keyword> {
        self.keywords.iter().find(|kw| kw.kind() == KeywordKind::Setup)
    }

    pub fn teardown(&self) -> Option<&Keyword> {
        self.keywords
            .iter()
            .find(|kw| kw.kind() == KeywordKind::Teardown)
    }
}
