use super::{Import, Keyword, KeywordKind, TestCase, UserKeyword, Variable};
use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct Suite {
    pub name: String,
    pub doc: String,
    /// Ordered `(name, value)` pairs.
    pub metadata: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub suites: Vec<Suite>,
    pub tests: Vec<TestCase>,
    pub keywords: Vec<Keyword>,
    pub imports: Vec<Import>,
    pub variables: Vec<Variable>,
    pub user_keywords: Vec<UserKeyword>,
}

impl Suite {
    pub fn builder() -> SuiteBuilder {
        SuiteBuilder::default()
    }

    pub fn setup(&self) -> Option<&Keyword> {
        self.keywords.iter().find(|kw| kw.kind() == KeywordKind::Setup)
    }

    pub fn teardown(&self) -> Option<&Keyword> {
        self.keywords
            .iter()
            .find(|kw| kw.kind() == KeywordKind::Teardown)
    }

    /// Number of tests in this suite and all of its descendants.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.suites.iter().map(Suite::test_count).sum::<usize>()
    }
}
