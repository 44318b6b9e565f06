use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Keyword,
    Setup,
    Teardown,
    For,
}

impl Default for KeywordKind {
    fn default() -> Self {
        KeywordKind::Keyword
    }
}

impl KeywordKind {
    pub fn label(self) -> &'static str {
        match self {
            KeywordKind::Keyword => "KEYWORD",
            KeywordKind::Setup => "SETUP",
            KeywordKind::Teardown => "TEARDOWN",
            KeywordKind::For => "FOR",
        }
    }
}

/// Loop-specific part of a `For` keyword.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForLoop {
    pub vars: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
    /// `true` when iterating `IN RANGE` instead of over the items themselves.
    #[serde(default)]
    pub range: bool,
    #[serde(default)]
    pub steps: Vec<Keyword>,
}

/// A keyword call. Loops are keywords of kind [`KeywordKind::For`] and are the
/// only ones carrying a [`ForLoop`] payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeywordData")]
pub struct Keyword {
    pub name: String,
    pub args: Vec<String>,
    pub assign: Vec<String>,
    kind: KeywordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    for_loop: Option<ForLoop>,
}

#[derive(Deserialize)]
struct KeywordData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    assign: Vec<String>,
    #[serde(default)]
    kind: KeywordKind,
    #[serde(default)]
    for_loop: Option<ForLoop>,
}

impl TryFrom<KeywordData> for Keyword {
    type Error = String;

    fn try_from(data: KeywordData) -> Result<Self, Self::Error> {
        match (data.kind, &data.for_loop) {
            (KeywordKind::For, None) => {
                return Err(format!("for loop '{}' has no loop definition", data.name))
            }
            (kind, Some(_)) if kind != KeywordKind::For => {
                return Err(format!(
                    "keyword '{}' of kind {} cannot have a loop definition",
                    data.name,
                    kind.label()
                ))
            }
            _ => {}
        }
        Ok(Self {
            name: data.name,
            args: data.args,
            assign: data.assign,
            kind: data.kind,
            for_loop: data.for_loop,
        })
    }
}

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, KeywordKind::Keyword)
    }

    pub fn setup(name: impl Into<String>) -> Self {
        Self::with_kind(name, KeywordKind::Setup)
    }

    pub fn teardown(name: impl Into<String>) -> Self {
        Self::with_kind(name, KeywordKind::Teardown)
    }

    pub fn for_loop(name: impl Into<String>, for_loop: ForLoop) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            assign: Vec::new(),
            kind: KeywordKind::For,
            for_loop: Some(for_loop),
        }
    }

    fn with_kind(name: impl Into<String>, kind: KeywordKind) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            assign: Vec::new(),
            kind,
            for_loop: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assign<I, S>(mut self, assign: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assign = assign.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn kind(&self) -> KeywordKind {
        self.kind
    }

    #[inline]
    pub fn for_loop_data(&self) -> Option<&ForLoop> {
        self.for_loop.as_ref()
    }

    #[inline]
    pub fn is_for_loop(&self) -> bool {
        self.kind == KeywordKind::For
    }

    /// Child keywords of a loop, empty for every other keyword.
    pub fn steps(&self) -> &[Keyword] {
        self.for_loop
            .as_ref()
            .map(|data| data.steps.as_slice())
            .unwrap_or(&[])
    }
}
