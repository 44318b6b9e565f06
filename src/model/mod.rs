//! Result tree handed over by the execution engine.
//!
//! Nodes are built while parsing test data and annotated by the engine while
//! running. The reporting pipeline only ever reads them.

mod imports;
mod keyword;
mod suite;
mod test;
mod timeout;
mod user_keyword;
mod variable;

pub use imports::{Import, ImportKind};
pub use keyword::{ForLoop, Keyword, KeywordKind};
pub use suite::{Suite, SuiteBuilder};
pub use test::{TestCase, TestCaseBuilder};
pub use timeout::Timeout;
pub use user_keyword::UserKeyword;
pub use variable::Variable;
