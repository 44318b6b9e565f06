//! Report data written as script statements, split so that no single
//! statement grows past the configured element budget.

mod datamodel;
mod splitting;
mod writer;

pub use datamodel::{DataModel, DataModelWriter, Statement};
