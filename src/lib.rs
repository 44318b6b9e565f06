//! Result reporting for test runs: engine events fanned out to output sinks,
//! and finished results written as chunked script data for reports.

#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

pub mod app;
pub mod configuration;
pub mod error;
pub mod model;
pub mod output;
pub mod serializing;
pub mod time;

pub use error::{Error, Result};
