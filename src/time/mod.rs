pub mod error;
pub mod timeunit;

pub use timeunit::parse_time;
