use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    #[serde(default)]
    pub pass: u32,
    #[serde(default)]
    pub fail: u32,
}

/// Aggregated pass/fail counts written into the output before it is closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total: Vec<Stat>,
    pub tags: Vec<Stat>,
    pub suites: Vec<Stat>,
}

pub trait StatisticsProvider {
    fn statistics(&self) -> Statistics;
}

impl StatisticsProvider for Statistics {
    fn statistics(&self) -> Statistics {
        self.clone()
    }
}
