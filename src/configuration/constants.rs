pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const DEFAULT_OUTPUT: &str = "output.jsonl";
    pub const ENV_PREFIX: &str = "CANNON";
}
