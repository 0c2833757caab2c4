use derive_from_env::FromEnv;

use crate::{error::Error, severity::Severity};

/// Logger settings read from `LVLOG_*` environment variables.
///
/// Only consulted when a logger is built with the environment applied
/// explicitly; default construction never reads the environment.
#[derive(FromEnv)]
#[from_env(prefix = "LVLOG")]
#[allow(non_snake_case)]
pub struct LvlogConfig {
    #[from_env(default = "info")]
    pub LEVEL: String,
    #[from_env(default = "false")]
    pub COLOR: bool,
}

impl LvlogConfig {
    pub fn load() -> Result<Self, Error> {
        LvlogConfig::from_env().map_err(|e| Error::Config(e.to_string()))
    }

    pub fn level(&self) -> Result<Severity, Error> {
        self.LEVEL.parse()
    }
}
