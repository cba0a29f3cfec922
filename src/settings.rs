use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "ERRCODES";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime knobs. Defaults give the documented behaviour; `ERRCODES_*`
/// environment variables override them.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_config(Config::builder().add_source(Environment::with_prefix(ENV_PREFIX)))
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let settings = builder
            .set_default("output_dir", ".")?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
