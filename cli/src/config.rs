//! CLI configuration file: the registry document plus an optional `log:` section.
//!
//! ```yaml
//! contracts:
//!   - name: staking
//!     address: "0x0000000000000000000000000000000000001337"
//!     abi: abis/staking.json
//! log:
//!   level: info
//!   components:
//!     smcdecode-evm: debug
//!   json: false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use smcdecode_observability::LogConfig;
use smcdecode_registry::{AbiRegistry, RegistryConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Directory relative ABI paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file '{}'", path.display()))?;
        let mut config: AppConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parse config file '{}'", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    pub fn build_registry(&self) -> Result<AbiRegistry> {
        let registry = AbiRegistry::from_config(&self.registry, &self.base_dir)
            .context("build ABI registry")?;
        if registry.is_empty() {
            anyhow::bail!("config registers no contracts");
        }
        Ok(registry)
    }
}
