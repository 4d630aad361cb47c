//! Registry configuration: which contracts to load and where their ABIs live.
//!
//! The document is YAML (JSON is accepted too, being a YAML subset):
//!
//! ```yaml
//! contracts:
//!   - name: staking
//!     address: "0x0000000000000000000000000000000000001337"
//!     abi: abis/staking.json          # relative to the config file
//!   - name: token
//!     address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
//!     abi_json: '[{"type":"function", ...}]'
//! ```
//!
//! Unknown top-level keys are ignored so the same file can carry settings
//! for other components (e.g. a `log:` section).

use serde::{Deserialize, Serialize};
use smcdecode_core::error::RegistryError;
use std::path::{Path, PathBuf};

use crate::memory::AbiRegistry;

/// One contract entry. Exactly one of `abi` / `abi_json` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    pub name: String,
    pub address: String,
    /// Path to an ABI JSON file, resolved against the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<PathBuf>,
    /// Inline ABI JSON text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi_json: Option<String>,
}

/// Top-level registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub contracts: Vec<ContractConfig>,
}

impl RegistryConfig {
    /// Parse a config document from YAML or JSON text.
    pub fn from_yaml(text: &str) -> Result<Self, RegistryError> {
        serde_yaml::from_str(text).map_err(|e| RegistryError::ParseError(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

impl ContractConfig {
    /// Resolve this entry's ABI text.
    fn abi_text(&self, base_dir: &Path) -> Result<String, RegistryError> {
        match (&self.abi, &self.abi_json) {
            (Some(path), None) => {
                let full = if path.is_absolute() {
                    path.clone()
                } else {
                    base_dir.join(path)
                };
                Ok(std::fs::read_to_string(full)?)
            }
            (None, Some(inline)) => Ok(inline.clone()),
            (Some(_), Some(_)) => Err(RegistryError::ValidationFailed {
                reason: format!("contract '{}' sets both 'abi' and 'abi_json'", self.name),
            }),
            (None, None) => Err(RegistryError::ValidationFailed {
                reason: format!("contract '{}' has neither 'abi' nor 'abi_json'", self.name),
            }),
        }
    }
}

impl AbiRegistry {
    /// Build a registry from a parsed config. Relative ABI paths are
    /// resolved against `base_dir`.
    pub fn from_config(config: &RegistryConfig, base_dir: &Path) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in &config.contracts {
            let text = entry.abi_text(base_dir)?;
            registry.register_json(entry.name.clone(), &entry.address, &text)?;
        }
        Ok(registry)
    }

    /// Read a config file and build a registry from it.
    pub fn load_config_file(path: &Path) -> Result<Self, RegistryError> {
        let config = RegistryConfig::from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config(&config, base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_path(rel: &str) -> PathBuf {
        let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        p.push("../..");
        p.push(rel);
        p
    }

    #[test]
    fn inline_abi_config() {
        let yaml = r#"
contracts:
  - name: token
    address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
    abi_json: '[{"type":"function","name":"transfer","stateMutability":"nonpayable","outputs":[],"inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}]}]'
log:
  level: debug
"#;
        let cfg = RegistryConfig::from_yaml(yaml).unwrap();
        let reg = AbiRegistry::from_config(&cfg, Path::new(".")).unwrap();
        assert_eq!(reg.len(), 1);
        assert!(reg
            .resolve_by_selector("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", [0xa9, 0x05, 0x9c, 0xbb])
            .is_ok());
    }

    #[test]
    fn json_config_accepted() {
        let cfg = RegistryConfig::from_yaml(r#"{"contracts": []}"#).unwrap();
        assert!(cfg.contracts.is_empty());
    }

    #[test]
    fn entry_without_abi_rejected() {
        let yaml = r#"
contracts:
  - name: broken
    address: "0x0000000000000000000000000000000000000001"
"#;
        let cfg = RegistryConfig::from_yaml(yaml).unwrap();
        let err = AbiRegistry::from_config(&cfg, Path::new(".")).unwrap_err();
        assert!(matches!(err, RegistryError::ValidationFailed { .. }));
    }

    #[test]
    fn missing_abi_file_is_io_error() {
        let yaml = r#"
contracts:
  - name: ghost
    address: "0x0000000000000000000000000000000000000001"
    abi: does/not/exist.json
"#;
        let cfg = RegistryConfig::from_yaml(yaml).unwrap();
        let err = AbiRegistry::from_config(&cfg, Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }

    #[test]
    fn loads_bundled_fixture_config() {
        let reg = AbiRegistry::load_config_file(&workspace_path("fixtures/registry.yaml")).unwrap();
        assert_eq!(reg.len(), 3);
        let mut names: Vec<_> = reg.contracts().map(|c| c.name().to_string()).collect();
        names.sort();
        assert_eq!(names, ["staking", "token", "validator"]);
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = RegistryConfig::from_yaml("contracts: [").unwrap_err();
        assert!(matches!(err, RegistryError::ParseError(_)));
    }
}
