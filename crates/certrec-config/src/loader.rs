use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::ReconcilerConfig;

const CONFIG_ENV_VAR: &str = "CERTREC_CONFIG";

/// Default config location: `$CERTREC_CONFIG`, else `config/certrec.toml`
/// at the repository root.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/certrec.toml")
}

/// Loads and structurally validates a config file.
pub fn load_config(path: &Path) -> Result<ReconcilerConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
    let mut config: ReconcilerConfig =
        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
    config.months = lowercase_keys(config.months);
    validate(&config)?;
    Ok(config)
}

fn lowercase_keys(months: BTreeMap<String, String>) -> BTreeMap<String, String> {
    months
        .into_iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value))
        .collect()
}

fn validate(config: &ReconcilerConfig) -> Result<(), ConfigError> {
    if config.categories.is_empty() {
        return Err(ConfigError::invalid("category table is empty"));
    }
    for (name, id) in &config.categories {
        if name.trim().is_empty() {
            return Err(ConfigError::invalid("category with empty name"));
        }
        if id.get() <= 0 {
            return Err(ConfigError::invalid(format!(
                "category '{name}' has non-positive id {id}"
            )));
        }
    }
    for rule in &config.rules {
        if rule.category.trim().is_empty() {
            return Err(ConfigError::invalid("rule with empty category name"));
        }
        if rule.keywords.is_empty() {
            return Err(ConfigError::invalid(format!(
                "rule '{}' has no keywords",
                rule.category
            )));
        }
        if rule.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(ConfigError::invalid(format!(
                "rule '{}' has an empty keyword",
                rule.category
            )));
        }
    }
    for (from, to) in &config.months {
        if from.is_empty() || to.trim().is_empty() {
            return Err(ConfigError::invalid("month table has an empty entry"));
        }
    }
    Ok(())
}
