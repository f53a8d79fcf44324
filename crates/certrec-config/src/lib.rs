//! Configuration surface for the reconciliation pipelines: category-id
//! table, ordered keyword rules, locale month table and the candidate
//! program list, all from one TOML file.

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{default_config_path, load_config};
pub use types::{CategoryRule, ReconcilerConfig, indonesian_months};
