// Configuration for typepatch: which file to patch and with which rules

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

pub use config::{ConfigFormat, PatchConfig, RuleSpec};
pub use config_loader::ConfigLoader;
