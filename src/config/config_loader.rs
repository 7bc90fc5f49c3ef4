use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::config::PatchConfig;
use crate::error::PatchResult;

/// File names looked up in the search directory, first match wins
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "typepatch.toml",
    "typepatch.yaml",
    "typepatch.yml",
    "typepatch.json",
];

/// The configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    search_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a loader that searches the working directory
    pub fn new() -> Self {
        Self::in_dir(".")
    }

    /// Search `dir` instead of the working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: None,
            search_dir: dir.into(),
        }
    }

    /// Set a custom config path; it must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            search_dir: PathBuf::from("."),
        }
    }

    /// Config file that `load` would read, if any
    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.search_dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load the configuration, falling back to the built-in AdminPanel fix
    pub fn load(&self) -> PatchResult<PatchConfig> {
        match self.locate() {
            Some(path) => {
                info!("Loading patch configuration from {}", path.display());
                PatchConfig::load(&path)
            }
            None => {
                debug!(
                    "No config file in {}, using built-in rules",
                    display_dir(&self.search_dir)
                );
                Ok(PatchConfig::default())
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn display_dir(dir: &Path) -> String {
    if dir == Path::new(".") {
        "working directory".to_string()
    } else {
        dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_file_yields_default() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::in_dir(dir.path());

        assert!(loader.locate().is_none());
        assert_eq!(loader.load().unwrap(), PatchConfig::default());
    }

    #[test]
    fn test_toml_preferred_over_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("typepatch.json"), r#"{"target_path": "from/json.tsx"}"#).unwrap();
        fs::write(dir.path().join("typepatch.toml"), "target_path = \"from/toml.tsx\"\n").unwrap();

        let config = ConfigLoader::in_dir(dir.path()).load().unwrap();

        assert_eq!(config.target_path, PathBuf::from("from/toml.tsx"));
    }

    #[test]
    fn test_yaml_is_found() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("typepatch.yml"),
            "rules:\n  - pattern: 'x'\n    replacement: 'y'\n",
        )
        .unwrap();

        let config = ConfigLoader::in_dir(dir.path()).load().unwrap();

        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.target_path, PatchConfig::default().target_path);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("nope.toml"));

        assert!(matches!(loader.load(), Err(PatchError::FileAccess { .. })));
    }
}
