use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PatchError, PatchResult};

pub const DEFAULT_TARGET: &str = "src/components/AdminPanel.tsx";

/// One substitution: a regular expression and its replacement text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// File read and overwritten in place
    pub target_path: PathBuf,
    /// Printed after a successful run; defaults to `Fixed <file name>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_message: Option<String>,
    /// Applied in order, each over the output of the previous rule
    pub rules: Vec<RuleSpec>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET),
            completion_message: None,
            rules: vec![
                RuleSpec::new(r"courses\.map\(c =>", "courses.map((c: any) =>"),
                RuleSpec::new(r"lessons\.map\(l =>", "lessons.map((l: any) =>"),
            ],
        }
    }
}

/// Serialization formats a config file may use, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> PatchResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            other => Err(PatchError::invalid_argument(format!(
                "{}: unsupported config format `{}` (expected json, yaml or toml)",
                path.display(),
                other.unwrap_or("")
            ))),
        }
    }

    pub fn parse(self, source: &str) -> PatchResult<PatchConfig> {
        let config: PatchConfig = match self {
            Self::Json => serde_json::from_str(source)?,
            Self::Yaml => serde_yaml::from_str(source)?,
            Self::Toml => toml::from_str(source)?,
        };
        Ok(config)
    }
}

impl PatchConfig {
    /// Read a config file; the format follows the file extension
    pub fn load(path: &Path) -> PatchResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let source = crate::utils::read_file_to_string(path)?;
        format.parse(&source)
    }

    /// Message printed once the target has been rewritten
    pub fn completion_message(&self) -> String {
        match &self.completion_message {
            Some(message) => message.clone(),
            None => {
                let name = self
                    .target_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| self.target_path.display().to_string());
                format!("Fixed {}", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_admin_panel_fix() {
        let config = PatchConfig::default();
        assert_eq!(config.target_path, PathBuf::from("src/components/AdminPanel.tsx"));
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.completion_message(), "Fixed AdminPanel.tsx");
    }

    #[test]
    fn test_load_each_format() {
        let dir = tempdir().unwrap();
        let expected = PatchConfig {
            target_path: PathBuf::from("web/List.tsx"),
            completion_message: Some("done".to_string()),
            rules: vec![RuleSpec::new(r"items\.map\(i =>", "items.map((i: any) =>")],
        };
        let sources = [
            (
                "patch.json",
                r#"{"target_path": "web/List.tsx", "completion_message": "done",
                    "rules": [{"pattern": "items\\.map\\(i =>", "replacement": "items.map((i: any) =>"}]}"#,
            ),
            (
                "patch.yaml",
                "target_path: web/List.tsx\ncompletion_message: done\nrules:\n  - pattern: 'items\\.map\\(i =>'\n    replacement: 'items.map((i: any) =>'\n",
            ),
            (
                "patch.toml",
                "target_path = \"web/List.tsx\"\ncompletion_message = \"done\"\n\n[[rules]]\npattern = 'items\\.map\\(i =>'\nreplacement = 'items.map((i: any) =>'\n",
            ),
        ];

        for (name, source) in sources {
            let path = dir.path().join(name);
            std::fs::write(&path, source).unwrap();
            assert_eq!(PatchConfig::load(&path).unwrap(), expected, "format {}", name);
        }
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.toml");
        std::fs::write(&path, "target_path = \"other/Panel.tsx\"\n").unwrap();

        let config = PatchConfig::load(&path).unwrap();

        assert_eq!(config.target_path, PathBuf::from("other/Panel.tsx"));
        assert_eq!(config.rules, PatchConfig::default().rules);
        assert_eq!(config.completion_message(), "Fixed Panel.tsx");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.ini");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            PatchConfig::load(&path),
            Err(PatchError::InvalidArgument { .. })
        ));
        assert_eq!(
            ConfigFormat::from_path(Path::new("typepatch.yml")).unwrap(),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.json");
        std::fs::write(&path, "{ \"rules\": 3 }").unwrap();

        assert!(matches!(
            PatchConfig::load(&path),
            Err(PatchError::ParseError { .. })
        ));
    }
}
