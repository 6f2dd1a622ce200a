//! Transform configuration and the optional `.zlanddoc.yml` config file.
//!
//! Both fields are optional in the file:
//! ```yaml
//! file_extensions:
//!   - .js
//!   - .jsx
//!
//! build_file_descriptions: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZlanddocError};

/// Name of the per-project config file
pub const CONFIG_FILENAME: &str = ".zlanddoc.yml";

/// Options consumed once when a transform is constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source-file extensions eligible for file descriptions, leading dot included
    pub file_extensions: Vec<String>,

    /// Whether a "## Files" section is built at all
    pub build_file_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec![".js".to_string(), ".jsx".to_string()],
            build_file_descriptions: false,
        }
    }
}

/// Parses config file content
pub fn parse_config(content: &str) -> Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ZlanddocError::Config(format!("Invalid config YAML: {}", e)))
}

impl Config {
    /// Loads a config file from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        parse_config(&content)
    }

    /// Loads `.zlanddoc.yml` from `dir` if present, defaults otherwise
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.file_extensions, vec![".js", ".jsx"]);
        assert!(!config.build_file_descriptions);
    }

    #[test]
    fn test_parse_full() {
        let content = r#"
file_extensions:
  - .ts
  - .tsx
build_file_descriptions: true
"#;
        let config = parse_config(content).unwrap();
        assert_eq!(config.file_extensions, vec![".ts", ".tsx"]);
        assert!(config.build_file_descriptions);
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = parse_config("build_file_descriptions: true").unwrap();
        assert_eq!(config.file_extensions, vec![".js", ".jsx"]);
        assert!(config.build_file_descriptions);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_config("file_extensions: {not: [a list").unwrap_err();
        assert!(matches!(err, ZlanddocError::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config.file_extensions, vec![".js", ".jsx"]);
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            "build_file_descriptions: true\n",
        )
        .unwrap();

        let config = Config::load_or_default(temp_dir.path()).unwrap();
        assert!(config.build_file_descriptions);
    }
}
