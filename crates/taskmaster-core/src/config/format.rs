//! On-disk config formats, selected by file extension.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::ConfigError;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` / `.yml` map to YAML, everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }

    /// Deserialize `content` in this format. `origin` names the source in errors.
    pub fn parse<T: DeserializeOwned>(self, content: &str, origin: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }),
            Self::Yaml => {
                // A document with no nodes deserializes as unit, not as an empty map.
                // An explicit null (`~`) is still a parse error.
                let content = if is_blank_yaml(content) { "{}" } else { content };
                serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Read `path` and deserialize it according to its extension.
    pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_path(path).parse(&content, &path.display().to_string())
    }
}

/// True when `content` holds only whitespace and comment lines.
fn is_blank_yaml(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
