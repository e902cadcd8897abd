//! Comparison settings loaded from TOML.

use camino::Utf8Path;
use duplex_engines::{DiffAlgorithm, DEFAULT_ENGINE};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming a configuration file to load.
pub const CONFIG_PATH_ENV: &str = "DUPLEX_CONFIG_PATH";

/// Settings for a comparison session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Identifier of the engine used for comparisons.
    pub engine: String,
    /// Algorithm the builtin engines run.
    pub algorithm: DiffAlgorithm,
    /// Rendering options.
    pub render: RenderConfig,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_owned(),
            algorithm: DiffAlgorithm::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Also escape `"` and `'` in rendered content.
    pub escape_quotes: bool,
    /// Title of exported HTML documents.
    pub document_title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_quotes: false,
            document_title: "Text Comparison".to_owned(),
        }
    }
}

impl ComparisonConfig {
    /// Parse a TOML document. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the document is not valid configuration.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::Config {
            path: origin.to_owned(),
            source,
        })
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it cannot be parsed.
    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path.as_str())?;
        log::info!("loaded configuration from {path}");
        Ok(config)
    }

    /// Resolve configuration: an explicit path wins, then the
    /// [`CONFIG_PATH_ENV`] variable, then defaults.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`ComparisonConfig::load_from`].
    pub fn load(explicit: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from(Utf8Path::new(&path)),
            _ => {
                log::debug!("no configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ComparisonConfig::from_toml_str("", "inline").expect("parse");
        assert_eq!(config, ComparisonConfig::default());
        assert_eq!(config.engine, "lines");
        assert_eq!(config.algorithm, DiffAlgorithm::Patience);
        assert_eq!(config.render.document_title, "Text Comparison");
    }

    #[test]
    fn partial_document_overrides_fields() {
        let toml = r#"
            engine = "chars"
            algorithm = "myers"

            [render]
            escape_quotes = true
        "#;
        let config = ComparisonConfig::from_toml_str(toml, "inline").expect("parse");
        assert_eq!(config.engine, "chars");
        assert_eq!(config.algorithm, DiffAlgorithm::Myers);
        assert!(config.render.escape_quotes);
        assert_eq!(config.render.document_title, "Text Comparison");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ComparisonConfig::from_toml_str("engnie = \"lines\"", "inline")
            .expect_err("typo must fail");
        assert!(matches!(err, Error::Config { ref path, .. } if path == "inline"));
    }
}
