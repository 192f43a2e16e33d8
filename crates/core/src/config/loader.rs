//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched and defaults are used if none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        tracing::debug!(path = ?config_path, "configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        schema.validate()?;
        Ok(Self { schema, path: None })
    }
}

impl Default for Config {
    /// Defaults only (no file)
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".fuzzmatch.toml", "fuzzmatch.toml", ".config/fuzzmatch.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))?;

    schema
        .validate()
        .context(format!("Invalid config file {}", path))?;

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fuzzmatch_similarity::Mode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.matching.mode, Mode::Levenshtein);
        assert_eq!(config.schema.matching.limit, 10);
        assert_eq!(config.schema.logging.level, "warn");
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml(
            r#"
            [matching]
            mode = "damerau_levenshtein"
            threshold = 0.6
            "#,
        )
        .unwrap();

        assert_eq!(config.schema.matching.mode, Mode::DamerauLevenshtein);
        assert_eq!(config.schema.matching.threshold, 0.6);
        assert_eq!(config.schema.matching.limit, 10);
    }

    #[test]
    fn test_config_rejects_bad_threshold() {
        let err = Config::from_toml("[matching]\nthreshold = 1.5\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_config_rejects_unknown_mode() {
        let err = Config::from_toml("[matching]\nmode = \"soundex\"\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[matching]\nmode = \"bag_of_words\"\nlimit = 3").unwrap();

        let path = file.path().to_str().unwrap();
        let config = Config::load(Some(path)).unwrap();

        assert_eq!(config.path.as_deref(), Some(path));
        assert_eq!(config.schema.matching.mode, Mode::BagOfWords);
        assert_eq!(config.schema.matching.to_rank_options().limit, Some(3));
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let err = Config::load(Some("/nonexistent/fuzzmatch.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }
}
