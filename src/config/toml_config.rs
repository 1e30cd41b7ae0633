use crate::utils::error::{GenError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional `portlist.toml`; every key falls back to the built-in default when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesConfig {
    pub ports: Option<String>,
    pub categories: Option<String>,
    pub userstyles_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub readme: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| GenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USERSTYLES_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GenError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[sources]
ports = "data/ports.yml"
categories = "data/categories.yml"
userstyles_url = "https://example.com/userstyles.yml"

[output]
readme = "docs/README.md"
"#,
        )
        .unwrap();

        assert_eq!(config.sources.ports.as_deref(), Some("data/ports.yml"));
        assert_eq!(
            config.sources.userstyles_url.as_deref(),
            Some("https://example.com/userstyles.yml")
        );
        assert_eq!(config.output.readme.as_deref(), Some("docs/README.md"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.sources.ports.is_none());
        assert!(config.output.readme.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTLIST_TEST_USERSTYLES", "https://mirror.example.com/u.yml");

        let config = TomlConfig::from_toml_str(
            "[sources]\nuserstyles_url = \"${PORTLIST_TEST_USERSTYLES}\"\nports = \"${PORTLIST_TEST_UNSET}\"\n",
        )
        .unwrap();

        assert_eq!(
            config.sources.userstyles_url.as_deref(),
            Some("https://mirror.example.com/u.yml")
        );
        assert_eq!(config.sources.ports.as_deref(), Some("${PORTLIST_TEST_UNSET}"));

        std::env::remove_var("PORTLIST_TEST_USERSTYLES");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[sources\nports = 1").unwrap_err();
        assert!(matches!(err, GenError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nreadme = \"README.md\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.readme.as_deref(), Some("README.md"));
    }
}
