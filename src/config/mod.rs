pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_url, Validate, CATALOG_EXTENSIONS, README_EXTENSIONS,
};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_PORTS_PATH: &str = "resources/ports.yml";
pub const DEFAULT_CATEGORIES_PATH: &str = "resources/categories.yml";
pub const DEFAULT_USERSTYLES_URL: &str =
    "https://raw.githubusercontent.com/catppuccin/userstyles/main/scripts/userstyles.yml";
pub const DEFAULT_README_PATH: &str = "README.md";

#[derive(Debug, Clone, Parser)]
#[command(name = "portlist-gen")]
#[command(about = "Regenerates the README port list from the ports, categories and userstyles catalogs")]
pub struct CliConfig {
    /// Repository root that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Optional TOML file overriding the default sources and output
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub ports: Option<String>,

    #[arg(long)]
    pub categories: Option<String>,

    #[arg(long)]
    pub userstyles_url: Option<String>,

    #[arg(long)]
    pub readme: Option<String>,

    /// Print the rendered sections instead of touching the README
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// CLI flag > TOML value > built-in default.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Settings::layered(self, &file))
    }
}

/// Fully resolved locations for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ports_path: String,
    pub categories_path: String,
    pub userstyles_url: String,
    pub readme_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ports_path: DEFAULT_PORTS_PATH.to_string(),
            categories_path: DEFAULT_CATEGORIES_PATH.to_string(),
            userstyles_url: DEFAULT_USERSTYLES_URL.to_string(),
            readme_path: DEFAULT_README_PATH.to_string(),
        }
    }
}

impl Settings {
    pub fn layered(cli: &CliConfig, file: &TomlConfig) -> Self {
        let defaults = Settings::default();
        let pick = |flag: &Option<String>, value: &Option<String>, default: String| {
            flag.clone().or_else(|| value.clone()).unwrap_or(default)
        };

        Self {
            ports_path: pick(&cli.ports, &file.sources.ports, defaults.ports_path),
            categories_path: pick(
                &cli.categories,
                &file.sources.categories,
                defaults.categories_path,
            ),
            userstyles_url: pick(
                &cli.userstyles_url,
                &file.sources.userstyles_url,
                defaults.userstyles_url,
            ),
            readme_path: pick(&cli.readme, &file.output.readme, defaults.readme_path),
        }
    }
}

impl ConfigProvider for Settings {
    fn ports_path(&self) -> &str {
        &self.ports_path
    }

    fn categories_path(&self) -> &str {
        &self.categories_path
    }

    fn userstyles_url(&self) -> &str {
        &self.userstyles_url
    }

    fn readme_path(&self) -> &str {
        &self.readme_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("ports", &self.ports_path, CATALOG_EXTENSIONS)?;
        validate_path("categories", &self.categories_path, CATALOG_EXTENSIONS)?;
        validate_url("userstyles_url", &self.userstyles_url)?;
        validate_path("readme", &self.readme_path, README_EXTENSIONS)?;
        Ok(())
    }
}
