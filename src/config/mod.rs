use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod validator;

use crate::cli::Cli;
use crate::domain::{CandidateItem, CandidateList, CatalogError};

pub const DEFAULT_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub widget: WidgetSettings,
    /// Static candidate catalog, in display order
    #[serde(default)]
    pub candidates: Vec<CandidateItem>,
}

/// Presentation settings for the widget
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WidgetSettings {
    /// Placeholder shown in the empty text input
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_root(config_path);

        let s = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .set_default("widget.placeholder", DEFAULT_PLACEHOLDER)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.load_external_configs(&root)?;
        settings.validate()?;

        info!("Loaded {} candidates from {}", settings.candidates.len(), config_path.display());
        Ok(settings)
    }

    /// Load `<root>/chipbox.{toml,yaml,json}` plus drop-in candidate files
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let root = Path::new(root);
        let s = Config::builder()
            .add_source(File::from(root.join("chipbox")).required(false))
            .set_default("widget.placeholder", DEFAULT_PLACEHOLDER)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.load_external_configs(root)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Parse a catalog held in memory, such as one bundled with `include_str!`
    pub fn from_toml_str(content: &str) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .set_default("widget.placeholder", DEFAULT_PLACEHOLDER)?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Build the immutable candidate list for a widget instance
    pub fn catalog(&self) -> Result<CandidateList, CatalogError> {
        CandidateList::new(self.candidates.clone())
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(placeholder) = &cli.placeholder {
            self.widget.placeholder = placeholder.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!("Configuration validation failed:\n{}", error_messages.join("\n"))
        })
    }

    fn load_external_configs(&mut self, root: &Path) -> Result<(), anyhow::Error> {
        self.load_candidates_from_dir(&root.join("config").join("candidates"))
    }

    /// Append one candidate per `*.json`/`*.yaml`/`*.yml` file, in path order
    fn load_candidates_from_dir(&mut self, dir: &Path) -> Result<(), anyhow::Error> {
        let pattern = dir.join("*");
        for entry in glob::glob(&pattern.to_string_lossy())? {
            match entry {
                Ok(path) => {
                    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                        if matches!(ext, "json" | "yaml" | "yml") {
                            let content = std::fs::read_to_string(&path)?;
                            let candidate: CandidateItem = if ext == "json" {
                                serde_json::from_str(&content)?
                            } else {
                                serde_yaml::from_str(&content)?
                            };
                            self.candidates.push(candidate);
                        } else {
                            warn!("Skipping candidate file with unknown format: {}", path.display());
                        }
                    }
                }
                Err(e) => warn!("Failed to read glob entry: {}", e),
            }
        }
        Ok(())
    }
}

/// Directory holding the config file, used to find drop-in directories
fn config_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
