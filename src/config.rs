//! View configuration persistence
//!
//! Stores user preferences in `~/.config/cellview/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default markdown shown when a markdown cell has no text
pub const DEFAULT_MARKDOWN_PLACEHOLDER: &str = "Type Markdown and LaTeX: $\\alpha^2$";

/// Configuration shared by every cell view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub raw: RawConfig,
}

/// Markdown cell rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Rendered in place of an empty cell
    pub placeholder: String,
    /// Text mode given to the input editor
    pub mode: String,
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    /// Add `target="_blank"` to links that leave the page
    pub links_in_new_tab: bool,
    /// Mark the cell dirty on every text edit, not only on render toggles
    pub rerender_on_edit: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_MARKDOWN_PLACEHOLDER.to_string(),
            mode: "ipythongfm".to_string(),
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            links_in_new_tab: true,
            rerender_on_edit: false,
        }
    }
}

/// Raw cell options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Text mode given to the input editor
    pub mode: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            mode: "text/plain".to_string(),
        }
    }
}

impl ViewConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
