use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::range::DEFAULT_MAX_VISIBLE_PAGES;
use crate::ui::style::{Color, Style};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml layout config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid json layout config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Text shown on the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabels {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
    pub ellipsis: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            first: "« First".to_string(),
            previous: "← Previous".to_string(),
            next: "Next →".to_string(),
            last: "Last »".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Styles applied by the built-in renderer. Active and disabled are layered
/// on top of base. `container` fills the gaps between slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotStyles {
    pub base: Style,
    pub active: Style,
    pub disabled: Style,
    pub ellipsis: Style,
    pub container: Style,
}

impl Default for SlotStyles {
    fn default() -> Self {
        Self {
            base: Style::new().color(Color::Grey),
            active: Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold(),
            disabled: Style::new().dim(),
            ellipsis: Style::new().color(Color::DarkGrey),
            container: Style::default(),
        }
    }
}

/// Per-invocation layout options.
///
/// `max_visible_pages` counts ellipsis markers too. Values below 3 are
/// accepted but leave no room for the truncation layouts to show anything
/// between the anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub max_visible_pages: usize,
    pub show_first_last: bool,
    pub show_previous_next: bool,
    pub disabled: bool,
    pub labels: NavLabels,
    pub styles: SlotStyles,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_first_last: true,
            show_previous_next: true,
            disabled: false,
            labels: NavLabels::default(),
            styles: SlotStyles::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages;
        self
    }

    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    pub fn with_previous_next(mut self, show: bool) -> Self {
        self.show_previous_next = show;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_labels(mut self, labels: NavLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_styles(mut self, styles: SlotStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
