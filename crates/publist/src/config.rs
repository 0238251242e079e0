use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site settings, read from `publist.toml` (or `.publist.toml`) in the
/// working directory. Command-line flags override every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// INSPIRE-HEP search query for the citation-count request, e.g.
    /// `a E.Witten.1`. Without one, enrichment is skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_query: Option<String>,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// URL prefix preview images are served from in the emitted markup.
    #[serde(default = "default_image_base")]
    pub image_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author_query: None,
            assets_dir: default_assets_dir(),
            output: default_output(),
            page_title: default_page_title(),
            image_base: default_image_base(),
        }
    }
}

fn default_assets_dir() -> String {
    "assets/publications".to_string()
}

fn default_output() -> String {
    "publications.html".to_string()
}

fn default_page_title() -> String {
    "Publications".to_string()
}

fn default_image_base() -> String {
    "/assets/publications".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_from_project() -> Result<Option<Self>> {
        let config_paths = [Path::new("publist.toml"), Path::new(".publist.toml")];

        for path in &config_paths {
            if path.exists() {
                return Ok(Some(Self::load(path)?));
            }
        }

        Ok(None)
    }
}
