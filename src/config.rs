//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Every field has a default so a site can run with no `_config.yml` at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the header and page titles
    pub title: String,

    /// Directory containing the markdown sources
    pub posts_dir: String,

    /// Directory the generated site is written to
    pub output_dir: String,

    /// Designated source file for the home page (posts root only)
    pub home_page: String,

    /// Designated source file for the projects page (posts root only)
    pub projects_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            posts_dir: "posts".to_string(),
            output_dir: "docs".to_string(),
            home_page: "index.md".to_string(),
            projects_page: "projects.md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
