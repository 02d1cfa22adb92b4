//! mdblog: a minimal static blog generator
//!
//! Turns a directory of markdown files into a static site: one page per
//! post, a chronological blog index, a home page and a projects page, all
//! sharing a single embedded template. Post dates come from a
//! `YYYY-MM-DD` filename prefix; there is no front-matter.

pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown source directory
    pub posts_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a new site rooted at a directory, reading `_config.yml` if
    /// one is present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
        })
    }

    /// Regenerate the whole site into the output directory
    pub fn build(&self) -> Result<()> {
        generator::Generator::new(self).build()
    }
}
