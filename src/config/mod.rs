use crate::models::{ARCHIVE_START, DEFAULT_WINDOW_DAYS};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub apod: ApodConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream Astronomy Picture of the Day endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApodConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
    #[serde(default = "default_archive_start")]
    pub archive_start: NaiveDate,
    /// Height of embedded video players, in CSS pixels.
    #[serde(default = "default_embed_height")]
    pub embed_height: u32,
    /// How many rendered galleries keep their items available to the detail modal.
    #[serde(default = "default_retained_renders")]
    pub retained_renders: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_window_days: default_window_days(),
            archive_start: default_archive_start(),
            embed_height: default_embed_height(),
            retained_renders: default_retained_renders(),
        }
    }
}

fn default_title() -> String {
    "NASA Space Explorer".to_string()
}

fn default_tagline() -> String {
    "Explore the universe one day at a time".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_endpoint() -> String {
    "https://api.nasa.gov/planetary/apod".to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_archive_start() -> NaiveDate {
    ARCHIVE_START
}

fn default_embed_height() -> u32 {
    250
}

fn default_retained_renders() -> usize {
    32
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run 'apod-gallery init' to create one.",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.apod.endpoint.is_empty() {
            anyhow::bail!("apod.endpoint must not be empty");
        }
        if self.apod.api_key.is_empty() {
            anyhow::bail!("apod.api_key must not be empty");
        }
        if self.gallery.default_window_days == 0 {
            anyhow::bail!("gallery.default_window_days must be greater than 0");
        }
        if self.gallery.embed_height == 0 {
            anyhow::bail!("gallery.embed_height must be greater than 0");
        }
        if self.gallery.retained_renders == 0 {
            anyhow::bail!("gallery.retained_renders must be greater than 0");
        }
        if self.gallery.archive_start < ARCHIVE_START {
            anyhow::bail!(
                "gallery.archive_start cannot be earlier than {}",
                ARCHIVE_START
            );
        }
        Ok(())
    }
}
