use std::env;
use std::path::Path;

use offerdesk_offer::links::DEFAULT_MEMBERS_PATH;
use offerdesk_offer::{LinkSettings, SortDirection, SortKey, SortPreference};
use offerdesk_shared::OfferError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_url")]
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { url: default_site_url() }
    }
}

fn default_site_url() -> String {
    "/".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    #[serde(default = "default_members_path")]
    pub members_path: String,
    #[serde(default = "default_sort_key")]
    pub sort_key: String,
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            members_path: default_members_path(),
            sort_key: default_sort_key(),
            sort_direction: default_sort_direction(),
        }
    }
}

fn default_members_path() -> String {
    DEFAULT_MEMBERS_PATH.to_string()
}

fn default_sort_key() -> String {
    SortKey::DateAdded.as_str().to_string()
}

fn default_sort_direction() -> String {
    "desc".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: `default`, then `{RUN_MODE}`, then `local`, then `OFFERDESK__*` env.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .add_source(layer("default"))
            .add_source(layer(&run_mode))
            // Not checked in
            .add_source(layer("local"))
            // e.g. `OFFERDESK__LISTING__SORT_KEY=name`
            .add_source(config::Environment::with_prefix("OFFERDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            members_path: self.listing.members_path.clone(),
            site_url: self.site.url.clone(),
        }
    }
}

impl ListingConfig {
    /// Unknown sort keys fall back to date added; unknown directions are an error.
    pub fn sort_preference(&self) -> Result<SortPreference, OfferError> {
        let key: SortKey = self.sort_key.parse()?;
        let direction: SortDirection = self.sort_direction.parse()?;
        Ok(SortPreference::new(key, direction))
    }
}
