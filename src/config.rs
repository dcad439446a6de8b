use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct MensaConfig {
    /// Site key scraped when none is given on the command line
    #[serde(default = "default_site")]
    pub default_site: String,
    /// Price tier shown in tables (student, employee or guest)
    #[serde(default = "default_price_tier")]
    pub price_tier: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Accept-Language header sent with every request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    /// Additional sites, keyed by the name used on the command line
    #[serde(default)]
    pub sites: BTreeMap<String, SiteConfig>,
}

/// A site added through configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Display name, e.g. "Mensa TU Hardenbergstraße"
    pub name: String,
    pub url: String,
    pub city: Option<String>,
    /// Parser family used for the page
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for MensaConfig {
    fn default() -> Self {
        Self {
            default_site: default_site(),
            price_tier: default_price_tier(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            sites: BTreeMap::new(),
        }
    }
}

// Default value functions
fn default_site() -> String {
    "hu_sued".to_string()
}

fn default_price_tier() -> String {
    "student".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "de-DE,de;q=0.9,en-US;q=0.8,en;q=0.7".to_string()
}

fn default_provider() -> String {
    "stw_berlin".to_string()
}

impl MensaConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MENSA__ prefix
    /// 2. mensa.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MENSA__DEFAULT_SITE, MENSA__SITES__MY_MENSA__URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<MensaConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mensa").required(false))
        .add_source(
            Environment::with_prefix("MENSA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
