pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod presentation;
pub mod providers;
pub mod registry;

use log::info;
use std::time::Duration;

pub use crate::config::{MensaConfig, SiteConfig};
pub use error::MensaError;
pub use fetcher::RequestFetcher;
pub use model::{AllergenInfo, DietaryInfo, Meal, NutritionInfo, Pricing};
pub use presentation::{MenuSummary, PriceTier, TableOptions};
pub use providers::{MenuParser, ProviderFactory};
pub use registry::{MensaSite, SiteRegistry};

/// Parse an STW Berlin menu page that has already been fetched.
///
/// # Errors
/// Returns [`MensaError::StructureError`] if the page has no menu container.
///
/// # Example
/// ```
/// let html = r#"<div id="speiseplan">
///   <div class="splGroupWrapper">
///     <div class="splGroup">Suppen</div>
///     <div class="splMeal" data-kennz="30"><span class="bold">Kürbissuppe</span></div>
///   </div>
/// </div>"#;
///
/// let meals = mensa_scrape::parse_menu(html).unwrap();
/// assert_eq!(meals[0].category, "Suppen");
/// assert_eq!(meals[0].allergens.allergens, vec!["Milch"]);
/// ```
pub fn parse_menu(html: &str) -> Result<Vec<Meal>, MensaError> {
    providers::stw_berlin::parse_menu(html)
}

/// Fetch a site's menu page and parse it with the site's parser.
pub async fn fetch_menu(site: &MensaSite, timeout: Option<Duration>) -> Result<Vec<Meal>, MensaError> {
    fetch_menu_with_config(site, &MensaConfig::default(), timeout).await
}

/// Like [`fetch_menu`], with request headers and timeout taken from `config`.
pub async fn fetch_menu_with_config(
    site: &MensaSite,
    config: &MensaConfig,
    timeout: Option<Duration>,
) -> Result<Vec<Meal>, MensaError> {
    let fetcher = RequestFetcher::with_config(config, timeout)?;
    let html = fetcher.fetch(&site.url).await?;
    info!("Fetched menu for {} ({} bytes)", site.name, html.len());
    site.parser.parse(&html)
}
