mod factory;
pub mod stw_berlin;

pub use factory::ProviderFactory;
pub use stw_berlin::StwBerlinParser;

use crate::error::MensaError;
use crate::model::Meal;

/// Unified trait for all menu page parsers
pub trait MenuParser: Send + Sync {
    /// Get the provider family name (e.g., "stw_berlin")
    fn provider_name(&self) -> &str;

    /// Parse a fetched menu page into meals, in page order
    fn parse(&self, html: &str) -> Result<Vec<Meal>, MensaError>;
}
