use crate::error::MensaError;
use crate::providers::{MenuParser, StwBerlinParser};
use std::sync::Arc;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the parser for a provider family
    pub fn create(provider_name: &str) -> Result<Arc<dyn MenuParser>, MensaError> {
        match provider_name {
            "stw_berlin" => Ok(Arc::new(StwBerlinParser)),
            _ => Err(MensaError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["stw_berlin"]
    }
}
