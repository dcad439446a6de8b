use crate::config::MensaConfig;
use crate::error::MensaError;
use crate::providers::{MenuParser, ProviderFactory};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Descriptor for a single Mensa location
#[derive(Clone)]
pub struct MensaSite {
    pub key: String,
    pub name: String,
    pub url: String,
    /// Provider family, e.g. "stw_berlin"
    pub provider: String,
    pub city: Option<String>,
    pub parser: Arc<dyn MenuParser>,
}

impl fmt::Debug for MensaSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MensaSite")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("provider", &self.provider)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

impl MensaSite {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        provider: &str,
        city: Option<String>,
    ) -> Result<Self, MensaError> {
        Ok(Self {
            key: key.into(),
            name: name.into(),
            url: url.into(),
            provider: provider.to_string(),
            city,
            parser: ProviderFactory::create(provider)?,
        })
    }
}

// key, name, url, provider, city
const BUILTIN_SITES: &[(&str, &str, &str, &str, &str)] = &[(
    "hu_sued",
    "Mensa HU Süd",
    "https://www.stw.berlin/mensen/einrichtungen/humboldt-universität-zu-berlin/mensa-hu-süd.html",
    "stw_berlin",
    "Berlin",
)];

/// Lookup table from site key to site, iterated in key order
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: BTreeMap<String, MensaSite>,
}

impl SiteRegistry {
    /// Sites known without any configuration
    pub fn builtin() -> Result<Self, MensaError> {
        let mut registry = Self::default();
        for &(key, name, url, provider, city) in BUILTIN_SITES {
            registry.insert(MensaSite::new(key, name, url, provider, Some(city.to_string()))?);
        }
        Ok(registry)
    }

    /// Built-in sites plus the ones from `config`; configured keys replace built-in ones
    pub fn with_config(config: &MensaConfig) -> Result<Self, MensaError> {
        let mut registry = Self::builtin()?;
        for (key, site) in &config.sites {
            debug!("Registering configured site '{}' ({})", key, site.provider);
            registry.insert(MensaSite::new(
                key.as_str(),
                site.name.as_str(),
                site.url.as_str(),
                &site.provider,
                site.city.clone(),
            )?);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, site: MensaSite) {
        self.sites.insert(site.key.clone(), site);
    }

    pub fn get(&self, key: &str) -> Result<&MensaSite, MensaError> {
        self.sites.get(key).ok_or_else(|| MensaError::UnknownSite {
            key: key.to_string(),
            available: self.keys().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    pub fn sites(&self) -> impl Iterator<Item = &MensaSite> {
        self.sites.values()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_builtin_contains_hu_sued() {
        let registry = SiteRegistry::builtin().unwrap();
        let site = registry.get("hu_sued").unwrap();
        assert_eq!(site.name, "Mensa HU Süd");
        assert_eq!(site.city.as_deref(), Some("Berlin"));
        assert_eq!(site.provider, "stw_berlin");
        assert_eq!(site.parser.provider_name(), site.provider);
    }

    #[test]
    fn test_builtin_sites_use_factory_providers() {
        let registry = SiteRegistry::builtin().unwrap();
        let available = ProviderFactory::available_providers();
        for site in registry.sites() {
            assert!(available.contains(&site.provider.as_str()), "{}", site.key);
            assert_eq!(site.parser.provider_name(), site.provider);
        }
    }

    #[test]
    fn test_unknown_site_lists_available() {
        let registry = SiteRegistry::builtin().unwrap();
        let err = registry.get("nowhere").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown mensa 'nowhere'. Available: hu_sued"
        );
    }

    #[test]
    fn test_configured_sites_are_added_in_key_order() {
        let mut config = MensaConfig::default();
        config.sites.insert(
            "adlershof".to_string(),
            SiteConfig {
                name: "Mensa Adlershof".to_string(),
                url: "https://example.org/adlershof.html".to_string(),
                city: None,
                provider: "stw_berlin".to_string(),
            },
        );

        let registry = SiteRegistry::with_config(&config).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["adlershof", "hu_sued"]);
    }

    #[test]
    fn test_configured_site_with_unknown_provider() {
        let mut config = MensaConfig::default();
        config.sites.insert(
            "elsewhere".to_string(),
            SiteConfig {
                name: "Elsewhere".to_string(),
                url: "https://example.org/".to_string(),
                city: None,
                provider: "no_such_provider".to_string(),
            },
        );

        let result = SiteRegistry::with_config(&config);
        assert!(matches!(result, Err(MensaError::UnknownProvider(_))));
    }
}
