use thiserror::Error;

/// Errors that can occur while fetching or parsing a menu
#[derive(Error, Debug)]
pub enum MensaError {
    /// Failed to fetch the menu page (timeout, connection or HTTP status)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The site URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The document lacks the structure a parser needs to do any work
    #[error("Menu structure not found: {0}")]
    StructureError(String),

    /// No site is registered under the requested key
    #[error("Unknown mensa '{key}'. Available: {available}")]
    UnknownSite { key: String, available: String },

    /// A site names a provider that has no parser
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Price tier name is not one of student/employee/guest
    #[error("Price tier must be one of employee, guest, student (got '{0}')")]
    InvalidPriceTier(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize results
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}
