use std::env;

use config::{
    Config,
    ConfigError,
    File,
};
use custom_error::custom_error;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub subscription: SubscriptionSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

/// Provider-side coordinates of the capture form.
///
/// `api_key` and `publication_id` default to empty strings in the base
/// configuration: requests built from them predictably fail authorization
/// on the provider side, no client-side check is performed.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SubscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub publication_id: String,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

custom_error! {
///! Custom error for invalid configuration files.
pub ConfigurationError
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// It fails if:
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
///
/// # Examples
///
/// ```rust,no_run
/// use email_capture::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let mut config = Config::new();
    config.merge(File::with_name("configuration/base").required(true))?;
    let app_environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    config.merge(File::with_name(&format!("configuration/{}", app_environment)).required(true))?;

    // Add in settings from environment variables (with a prefix of APP and '__' as
    // separator) E.g. `APP_SUBSCRIPTION__API_KEY` would set
    // `Settings.subscription.api_key`
    config.merge(config::Environment::with_prefix("app").separator("__"))?;

    config.try_into().map(Ok)?
}
