//! CLI command implementations.

pub mod console;
pub mod seed;
pub mod user;

use backline_api::config::DataServiceConfig;
use secrecy::SecretString;
use url::Url;

/// Load the data service configuration from the environment.
///
/// # Errors
///
/// Returns an error if `DATA_SERVICE_URL`/`DATA_SERVICE_KEY` are missing or
/// the URL is invalid.
pub(crate) fn data_service_from_env() -> Result<DataServiceConfig, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATA_SERVICE_URL").map_err(|_| "DATA_SERVICE_URL not set")?;
    let url = Url::parse(&url)?;
    let service_key = std::env::var("DATA_SERVICE_KEY")
        .map(SecretString::from)
        .map_err(|_| "DATA_SERVICE_KEY not set")?;

    Ok(DataServiceConfig { url, service_key })
}
