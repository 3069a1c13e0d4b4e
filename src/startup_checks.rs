use crate::{Config, locale::Locale};
use thiserror::Error;
use tracing::{error, info};
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupCheckError {
    #[error("{field} is not an absolute http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Unsupported default language: {0}")]
    UnsupportedLanguage(String),
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), StartupCheckError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(StartupCheckError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

/// Validates the configuration, reporting every problem rather than the first.
pub fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    if let Err(e) = check_http_url("content.base_url", &config.content.base_url) {
        error!("{}", e);
        errors.push(e);
    } else {
        info!("Content API: {}", config.content.base_url);
    }

    if let Err(e) = check_http_url("content.asset_host", &config.content.asset_host) {
        error!("{}", e);
        errors.push(e);
    } else {
        info!("Asset host: {}", config.content.asset_host);
    }

    if Locale::parse(&config.app.default_language).is_none() {
        let e = StartupCheckError::UnsupportedLanguage(config.app.default_language.clone());
        error!("{}", e);
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
