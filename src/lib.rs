use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod content;
pub mod detail;
pub mod gallery;
pub mod locale;
pub mod presentation;
pub mod startup_checks;
pub mod views;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub content: ContentApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Live detail views kept before the least recently used is dropped.
    #[serde(default = "default_max_views")]
    pub max_views: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
    /// Language used when a request does not name one.
    #[serde(default = "default_language")]
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentApiConfig {
    pub base_url: String,
    /// Prefix for relative image paths returned by the API.
    pub asset_host: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_max_views() -> usize {
    256
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            asset_host: "http://localhost:8000".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_views: default_max_views(),
            },
            app: AppConfig {
                name: "Vitrine".to_string(),
                log_level: "info".to_string(),
                default_language: default_language(),
            },
            content: ContentApiConfig::default(),
        }
    }
}

impl Config {
    /// Reads the TOML file at `path`, or the defaults when it does not exist,
    /// and runs the startup checks over the result.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = toml_edit::de::from_str::<Config>(&contents)?;
            tracing::info!("Configuration loaded from: {:?}", path);
            config
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Config::default()
        };

        // Each failed check has already been logged.
        if let Err(errors) = startup_checks::perform_startup_checks(&config) {
            return Err(format!(
                "Invalid configuration: {} startup check(s) failed",
                errors.len()
            )
            .into());
        }

        Ok(config)
    }

    pub fn default_locale(&self) -> locale::Locale {
        locale::Locale::from_language(&self.app.default_language, locale::Locale::DEFAULT)
    }

    pub fn asset_host(&self) -> presentation::AssetHost {
        presentation::AssetHost::new(self.content.asset_host.clone())
    }
}

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub views: views::ViewRegistry,
    pub source: content::DynContentSource,
    pub keyboard: gallery::KeyboardHub,
    pub config: Config,
}

pub async fn create_app(config: Config) -> Result<Router, content::ContentError> {
    let source = Arc::new(content::HttpContentSource::new(&config.content)?);
    Ok(create_app_with_source(config, source))
}

pub fn create_app_with_source(config: Config, source: content::DynContentSource) -> Router {
    let app_state = AppState {
        views: views::ViewRegistry::new(config.server.max_views),
        source,
        keyboard: gallery::KeyboardHub::new(),
        config,
    };

    Router::new()
        .route("/views", axum::routing::post(views::create_view_handler))
        .route(
            "/views/{view_id}",
            axum::routing::get(views::get_view_handler).delete(views::delete_view_handler),
        )
        .route(
            "/views/{view_id}/navigate",
            axum::routing::post(views::navigate_handler),
        )
        .route(
            "/views/{view_id}/commands",
            axum::routing::post(views::command_handler),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    let user_agent = request
                        .headers()
                        .get("user-agent")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");

                    tracing::info!(
                        target: "access_log",
                        method = %request.method(),
                        path = %request.uri().path(),
                        user_agent = %user_agent,
                        "request"
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::info!(
                            target: "access_log",
                            status = %response.status(),
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state)
}
