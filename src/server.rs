//! HTTP server: SSR of the landing page plus the compiled bundle and assets

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::app::{App, shell};
use crate::core::config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to load leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router
pub fn build_router(leptos_options: LeptosOptions, config: &Config) -> Router {
    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);

    let mut pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root));
    if config.precompressed_assets {
        pkg_service = pkg_service.precompressed_br().precompressed_gzip();
    }

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http());

    if config.compression {
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    }
}

/// Load configuration, initialise logging and serve until shutdown
pub async fn run() -> Result<(), ServerError> {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        log_filter = %config.log_filter,
        compression = config.compression,
        precompressed_assets = config.precompressed_assets,
        "Config loaded"
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = build_router(leptos_options, &config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidFlag {
            var: "COMPRESSION",
            value: "sometimes".to_string(),
        }
        .into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration: COMPRESSION"));
    }

    #[test]
    fn test_log_filter_error_converts() {
        let parse = EnvFilter::try_new("iraforce_site=loudest").unwrap_err();
        let err: ServerError = parse.into();
        assert!(matches!(err, ServerError::LogFilter(_)));
    }
}
