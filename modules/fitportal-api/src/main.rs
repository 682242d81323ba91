use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::signal;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fitportal_common::{Config, MasterData, NewsSource, StaticNewsSource};

mod components;
mod navigation;
mod pages;
mod rest;

pub struct AppState {
    pub masters: MasterData,
    pub news: Arc<dyn NewsSource>,
    pub news_timeout: Duration,
}

impl AppState {
    fn from_config(config: &Config) -> Result<Self> {
        let masters = match &config.masters_path {
            Some(path) => {
                info!(path = %path.display(), "Loading master data");
                MasterData::from_path(path)?
            }
            None => MasterData::builtin(),
        };

        let news = match &config.news_path {
            Some(path) => StaticNewsSource::from_path(path)?,
            None => StaticNewsSource::default(),
        };

        Ok(Self {
            masters,
            news: Arc::new(news),
            news_timeout: config.news_timeout,
        })
    }
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "ok" }))
        // App area
        .route("/", get(pages::app_root_page))
        .route("/news", get(pages::news_page))
        // Admin pages (Dioxus SSR)
        .route("/admin-entry", get(pages::admin_entry_page))
        .route("/admin/settings", get(pages::settings_page))
        .route("/admin/users", get(pages::users_page))
        // Mock API
        .route("/api/admin/masters", get(rest::api_admin_masters))
        .route("/api/ranking", get(rest::api_ranking))
        .with_state(state)
        // Always fresh: mock data only changes with a deploy
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // Logging layer: method + path only, no query params
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitportal=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let host = std::env::var("API_HOST").unwrap_or_else(|_| config.web_host.clone());
    let port = std::env::var("API_PORT").unwrap_or_else(|_| config.web_port.to_string());

    let addr = format!("{host}:{port}");
    info!("Fit Portal starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Fit Portal stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
