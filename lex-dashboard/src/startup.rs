use crate::config::Settings;
use crate::handlers;
use crate::middleware::metrics::metrics_middleware;
use crate::services::documents::{self, DocumentApi};
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use service_core::observability::REQUEST_ID_HEADER;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Matches the upload dialog hint ("Max 10MB") with headroom for form framing.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub documents: Arc<dyn DocumentApi>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let documents = documents::build_document_client(&settings.documents);
        tracing::info!(
            mode = %settings.documents.mode,
            base_url = %settings.documents.base_url,
            "Initialized document API client"
        );

        let state = AppState {
            settings: settings.clone(),
            documents,
        };

        let app = build_router(state);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr().map_err(AppError::from)?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard_page))
        .route("/health", get(handlers::app::health_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .route(
            "/upload",
            get(handlers::upload::upload_page).post(handlers::upload::upload_handler),
        )
        .route("/documents/:id", get(handlers::documents::document_page))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

fn static_dir() -> std::path::PathBuf {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    if base_path.ends_with("lex-dashboard") {
        base_path.join("static")
    } else {
        base_path.join("lex-dashboard").join("static")
    }
}
