use lex_dashboard::config::{ClientMode, Settings};
use lex_dashboard::startup::Application;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the dashboard on a random port with the given client mode.
    pub async fn spawn(mode: ClientMode) -> Self {
        let mut settings = Settings::default();
        settings.server.host = "127.0.0.1".to_string();
        settings.server.port = 0; // Random port for testing
        settings.documents.mode = mode;

        Self::spawn_with(settings).await
    }

    /// Spawn the dashboard in remote mode against the given document API.
    pub async fn spawn_remote(base_url: String) -> Self {
        let mut settings = Settings::default();
        settings.server.host = "127.0.0.1".to_string();
        settings.server.port = 0;
        settings.documents.mode = ClientMode::Remote;
        settings.documents.base_url = base_url;
        settings.documents.timeout_seconds = 5;

        Self::spawn_with(settings).await
    }

    pub async fn spawn_with(settings: Settings) -> Self {
        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
        }
    }
}

/// Serve a stub document API built from a plain router; returns its base URL.
pub async fn spawn_stub_api(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener
        .local_addr()
        .expect("Stub listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    format!("http://{}", addr)
}
