use dotenvy::dotenv;
use lex_dashboard::config::get_configuration;
use lex_dashboard::services::metrics::init_metrics;
use lex_dashboard::startup::Application;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // OTLP export only when a collector endpoint is configured.
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("lex-dashboard", "info", otlp_endpoint.as_deref());

    init_metrics();

    let app = Application::build(configuration)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start application: {}", e))?;

    info!("Starting lex-dashboard on port {}", app.port());
    app.run_until_stopped()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
