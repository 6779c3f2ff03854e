use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use lvc_reporter::application::services::{
    GeneratorConfig, ReportGenerator, ReportService, select_model,
};
use lvc_reporter::infrastructure::archive::ZipPhotoBundler;
use lvc_reporter::infrastructure::filesystem::WalkDirLocator;
use lvc_reporter::infrastructure::llm::LlmClientFactory;
use lvc_reporter::infrastructure::observability::init_tracing;
use lvc_reporter::infrastructure::text_processing::PdfAdapter;
use lvc_reporter::presentation::{AppState, Environment, SessionStore, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&settings.logging);
    tracing::info!(environment = %environment, "Configuration loaded");

    let root_directory = settings
        .documents
        .root_directory
        .canonicalize()
        .with_context(|| {
            format!(
                "document root not found: {}",
                settings.documents.root_directory.display()
            )
        })?;

    let llm_client = LlmClientFactory::create(&settings.llm)?;

    let primary_model = if settings.llm.auto_select_model {
        select_model(
            llm_client.as_ref(),
            &settings.llm.primary_model,
            &settings.llm.fallback_model,
        )
        .await
    } else {
        settings.llm.primary_model.clone()
    };

    let generator_config = GeneratorConfig {
        primary_model,
        fallback_model: settings.llm.fallback_model.clone(),
        prompt_template: settings.llm.prompt_template()?,
        max_prompt_chars: settings.llm.max_prompt_chars,
        min_interval: Duration::from_millis(settings.llm.min_interval_ms),
    };

    tracing::info!(
        primary_model = %generator_config.primary_model,
        fallback_model = %generator_config.fallback_model,
        root = %root_directory.display(),
        "Report pipeline ready"
    );

    let report_service = Arc::new(ReportService::new(
        root_directory,
        Arc::new(WalkDirLocator::default()),
        Arc::new(PdfAdapter::new()),
        ReportGenerator::new(llm_client, generator_config),
        Arc::new(ZipPhotoBundler::new()),
    ));

    let state = AppState {
        report_service,
        sessions: Arc::new(SessionStore::with_idle_timeout(Duration::from_secs(
            settings.server.session_idle_timeout_secs,
        ))),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
