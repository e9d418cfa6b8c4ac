use anyhow::Context;
use tokio::net::TcpListener;

use yijing::Persona;
use yijing_server::{app, config::ServerConfig, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply
    let dotenv = dotenvy::dotenv();
    logging::init();

    tracing::info!("🔮 Yijing oracle initializing...");
    if let Ok(path) = dotenv {
        tracing::info!("📄 Loaded environment from {}", path.display());
    }

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let persona = match &config.persona_file {
        Some(path) => {
            let description = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read persona file {:?}", path))?;
            tracing::info!("🎭 Persona loaded from {:?}", path);
            Persona::with_description(description)
        }
        None => Persona::default(),
    };

    let state = AppState::from_config(&config, persona).context("Failed to set up LLM client")?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "⚠️  Static directory {:?} not found - front-end will 404",
            config.static_dir
        );
    }

    let router = app(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Yijing oracle ready on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Yijing oracle stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
