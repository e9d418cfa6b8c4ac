//! Yijing Oracle API Server
//!
//! HTTP surface over the `yijing` domain crate:
//!
//! - `application/`: chat use case with collaborator fallbacks
//! - `adapters/`: OpenAI implementation of the `LlmProvider` port
//! - `routes/`, `models/`: axum handlers and wire DTOs
//! - `config`, `logging`: environment configuration and tracing setup

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod logging;
pub mod models;
pub mod routes;

use adapters::OpenAiProvider;
use application::OracleService;
use config::ServerConfig;
use yijing::{DomainError, LlmProvider, Persona};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<OracleService>,
}

impl AppState {
    pub fn new(oracle: OracleService) -> Self {
        Self {
            oracle: Arc::new(oracle),
        }
    }

    /// Wire the OpenAI adapter in when a key is configured
    pub fn from_config(config: &ServerConfig, persona: Persona) -> Result<Self, DomainError> {
        let llm: Option<Arc<dyn LlmProvider>> = match &config.openai {
            Some(openai) => {
                let provider = OpenAiProvider::new(openai)?;
                tracing::info!("🤖 OpenAI enabled (model: {})", provider.model_id());
                Some(Arc::new(provider))
            }
            None => {
                tracing::warn!("⚠️  No OPENAI_API_KEY set - AI interpretation disabled");
                None
            }
        };

        Ok(Self::new(OracleService::new(llm, persona)))
    }
}

/// Build the full router: API, OpenAPI docs, static front-end
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::chat::router())
        .merge(routes::health::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
