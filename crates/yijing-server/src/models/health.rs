//! Health - Liveness and collaborator status

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok"
    #[schema(example = "ok")]
    pub status: String,
    /// "enabled" when an OpenAI key is configured, otherwise "disabled"
    #[schema(example = "enabled")]
    pub openai: String,
}

impl HealthResponse {
    pub fn new(llm_enabled: bool) -> Self {
        Self {
            status: "ok".to_string(),
            openai: if llm_enabled { "enabled" } else { "disabled" }.to_string(),
        }
    }
}
