//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, HexagramData};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::chat,
        super::health::health,
    ),
    info(
        title = "Yijing Oracle API",
        version = "0.1.0",
        description = "易經占卜 - Casts a hexagram from three numbers and interprets it, or answers questions about the diviner persona.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat - Divination and persona questions"),
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            HexagramData,
            ErrorResponse,
            HealthResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/chat"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }
}
