//! Chat - Request/Response DTOs for /api/chat

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use yijing::{DrawNumbers, Hexagram, Intent};

/// Chat request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The question; required and non-empty
    #[serde(default)]
    #[schema(example = "我今年的事業運勢如何？")]
    pub message: Option<String>,
    /// Three client-drawn numbers. Anything other than an array of exactly
    /// three integers is ignored and the server draws its own.
    #[serde(default)]
    #[schema(value_type = Option<Vec<i64>>, example = json!([123, 456, 789]))]
    pub numbers: Option<serde_json::Value>,
}

impl ChatRequest {
    /// Supplied numbers, if well-formed
    pub fn draw_numbers(&self) -> Option<DrawNumbers> {
        self.numbers.as_ref().and_then(DrawNumbers::from_json)
    }
}

/// Resolved hexagram summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HexagramData {
    #[schema(example = 1)]
    pub num: u8,
    #[schema(example = "乾為天")]
    pub name: String,
    pub meaning: String,
    #[schema(example = "大吉")]
    pub fortune: String,
}

impl From<&Hexagram> for HexagramData {
    fn from(hexagram: &Hexagram) -> Self {
        Self {
            num: hexagram.number,
            name: hexagram.name.to_string(),
            meaning: hexagram.meaning.to_string(),
            fortune: hexagram.fortune.to_string(),
        }
    }
}

/// Chat response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    #[schema(value_type = String, example = "DIVINATION")]
    pub intent: Intent,
    /// Only present for DIVINATION
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexagram_data: Option<HexagramData>,
}

/// Error body for 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "請輸入問題")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
