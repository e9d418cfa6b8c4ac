//! Intent - What kind of question was asked

use serde::{Deserialize, Serialize};

/// Classification of a user question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// Cast a hexagram and interpret it
    Divination,
    /// Answer in the persona's voice (background, contact, ...)
    Persona,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Divination => "DIVINATION",
            Intent::Persona => "PERSONA",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "divination" => Ok(Intent::Divination),
            "persona" => Ok(Intent::Persona),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}
