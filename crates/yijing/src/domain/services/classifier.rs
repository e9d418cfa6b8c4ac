//! Intent Classifier - Keyword scoring over the question text
//!
//! A bag-of-keywords heuristic, not NLP. Each keyword counts once if present.

use serde::Serialize;

use crate::domain::value_objects::Intent;

/// Terms that suggest the user wants a reading
pub const DIVINATION_KEYWORDS: [&str; 9] = [
    "占卜", "算命", "運勢", "吉凶", "未來", "發展", "如何", "是否", "會不會",
];

/// Terms that suggest a question about the persona itself
pub const PERSONA_KEYWORDS: [&str; 6] = ["陳老師", "你", "您", "介紹", "背景", "聯絡"];

/// Keyword hits for each intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntentScore {
    pub divination: usize,
    pub persona: usize,
}

impl IntentScore {
    /// Decide the intent from the scores.
    ///
    /// Ties, including 0:0, resolve to divination. Persona wins only with a
    /// strictly higher score.
    pub fn intent(&self) -> Intent {
        if self.divination > self.persona {
            Intent::Divination
        } else if self.persona > self.divination {
            Intent::Persona
        } else {
            Intent::Divination
        }
    }
}

/// Count keyword hits in the lower-cased text
pub fn score(text: &str) -> IntentScore {
    let lowered = text.to_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().filter(|kw| lowered.contains(*kw)).count();

    IntentScore {
        divination: hits(&DIVINATION_KEYWORDS),
        persona: hits(&PERSONA_KEYWORDS),
    }
}

/// Classify a question
pub fn classify(text: &str) -> Intent {
    let score = score(text);
    let intent = score.intent();
    tracing::debug!(
        divination = score.divination,
        persona = score.persona,
        %intent,
        "Classified question"
    );
    intent
}
