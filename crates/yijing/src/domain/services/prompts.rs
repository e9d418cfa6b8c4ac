//! Prompts and fallback texts for the LLM collaborator

use crate::domain::entities::{DivinationResult, Hexagram};

/// System prompt for the interpretation call
pub const INTERPRETER_SYSTEM_PROMPT: &str = "你是易經占卜陳老師。";

/// Persona reply when no LLM is configured
pub const PERSONA_UNAVAILABLE: &str = "抱歉，AI 功能暫時無法使用。";

/// Persona reply when the LLM call fails
pub const PERSONA_FAILED: &str = "抱歉，我目前無法回答這個問題。";

const INTERPRETATION_UNAVAILABLE: &str = "（AI 解讀功能需要 OPENAI_API_KEY）

根據卦象，這是一個關於變化與選擇的時刻。建議您保持內心平靜，審慎思考後再做決定。";

/// User prompt asking for an interpretation of a reading
pub fn interpretation_prompt(question: &str, result: &DivinationResult) -> String {
    let hexagram = result.hexagram;
    let upper = result.upper;
    let lower = result.lower;

    format!(
        "
你是易經占卜陳老師，請根據以下卦象為來訪者提供專業解讀。

【來訪者問題】
{question}

【卦象資訊】
本卦：第 {num} 卦 - {name}
上卦：{upper_name}（{upper_element}）{upper_symbol}
下卦：{lower_name}（{lower_element}）{lower_symbol}
卦義：{meaning}
運勢：{fortune}
變爻：第 {line} 爻

請用溫和、專業的語氣提供解讀，包含實際建議（3-5點），字數控制在 300-400 字。
",
        num = hexagram.number,
        name = hexagram.name,
        upper_name = upper.name,
        upper_element = upper.element,
        upper_symbol = upper.symbol,
        lower_name = lower.name,
        lower_element = lower.element,
        lower_symbol = lower.symbol,
        meaning = hexagram.meaning,
        fortune = hexagram.fortune,
        line = result.changing_line,
    )
}

/// Interpretation when no LLM is configured
pub fn interpretation_unavailable() -> String {
    INTERPRETATION_UNAVAILABLE.to_string()
}

/// Interpretation when the LLM call fails
pub fn interpretation_failed(hexagram: &Hexagram) -> String {
    format!(
        "根據 {} 的卦象，建議您保持{}的心態。",
        hexagram.name, hexagram.fortune
    )
}
