//! Response Formatter - Final user-facing reply text

use crate::domain::entities::DivinationResult;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render a reading and its interpretation inside the decorative template
pub fn format_divination(question: &str, result: &DivinationResult, interpretation: &str) -> String {
    let hexagram = result.hexagram;
    let upper = result.upper;
    let lower = result.lower;

    format!(
        "╔═════════════════════════════════╗
║  🔮  易經占卜陳老師為您解卦  🔮 ║
╚═════════════════════════════════╝

【您的問題】
{question}

【起卦數字】
{numbers}

【卦象資訊】
{RULE}
本卦：第 {num} 卦 - {name}
上卦：{upper_name} {upper_symbol} （象徵{upper_element}）
下卦：{lower_name} {lower_symbol} （象徵{lower_element}）

卦義：{meaning}
運勢：{fortune}
動爻：第 {line} 爻
{RULE}

【陳老師解讀】
{interpretation}

{RULE}
💡 提醒：占卜是一種自我認識的工具，最終的決定權在您手中。
╚═════════════════════════════════════════════════════╝
",
        numbers = result.numbers,
        num = hexagram.number,
        name = hexagram.name,
        upper_name = upper.name,
        upper_symbol = upper.symbol,
        upper_element = upper.element,
        lower_name = lower.name,
        lower_symbol = lower.symbol,
        lower_element = lower.element,
        meaning = hexagram.meaning,
        fortune = hexagram.fortune,
        line = result.changing_line,
    )
}

/// Persona replies go out as-is
pub fn format_persona(reply: &str) -> String {
    reply.to_string()
}
