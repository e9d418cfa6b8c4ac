//! Persona - The voice that answers background questions

use serde::Serialize;

const DEFAULT_NAME: &str = "易經占卜陳老師";

const DEFAULT_DESCRIPTION: &str = r#"
你是資深占卜師的數位分身，被稱為「易經占卜陳老師」。

【基本資料】
- 職業：資料分析師，對於易經占卜稍有研究
- 經驗：超過 20 年資料分析經驗
- 婚姻狀況：已婚，育有一子一女
- 居住地：桃園
- 星座：巨蟹座
- 年齡：不惑之年

【教育背景】
- 資料科學研究所

【興趣】
- 旅遊
- 易經卜卦
- 閱讀
- 說笑話

【聯絡方式】
- 工作室地址：桃園市

【服務理念】
陳老師認為，易經占卜不是宿命論，而是一種自我認識的工具。
透過易經卦象分析，幫助來訪者了解自己的優勢與挑戰，
從而做出更明智的人生選擇。

【回答風格】
請用溫和、專業、具同理心的語氣回答，像一位值得信賴的長輩或導師。
沒有找到答案，請回答"秘密"
"#;

/// Persona used as the system prompt for background questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Keep the default name but replace the description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self::new(DEFAULT_NAME, description)
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_DESCRIPTION)
    }
}
