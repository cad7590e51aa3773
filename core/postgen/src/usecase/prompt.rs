//! プロンプトビルダー
//!
//! モデルに送るメッセージ列を決定的に組み立てる。
//! [system persona] + history + [format contract + topic] の順で、history は
//! 与えられた順のまま（重複排除・並べ替え・切り詰めはしない）。

use crate::domain::Topic;
use common::msg::ChatMessage;

/// 投稿に使う言語ミックス（persona と format contract の両方に埋め込む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMix {
    /// 表示名（例: "Hinglish"）
    pub label: String,
    pub primary: String,
    pub secondary: String,
    /// primary 言語の割合（%）。secondary は残り。
    pub primary_percent: u8,
}

impl Default for LanguageMix {
    fn default() -> Self {
        Self {
            label: "Hinglish".to_string(),
            primary: "English".to_string(),
            secondary: "Hindi".to_string(),
            primary_percent: 70,
        }
    }
}

impl LanguageMix {
    /// 例: "Hinglish (70% English, 30% Hindi)"
    pub fn describe(&self) -> String {
        format!(
            "{} ({}% {}, {}% {})",
            self.label,
            self.primary_percent,
            self.primary,
            100 - self.primary_percent,
            self.secondary
        )
    }
}

/// プロンプトビルダー（入力と設定の純関数）
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    mix: LanguageMix,
}

impl PromptBuilder {
    pub fn new(mix: LanguageMix) -> Self {
        Self { mix }
    }

    /// 固定の system persona メッセージ
    pub fn system_message(&self) -> ChatMessage {
        ChatMessage::system(format!(
            "You are a professional social media content creator specializing in {} content. \
             Your task is to create engaging, professional posts according to the user's requirements.",
            self.mix.label
        ))
    }

    /// 出力フォーマット契約（スキーマ説明 + 実例）
    pub fn format_contract(&self) -> String {
        format!(
            r##"You are a professional social media content creator specializing in {mix} content.

IMPORTANT: You must ALWAYS return a valid JSON object with exactly 4 posts. Each post must follow the EXACT structure below.

REQUIRED JSON STRUCTURE:
```json
{{
  "posts": [
    {{
      "title": "Your Post Title In Title Case",
      "content": "First Paragraph (2-3 lines)\n\nSecond Paragraph (2-3 lines)\n\nThird Paragraph (2-3 lines)\n\nFourth Paragraph (2-3 lines)\n\n#Hashtag1 #Hashtag2 #Hashtag3",
      "post": false,
      "schedule": null
    }}
  ]
}}
```

MANDATORY POST REQUIREMENTS:
1. TITLE:
   - Must be in Title Case
   - 5-8 words maximum
   - Must be eye-catching
   - No emojis in title

2. CONTENT:
   - Exactly 4 paragraphs
   - 2-3 lines per paragraph
   - Each paragraph must be separated by \n\n
   - Total length: 200-300 words
   - Must use {mix}

3. HASHTAGS:
   - 3-5 relevant hashtags
   - Must be at the end of content
   - Must be in Title Case
   - Must be separated by spaces
   - Must start with #

4. LANGUAGE MIX:
   - Use natural {label}
   - Avoid pure {secondary} or pure {primary}
   - Keep it conversational
   - Make it relatable
   - No technical jargon

EXAMPLE POST:
```json
{{
  "posts": [
    {{
      "title": "The Future Of AI Is Here",
      "content": "Aaj Main Aapke Saath Share Karna Chahta Hoon Kuch Amazing Insights About Artificial Intelligence.\n\nAI Ne Hamari Life Ko Kitna Transform Kar Diya Hai, Ye To Aap Bhi Experience Kar Rahe Hain. From Smartphones To Smart Homes, Everything Is Getting Smarter.\n\nBut The Real Question Is: Are We Ready For This Change? Main Sochta Hoon Ki We Need To Adapt And Learn.\n\nLet's Discuss How We Can Make The Most Of This Technological Revolution. Share Your Thoughts In The Comments!\n\n#ArtificialIntelligence #FutureOfTech #Innovation #DigitalTransformation #TechTrends",
      "post": false,
      "schedule": null
    }}
  ]
}}
```

Remember:
- ALWAYS return valid JSON
- ALWAYS include exactly 4 posts
- ALWAYS follow the exact structure
- ALWAYS use Title Case
- ALWAYS separate paragraphs with \n\n
- ALWAYS include hashtags
- NEVER use pure {secondary} or pure {primary}
- NEVER exceed 300 words per post
- NEVER use technical jargon
- NEVER skip any required fields"##,
            mix = self.mix.describe(),
            label = self.mix.label,
            primary = self.mix.primary,
            secondary = self.mix.secondary,
        )
    }

    /// user メッセージ（format contract + トピック）
    pub fn user_message(&self, topic: &Topic) -> ChatMessage {
        ChatMessage::user(format!("{}\n\nTopic: {}", self.format_contract(), topic))
    }

    /// [system] + history + [user] のメッセージ列を組み立てる
    pub fn assemble(&self, topic: &Topic, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(self.system_message());
        messages.extend_from_slice(history);
        messages.push(self.user_message(topic));
        messages
    }
}
