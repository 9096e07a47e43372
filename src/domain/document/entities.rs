//! Document Context - Entities

use serde::{Deserialize, Serialize};

/// 结构单元 - 文档的顶层划分（幕 / 章 / 页）
///
/// 不变量:
/// - 单元顺序等于源文本顺序
/// - content 是源文本（或生成页）的连续片段，单元之间不重叠
/// - 只有剧本单元携带 dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    title: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dialogue: Option<Vec<Block>>,
}

impl Unit {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            dialogue: None,
        }
    }

    pub fn with_dialogue(mut self, dialogue: Vec<Block>) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn dialogue(&self) -> Option<&[Block]> {
        self.dialogue.as_deref()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// 剧本单元内的块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// 舞台指示，如 `[Aside]`（括号已去除）
    StageDirection { text: String },
    /// 角色台词
    Speaker { name: String, lines: Vec<String> },
    /// 其它叙述行
    Narrative { text: String },
}

impl Block {
    pub fn stage_direction(text: impl Into<String>) -> Self {
        Self::StageDirection { text: text.into() }
    }

    pub fn speaker(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self::Speaker {
            name: name.into(),
            lines,
        }
    }

    pub fn narrative(text: impl Into<String>) -> Self {
        Self::Narrative { text: text.into() }
    }
}
