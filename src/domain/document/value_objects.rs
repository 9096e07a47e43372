//! Document Context - Value Objects

use serde::{Deserialize, Serialize};

/// 文档结构体裁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    /// 剧本（幕 / 场 / 台词）
    Play,
    /// 小说（章 / 部 / 卷）
    Novel,
    /// 无法识别结构的通用文档
    Generic,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Novel => "novel",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "play" => Ok(Self::Play),
            "novel" => Ok(Self::Novel),
            "generic" => Ok(Self::Generic),
            other => Err(format!("unknown genre: {}", other)),
        }
    }
}

/// 无法推断时的默认标题
pub const UNTITLED: &str = "Untitled";

/// 文档标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    /// 标题最大长度（字符）
    pub const MAX_CHARS: usize = 200;

    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err("title must not be empty");
        }
        if title.chars().count() > Self::MAX_CHARS {
            return Err("title must not exceed 200 characters");
        }
        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Title {
    fn default() -> Self {
        Self(UNTITLED.to_string())
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单元来源：记录是哪条路径产生了最终的分段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationSource {
    /// 外部结构化服务
    Oracle,
    /// 基于标题的确定性分段
    Structural,
    /// 按字数分页兜底
    Paginated,
}
