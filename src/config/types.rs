//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::DEFAULT_MAX_INPUT_BYTES;
use crate::domain::genre_classifier::DEFAULT_PREFIX_CHARS;
use crate::domain::{ClassifierConfig, SegmenterConfig, DEFAULT_WORDS_PER_PAGE};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 分类与分段配置
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// 外部结构化服务配置
    #[serde(default)]
    pub oracle: OracleConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 分类与分段配置
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationConfig {
    /// 分类器只看前 N 个字符
    #[serde(default = "default_classifier_prefix_chars")]
    pub classifier_prefix_chars: usize,

    /// 分页兜底时每页字数
    #[serde(default = "default_words_per_page")]
    pub words_per_page: usize,

    /// 剧本段正文最小长度（不含）
    #[serde(default = "default_play_min_section_chars")]
    pub play_min_section_chars: usize,

    /// 小说段正文最小长度（不含）
    #[serde(default = "default_novel_min_section_chars")]
    pub novel_min_section_chars: usize,

    /// 是否在分类前清理文本（换行、页码标记、多余空行）
    #[serde(default = "default_clean_input")]
    pub clean_input: bool,

    /// 输入上限（字节）
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

fn default_classifier_prefix_chars() -> usize {
    DEFAULT_PREFIX_CHARS
}

fn default_words_per_page() -> usize {
    DEFAULT_WORDS_PER_PAGE
}

fn default_play_min_section_chars() -> usize {
    30
}

fn default_novel_min_section_chars() -> usize {
    100
}

fn default_clean_input() -> bool {
    true
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            classifier_prefix_chars: default_classifier_prefix_chars(),
            words_per_page: default_words_per_page(),
            play_min_section_chars: default_play_min_section_chars(),
            novel_min_section_chars: default_novel_min_section_chars(),
            clean_input: default_clean_input(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl SegmentationConfig {
    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            prefix_chars: self.classifier_prefix_chars,
        }
    }

    pub fn segmenter(&self) -> SegmenterConfig {
        SegmenterConfig {
            words_per_page: self.words_per_page,
            play_min_section_chars: self.play_min_section_chars,
            novel_min_section_chars: self.novel_min_section_chars,
        }
    }
}

/// 外部结构化服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// 是否启用
    #[serde(default)]
    pub enabled: bool,

    /// 服务基础 URL
    #[serde(default = "default_oracle_url")]
    pub url: String,

    /// 单次尝试超时（秒）
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,

    /// 发送给服务的最大字符数
    #[serde(default = "default_oracle_max_prefix_chars")]
    pub max_prefix_chars: usize,
}

fn default_oracle_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_oracle_timeout() -> u64 {
    12
}

fn default_oracle_max_prefix_chars() -> usize {
    30_000
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_oracle_url(),
            timeout_secs: default_oracle_timeout(),
            max_prefix_chars: default_oracle_max_prefix_chars(),
        }
    }
}

impl OracleConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
