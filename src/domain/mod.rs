//! Domain Layer - 领域层
//!
//! 文档结构推断的纯函数部分：
//! - Document Context: 文档、单元、台词块
//! - 体裁分类、台词解析、结构分段、分页兜底、文本清理

pub mod document;
pub mod genre_classifier;
pub mod patterns;

mod dialogue_parser;
mod pagination;
mod structure_segmenter;
mod text_cleaner;

pub use dialogue_parser::{is_stage_direction, parse_dialogue};
pub use genre_classifier::{
    bounded_prefix, classify, classify_with_report, ClassificationReport, ClassifierConfig,
    ScoreState, SignalCounts,
};
pub use pagination::{paginate, DEFAULT_WORDS_PER_PAGE};
pub use structure_segmenter::{
    segment, segment_novel, segment_play, split_novel, split_play, Segmentation, SegmenterConfig,
};
pub use text_cleaner::clean_text;
