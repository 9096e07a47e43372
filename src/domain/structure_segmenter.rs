//! 结构分段器
//!
//! 剧本按 ACT / SCENE / PROLOGUE / EPILOGUE 切分，小说按 CHAPTER / PART / BOOK / VOLUME
//! 或全大写命名标题切分。两者共用同一个“累积-刷新”单遍循环：
//!
//! 1. 逐行累积到当前段
//! 2. 遇到标题行时，若当前段正文（trim 后）超过阈值则输出为单元
//! 3. 未达阈值的段不单独成单元，其文本并入下一个单元的开头（末段则并入上一个单元）
//!
//! 因此输出单元的内容首尾相接、互不重叠，拼接后等于 trim 后的源文本。
//! 分段失败时退回按字数分页。

use std::ops::Range;

use super::dialogue_parser::parse_dialogue;
use super::document::{Block, Genre, SegmentationSource, Unit};
use super::pagination::{paginate, DEFAULT_WORDS_PER_PAGE};
use super::patterns;

/// 剧本开头隐式段的标题
pub const PLAY_OPENING_TITLE: &str = "Opening";
/// 小说开头隐式段的标题
pub const NOVEL_OPENING_TITLE: &str = "Prologue";

/// 剧本段正文最小长度（不含）
pub const DEFAULT_PLAY_MIN_SECTION_CHARS: usize = 30;
/// 小说段正文最小长度（不含）
pub const DEFAULT_NOVEL_MIN_SECTION_CHARS: usize = 100;

/// 分段配置
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// 分页兜底时每页字数
    pub words_per_page: usize,
    /// 剧本段正文长度需大于此值才成为单元
    pub play_min_section_chars: usize,
    /// 小说段正文长度需大于此值才成为单元
    pub novel_min_section_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            play_min_section_chars: DEFAULT_PLAY_MIN_SECTION_CHARS,
            novel_min_section_chars: DEFAULT_NOVEL_MIN_SECTION_CHARS,
        }
    }
}

/// 分段结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub units: Vec<Unit>,
    pub source: SegmentationSource,
}

/// 已确认的段：标题 + 源文本字节区间
struct Section {
    title: String,
    span: Range<usize>,
}

/// 单遍扫描，按标题切段
///
/// `source` 必须已 trim。没有匹配到任何标题、或没有任何段达到阈值时返回空列表。
fn split_sections(
    source: &str,
    is_heading: fn(&str) -> bool,
    opening_title: &str,
    min_body_chars: usize,
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut title = opening_title.to_string();
    // 尚未归入任何单元的文本起点
    let mut pending_start = 0;
    // 当前段正文起点（标题行之后）
    let mut body_start = 0;
    let mut offset = 0;
    let mut saw_heading = false;

    let body_is_long = |body: &str| body.trim().chars().count() > min_body_chars;

    for line in source.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let heading = line.trim();
        if !is_heading(heading) {
            continue;
        }
        saw_heading = true;

        if body_is_long(&source[body_start..line_start]) {
            sections.push(Section {
                title: std::mem::take(&mut title),
                span: pending_start..line_start,
            });
            pending_start = line_start;
        }

        title = heading.to_string();
        body_start = offset;
    }

    if !saw_heading {
        return Vec::new();
    }

    if body_is_long(&source[body_start..]) {
        sections.push(Section {
            title,
            span: pending_start..source.len(),
        });
    } else if let Some(last) = sections.last_mut() {
        last.span.end = source.len();
    }

    sections
}

/// 剧本单元的台词解析：跳过结构标题行
fn play_dialogue(content: &str) -> Vec<Block> {
    let body = content
        .lines()
        .filter(|line| !patterns::is_play_heading(line.trim()))
        .collect::<Vec<_>>()
        .join("\n");
    parse_dialogue(&body)
}

/// 剧本分段（带配置）
pub fn segment_play(text: &str, config: &SegmenterConfig) -> Segmentation {
    let source = text.trim();
    let sections = split_sections(
        source,
        patterns::is_play_heading,
        PLAY_OPENING_TITLE,
        config.play_min_section_chars,
    );

    if sections.is_empty() {
        tracing::debug!("No play headings found, falling back to pagination");
        return Segmentation {
            units: paginate(source, config.words_per_page, Genre::Play),
            source: SegmentationSource::Paginated,
        };
    }

    let units = sections
        .into_iter()
        .map(|section| {
            let content = &source[section.span];
            Unit::new(section.title, content).with_dialogue(play_dialogue(content))
        })
        .collect::<Vec<_>>();

    tracing::debug!(units = units.len(), "Play segmented by headings");

    Segmentation {
        units,
        source: SegmentationSource::Structural,
    }
}

/// 小说分段（带配置）
///
/// 少于 2 个单元视为分段失败，退回分页。
pub fn segment_novel(text: &str, config: &SegmenterConfig) -> Segmentation {
    segment_prose(text, config, Genre::Novel)
}

/// 小说规则分段，`genre` 决定分页兜底时的体裁
fn segment_prose(text: &str, config: &SegmenterConfig, genre: Genre) -> Segmentation {
    let source = text.trim();
    let sections = split_sections(
        source,
        patterns::is_novel_heading,
        NOVEL_OPENING_TITLE,
        config.novel_min_section_chars,
    );

    if sections.len() < 2 {
        tracing::debug!(
            sections = sections.len(),
            "Too few novel headings, falling back to pagination"
        );
        return Segmentation {
            units: paginate(source, config.words_per_page, genre),
            source: SegmentationSource::Paginated,
        };
    }

    let units = sections
        .into_iter()
        .map(|section| Unit::new(section.title, &source[section.span]))
        .collect::<Vec<_>>();

    tracing::debug!(units = units.len(), "Novel segmented by headings");

    Segmentation {
        units,
        source: SegmentationSource::Structural,
    }
}

/// 按体裁选择分段器
///
/// generic 文档使用小说的标题规则（同样以分页兜底）。
pub fn segment(text: &str, genre: Genre, config: &SegmenterConfig) -> Segmentation {
    match genre {
        Genre::Play => segment_play(text, config),
        Genre::Novel => segment_novel(text, config),
        Genre::Generic => segment_prose(text, config, Genre::Generic),
    }
}

/// 剧本分段（默认配置）
pub fn split_play(text: &str) -> Vec<Unit> {
    segment_play(text, &SegmenterConfig::default()).units
}

/// 小说分段（默认配置）
pub fn split_novel(text: &str) -> Vec<Unit> {
    segment_novel(text, &SegmenterConfig::default()).units
}
