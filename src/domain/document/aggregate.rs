//! Document Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{Genre, SegmentationSource, Title, Unit};
use crate::domain::patterns;

/// 推断标题时允许的最长行
const MAX_INFERRED_TITLE_CHARS: usize = 80;

/// Document 聚合根
///
/// 不变量:
/// - 每次输入构造一次，之后只读
/// - units 顺序等于源文本顺序，可按 0 起始下标稳定寻址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    genre: Genre,
    title: Title,
    units: Vec<Unit>,
    metadata: DocumentMetadata,
}

/// 文档元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub word_count: usize,
    pub unit_count: usize,
    pub source: SegmentationSource,
}

impl Document {
    pub fn new(genre: Genre, title: Title, units: Vec<Unit>, source: SegmentationSource) -> Self {
        let metadata = DocumentMetadata {
            word_count: units.iter().map(Unit::word_count).sum(),
            unit_count: units.len(),
            source,
        };
        Self {
            genre,
            title,
            units,
            metadata,
        }
    }

    // Getters
    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

/// 从文本开头推断标题
///
/// 取第一个非空、不超过 80 字符、含字母且不是结构标题的行；否则返回 `Untitled`。
pub fn infer_title(text: &str) -> Title {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(20)
        .find(|line| {
            line.chars().count() <= MAX_INFERRED_TITLE_CHARS
                && line.chars().any(char::is_alphabetic)
                && !patterns::is_play_heading(line)
                && !patterns::is_chapter_heading(line)
                && !patterns::is_page_marker(line)
        })
        .and_then(|line| Title::new(line).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::UNTITLED;

    #[test]
    fn test_metadata_is_derived_from_units() {
        let units = vec![
            Unit::new("Page 1", "one two three "),
            Unit::new("Page 2", "four five"),
        ];
        let doc = Document::new(
            Genre::Generic,
            Title::new("Notes").unwrap(),
            units,
            SegmentationSource::Paginated,
        );
        assert_eq!(doc.metadata().word_count, 5);
        assert_eq!(doc.metadata().unit_count, 2);
        assert_eq!(doc.unit(1).unwrap().title(), "Page 2");
        assert!(doc.unit(2).is_none());
    }

    #[test]
    fn test_infer_title_skips_headings() {
        let text = "\n\nACT I\nTHE TRAGEDY OF HAMLET\nSCENE I. Elsinore.";
        assert_eq!(infer_title(text).as_str(), "THE TRAGEDY OF HAMLET");
    }

    #[test]
    fn test_infer_title_falls_back_to_untitled() {
        assert_eq!(infer_title("").as_str(), UNTITLED);
        assert_eq!(infer_title("CHAPTER I\n12 34\n").as_str(), UNTITLED);
        assert_eq!(infer_title(&"word ".repeat(40)).as_str(), UNTITLED);
    }
}
