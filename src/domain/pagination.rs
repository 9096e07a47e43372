//! 分页兜底
//!
//! 按固定字数把任意文本切成页。每页内容是源文本的连续片段，
//! 从本页第一个词开始，到下一页第一个词之前结束，因此各页拼接后等于 trim 后的源文本。

use super::dialogue_parser::parse_dialogue;
use super::document::{Genre, Unit};

/// 默认每页字数
pub const DEFAULT_WORDS_PER_PAGE: usize = 600;

/// 每个词在文本中的起始字节偏移
fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;
    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(offset);
            in_word = true;
        }
    }
    starts
}

/// 按字数分页
///
/// - 页数 = ceil(总词数 / words_per_page)，最后一页可以更短
/// - 标题为 `Page <n>`（从 1 开始）
/// - 剧本体裁的每页额外做一次台词解析
/// - 空文本返回空列表；`words_per_page` 为 0 时按 1 处理
pub fn paginate(text: &str, words_per_page: usize, genre: Genre) -> Vec<Unit> {
    let source = text.trim();
    let starts = word_starts(source);
    if starts.is_empty() {
        return Vec::new();
    }

    let per_page = words_per_page.max(1);
    let page_count = starts.len().div_ceil(per_page);
    let mut pages = Vec::with_capacity(page_count);

    for page in 0..page_count {
        let start = starts[page * per_page];
        let end = starts
            .get((page + 1) * per_page)
            .copied()
            .unwrap_or(source.len());
        let content = &source[start..end];

        let unit = Unit::new(format!("Page {}", page + 1), content);
        let unit = match genre {
            Genre::Play => unit.with_dialogue(parse_dialogue(content)),
            Genre::Novel | Genre::Generic => unit,
        };
        pages.push(unit);
    }

    tracing::debug!(
        genre = %genre,
        words = starts.len(),
        pages = pages.len(),
        "Paginated text"
    );

    pages
}
