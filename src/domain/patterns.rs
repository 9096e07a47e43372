//! 结构标题识别
//!
//! 剧本与小说分段器、标题推断共享的行级模式。
//! 数字词表是有限枚举（英文数词 ONE..TWELVE），不要泛化。

use once_cell::sync::Lazy;
use regex::Regex;

/// 英文数词（有限枚举）
pub(crate) const NUMBER_WORDS: &str =
    "ONE|TWO|THREE|FOUR|FIVE|SIX|SEVEN|EIGHT|NINE|TEN|ELEVEN|TWELVE";

/// 剧本标题：ACT / SCENE + 罗马或阿拉伯数字，或 PROLOGUE / EPILOGUE
static PLAY_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:ACT|SCENE)\s+([IVXLC]+|\d+)|PROLOGUE|EPILOGUE)\b[.,:]?\s*(.*)$",
    )
    .expect("play heading pattern")
});

/// 小说标题：CHAPTER / PART / BOOK / VOLUME + 数字或数词
static CHAPTER_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:CHAPTER|PART|BOOK|VOLUME)\s+([IVXLC]+|\d+|{})\b[.:]?\s*(.*)$",
        NUMBER_WORDS
    ))
    .expect("chapter heading pattern")
});

/// 合法的罗马数字（1..=399）
static ROMAN_NUMERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^C{0,3}(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})$").expect("roman numeral pattern")
});

/// 无编号的命名标题：全大写字母、空格、撇号、句点
static NAMED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z '.]{4,59}$").expect("named heading pattern"));

/// 页码残留，如 `[PAGE 12]`、`Page 12`、`12`
static PAGE_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\[\s*page\s+\d+\s*\]|page\s+\d+|\d+)$").expect("page marker pattern")
});

/// 编号只由 I/V/X/L/C 组成时必须是合法罗马数字（排除 `Act ill` 这类散文）
fn numeral_is_well_formed(numeral: &str) -> bool {
    let roman_letters_only = numeral
        .chars()
        .all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X' | 'L' | 'C'));
    !roman_letters_only || ROMAN_NUMERAL_RE.is_match(numeral)
}

fn matches_numbered_heading(re: &Regex, line: &str) -> bool {
    match re.captures(line) {
        Some(caps) => caps
            .get(1)
            .map_or(true, |numeral| numeral_is_well_formed(numeral.as_str())),
        None => false,
    }
}

/// 是否为剧本结构标题（调用方负责 trim）
pub fn is_play_heading(line: &str) -> bool {
    matches_numbered_heading(&PLAY_HEADING_RE, line)
}

/// 是否为带编号的小说章节标题
pub fn is_chapter_heading(line: &str) -> bool {
    matches_numbered_heading(&CHAPTER_HEADING_RE, line)
}

/// 是否为无编号的命名标题
pub fn is_named_heading(line: &str) -> bool {
    NAMED_HEADING_RE.is_match(line) && line.chars().any(|c| c.is_ascii_uppercase())
}

/// 是否为小说分段使用的任一类标题
pub fn is_novel_heading(line: &str) -> bool {
    is_chapter_heading(line) || is_named_heading(line)
}

/// 是否为页码残留行
pub fn is_page_marker(line: &str) -> bool {
    PAGE_MARKER_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_headings() {
        assert!(is_play_heading("ACT I"));
        assert!(is_play_heading("Act II."));
        assert!(is_play_heading("SCENE 3: A room in the castle"));
        assert!(is_play_heading("PROLOGUE"));
        assert!(is_play_heading("Epilogue."));
        assert!(!is_play_heading("ACT Ivory tower"));
        assert!(!is_play_heading("The act itself"));
        assert!(!is_play_heading("ACTS OF LOVE"));
    }

    #[test]
    fn test_malformed_roman_numerals_are_prose() {
        assert!(!is_play_heading("Act ill, and they will think you guilty."));
        assert!(!is_play_heading("Scene civil unrest"));
        assert!(!is_play_heading("ACT IIII"));
        assert!(is_play_heading("ACT XIV"));
        assert!(is_play_heading("Scene iv. A heath."));
        assert!(!is_chapter_heading("Part civil war, part farce."));
        assert!(is_chapter_heading("CHAPTER XLII"));
        assert!(is_chapter_heading("Chapter 400"));
    }

    #[test]
    fn test_chapter_headings() {
        assert!(is_chapter_heading("CHAPTER I"));
        assert!(is_chapter_heading("Chapter 12. The Storm"));
        assert!(is_chapter_heading("Part One"));
        assert!(is_chapter_heading("BOOK IV: The Return"));
        assert!(!is_chapter_heading("Part of the problem was the weather."));
        assert!(!is_chapter_heading("Chapter Thirteen"));
    }

    #[test]
    fn test_named_headings() {
        assert!(is_named_heading("THE RETURN"));
        assert!(is_named_heading("MRS. DALLOWAY'S PARTY"));
        assert!(!is_named_heading("THE"));
        assert!(!is_named_heading("The Return"));
        assert!(!is_named_heading("...."));
        assert!(is_novel_heading("VOLUME II"));
    }

    #[test]
    fn test_page_markers() {
        assert!(is_page_marker("[PAGE 4]"));
        assert!(is_page_marker("Page 12"));
        assert!(is_page_marker("187"));
        assert!(!is_page_marker("Page one of the letter"));
    }
}
