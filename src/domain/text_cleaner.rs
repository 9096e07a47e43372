//! 文本清理
//!
//! 上游通常已经去掉页眉页脚，这里只兜底处理常见的提取残留，
//! 保证未清理的输入也能被正常分段。

use once_cell::sync::Lazy;
use regex::Regex;

use super::dialogue_parser::is_stage_direction;
use super::patterns;

static PAGE_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[\s*page\s+\d+\s*\]").expect("page marker pattern"));

static EXCESS_NEWLINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("excess newline pattern"));

/// 3..=40 字符的全大写行（角色名、标题），不参与断行拼接
static CAPS_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z\s\-']{3,40}$").expect("caps line pattern"));

/// 以这些字符结尾的行视为完整，不与下一行拼接
const LINE_ENDINGS: [char; 8] = ['.', '!', '?', ':', '"', '\'', ']', ')'];

/// 结构行：标题、页码、舞台指示、全大写行
fn is_structural_line(line: &str) -> bool {
    CAPS_LINE_RE.is_match(line)
        || patterns::is_play_heading(line)
        || patterns::is_novel_heading(line)
        || patterns::is_page_marker(line)
        || is_stage_direction(line)
}

/// `line` 是否在句中被断开、应与紧随的 `next` 拼接
fn breaks_mid_sentence(line: &str, next: &str) -> bool {
    let line = line.trim();
    let next = next.trim();
    !line.is_empty()
        && !next.is_empty()
        && !line.ends_with(LINE_ENDINGS)
        && !is_structural_line(line)
        && !is_structural_line(next)
}

/// 把 PDF 提取时在句中断开的行用空格接回去
///
/// 只看紧邻的下一行；下一行为空（段落分隔）时不拼接。
fn rejoin_broken_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let mut out = String::with_capacity(text.len());
    let mut continues = false;

    for (index, line) in lines.iter().enumerate() {
        out.push_str(if continues { line.trim_start() } else { line });

        continues = lines
            .get(index + 1)
            .is_some_and(|next| breaks_mid_sentence(line, next));
        if continues {
            out.push(' ');
        } else if index + 1 < lines.len() {
            out.push('\n');
        }
    }

    out
}

/// 清理提取文本
///
/// 1. `\r\n` / `\r` 统一为 `\n`
/// 2. 去掉换页符和 `[PAGE n]` 标记
/// 3. 去掉每行行尾空白，拼接句中断行
/// 4. 连续 3 个以上换行折叠为一个空行
/// 5. 整体 trim
pub fn clean_text(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.replace('\u{000C}', "\n");
    let text = PAGE_MARKER_RE.replace_all(&text, "");

    let text = rejoin_broken_lines(&text);

    EXCESS_NEWLINES_RE
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_page_markers_and_form_feeds() {
        let raw = "\u{000C}[PAGE 1]\nACT I\nROMEO.\n\u{000C}[PAGE 2]\nShall I hear more?";
        assert_eq!(clean_text(raw), "ACT I\nROMEO.\n\nShall I hear more?");
    }

    #[test]
    fn test_collapses_blank_runs_and_trailing_spaces() {
        let raw = "Line one.   \r\n\r\n\r\n\r\nLine two.\t\n";
        assert_eq!(clean_text(raw), "Line one.\n\nLine two.");
    }

    #[test]
    fn test_rejoins_sentence_broken_across_lines() {
        assert_eq!(
            clean_text("The river ran\nslowly past the mill."),
            "The river ran slowly past the mill."
        );
        assert_eq!(
            clean_text("It was the best\n   of times, it was\nthe worst of times.\n\nNext."),
            "It was the best of times, it was the worst of times.\n\nNext."
        );
    }

    #[test]
    fn test_blank_line_stops_rejoin() {
        assert_eq!(clean_text("An unfinished thought\n\nA new one."), "An unfinished thought\n\nA new one.");
    }

    #[test]
    fn test_cues_and_headings_are_not_rejoined() {
        let raw = "ACT I\nSCENE 2\nEnter Ghost\nROMEO\nBut soft, what light\nthrough yonder window breaks?\nJULIET.\nAy me.";
        assert_eq!(
            clean_text(raw),
            "ACT I\nSCENE 2\nEnter Ghost\nROMEO\nBut soft, what light through yonder window breaks?\nJULIET.\nAy me."
        );
    }

    #[test]
    fn test_line_before_heading_is_not_rejoined() {
        let raw = "and so it ended\nCHAPTER 2\nIt began again.";
        assert_eq!(clean_text(raw), raw);
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let raw = "  CHAPTER I  \n\n\n\nIt began\nin the rain.\u{000C}";
        let once = clean_text(raw);
        assert_eq!(once, "CHAPTER I\n\nIt began in the rain.");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("\u{000C}\n \n"), "");
    }
}
