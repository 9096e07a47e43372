//! 台词解析器
//!
//! 逐行单遍扫描（最多向前看一行），把剧本正文切分为
//! 舞台指示、角色台词、叙述三类块。空行不产生块。

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::Block;

/// 角色提示行最大长度（字符）
const MAX_CUE_CHARS: usize = 36;
/// 角色提示行最小长度（字符）
const MIN_CUE_CHARS: usize = 2;

static BRACKETED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\[.*\]|\(.*\))$").expect("bracketed direction pattern"));

static STAGE_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:RE-ENTER|ENTER|EXIT|EXEUNT|ASIDE|FLOURISH|ALARUM|SENNET)\b")
        .expect("stage keyword pattern")
});

static SPEAKER_CUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][A-Z\s\-']{0,33}?)\.?\s*(\[.*?\])?\s*$").expect("speaker cue pattern")
});

/// 是否为舞台指示行（调用方负责 trim）
pub fn is_stage_direction(line: &str) -> bool {
    BRACKETED_RE.is_match(line) || STAGE_KEYWORD_RE.is_match(line)
}

/// 去掉包裹整行的方括号 / 圆括号
fn strip_brackets(line: &str) -> &str {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .or_else(|| line.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')));
    inner.map(str::trim).unwrap_or(line)
}

/// 若行形如角色提示，返回角色名（已去掉句点与方括号注释）
fn cue_name(line: &str) -> Option<&str> {
    let len = line.chars().count();
    if !(MIN_CUE_CHARS..=MAX_CUE_CHARS).contains(&len) {
        return None;
    }
    if line.contains([',', ';', '?', '!']) {
        return None;
    }
    SPEAKER_CUE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim())
        .filter(|name| !name.is_empty())
}

/// 第 `index` 行是否为角色提示：形状匹配且下一行存在且非空
fn speaker_at<'a>(lines: &[&'a str], index: usize) -> Option<&'a str> {
    let next_is_spoken = lines.get(index + 1).is_some_and(|next| !next.is_empty());
    if next_is_spoken {
        cue_name(lines[index])
    } else {
        None
    }
}

/// 解析剧本文本为块序列
///
/// - 舞台指示：整行被 `[]` / `()` 包裹，或以 Enter / Exit / Exeunt 等开头
/// - 角色提示：短的全大写行，其后连续的非空行（既非提示也非指示）是台词；
///   一行台词都没有的提示被丢弃
/// - 其余非空行各自成为一个叙述块
pub fn parse_dialogue(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if line.is_empty() {
            index += 1;
            continue;
        }

        if is_stage_direction(line) {
            blocks.push(Block::stage_direction(strip_brackets(line)));
            index += 1;
            continue;
        }

        if let Some(name) = speaker_at(&lines, index) {
            let mut spoken = Vec::new();
            let mut cursor = index + 1;
            while cursor < lines.len() {
                let next = lines[cursor];
                if next.is_empty() || is_stage_direction(next) || speaker_at(&lines, cursor).is_some() {
                    break;
                }
                spoken.push(next.to_string());
                cursor += 1;
            }
            if !spoken.is_empty() {
                blocks.push(Block::speaker(name, spoken));
            }
            index = cursor;
            continue;
        }

        blocks.push(Block::narrative(line));
        index += 1;
    }

    blocks
}
