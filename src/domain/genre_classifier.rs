//! 体裁分类器
//!
//! 对文本前缀做一组独立的启发式信号检测，按固定权重累加出
//! `play_score` / `novel_score`，再按固定优先级给出体裁。
//!
//! 判定顺序（偏向剧本，不可调整）：
//! 1. play >= 5 → play
//! 2. novel >= 5 → novel
//! 3. play >= 3 → play
//! 4. novel >= 3 → novel
//! 5. 否则 generic

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::document::Genre;
use super::patterns::NUMBER_WORDS;

/// 默认只检查前 12000 个字符
pub const DEFAULT_PREFIX_CHARS: usize = 12_000;

/// 分类配置
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// 参与打分的前缀长度（字符）
    pub prefix_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            prefix_chars: DEFAULT_PREFIX_CHARS,
        }
    }
}

// 剧本侧：罗马数字只枚举 I..VI，配合英文数词
static ACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:ACT|Act)\s+(?:VI|IV|V|I{{1,3}}|(?i:{}))\b",
        NUMBER_WORDS
    ))
    .expect("act signal pattern")
});

static SCENE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:SCENE|Scene)\s+(?:VI|IV|V|I{{1,3}}|(?i:{}))\b",
        NUMBER_WORDS
    ))
    .expect("scene signal pattern")
});

static BRACKETED_ENTRANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\[(]\s*(?:enter|exit|exeunt|re-enter)\b").expect("entrance signal pattern")
});

static STAGE_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Exeunt|EXEUNT|Aside|ASIDE|Flourish|FLOURISH|Alarum|ALARUM|Sennet|SENNET)\b",
    )
    .expect("stage verb signal pattern")
});

static SPEAKER_CUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s\-']{1,28}\.$").expect("speaker cue signal pattern"));

static CAPS_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s\-']{2,28}$").expect("caps line signal pattern"));

static DRAMA_VOCABULARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:dramatis\s+personae|tragedy|comedy|prologue|epilogue)\b")
        .expect("drama vocabulary pattern")
});

// 小说侧：章节编号不限于 I..VI
static CHAPTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?mi)^[ \t]*CHAPTER\s+(?:[IVXLC]+|\d+|{})\b",
        NUMBER_WORDS
    ))
    .expect("chapter signal pattern")
});

static PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?mi)^[ \t]*PART\s+(?:[IVXLC]+|\d+|{})\b",
        NUMBER_WORDS
    ))
    .expect("part signal pattern")
});

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("paragraph break pattern"));

/// 各信号的命中计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalCounts {
    pub act_headings: usize,
    pub scene_headings: usize,
    pub bracketed_entrances: usize,
    pub stage_verbs: usize,
    pub speaker_cues: usize,
    pub caps_lines: usize,
    pub drama_keywords: usize,
    pub chapter_headings: usize,
    pub part_headings: usize,
    pub prose_paragraphs: usize,
}

/// 打分状态（只读，构造后不再修改）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub signals: SignalCounts,
    pub play_score: u32,
    pub novel_score: u32,
}

impl ScoreState {
    /// 由信号计数按权重求和
    pub fn from_signals(signals: SignalCounts) -> Self {
        let play_score = present(signals.act_headings, 5)
            + present(signals.scene_headings, 4)
            + present(signals.bracketed_entrances, 4)
            + present(signals.stage_verbs, 3)
            + tiered(signals.speaker_cues, (3, 6), (1, 3))
            + tiered(signals.caps_lines, (5, 3), (2, 1))
            + present(signals.drama_keywords, 3);

        let novel_score = present(signals.chapter_headings, 5)
            + present(signals.part_headings, 3)
            + tiered(signals.prose_paragraphs, (5, 2), (usize::MAX, 0));

        Self {
            signals,
            play_score,
            novel_score,
        }
    }

    pub fn genre(&self) -> Genre {
        decide(self.play_score, self.novel_score)
    }
}

/// 分类结果（附带分数与信号，便于观察）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub genre: Genre,
    pub play_score: u32,
    pub novel_score: u32,
    pub signals: SignalCounts,
}

#[inline]
fn present(count: usize, weight: u32) -> u32 {
    if count > 0 {
        weight
    } else {
        0
    }
}

/// 两档阈值：(高阈值, 高权重), (低阈值, 低权重)
#[inline]
fn tiered(count: usize, high: (usize, u32), low: (usize, u32)) -> u32 {
    if count >= high.0 {
        high.1
    } else if count >= low.0 {
        low.1
    } else {
        0
    }
}

/// 按固定优先级判定体裁
pub fn decide(play_score: u32, novel_score: u32) -> Genre {
    if play_score >= 5 {
        Genre::Play
    } else if novel_score >= 5 {
        Genre::Novel
    } else if play_score >= 3 {
        Genre::Play
    } else if novel_score >= 3 {
        Genre::Novel
    } else {
        Genre::Generic
    }
}

/// 截取前 `max_chars` 个字符（保证落在字符边界上）
pub fn bounded_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

fn count_speaker_cues(sample: &str) -> usize {
    sample
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() < 35 && SPEAKER_CUE_RE.is_match(line))
        .count()
}

fn count_caps_lines(sample: &str) -> usize {
    sample
        .lines()
        .map(str::trim)
        .filter(|line| CAPS_LINE_RE.is_match(line))
        .count()
}

fn count_prose_paragraphs(sample: &str) -> usize {
    PARAGRAPH_BREAK_RE
        .split(sample)
        .filter(|paragraph| {
            paragraph
                .chars()
                .filter(|c| matches!(c, '.' | '!' | '?'))
                .count()
                >= 3
        })
        .count()
}

/// 对样本逐项检测信号
pub fn detect_signals(sample: &str) -> SignalCounts {
    SignalCounts {
        act_headings: ACT_RE.find_iter(sample).count(),
        scene_headings: SCENE_RE.find_iter(sample).count(),
        bracketed_entrances: BRACKETED_ENTRANCE_RE.find_iter(sample).count(),
        stage_verbs: STAGE_VERB_RE.find_iter(sample).count(),
        speaker_cues: count_speaker_cues(sample),
        caps_lines: count_caps_lines(sample),
        drama_keywords: DRAMA_VOCABULARY_RE.find_iter(sample).count(),
        chapter_headings: CHAPTER_RE.find_iter(sample).count(),
        part_headings: PART_RE.find_iter(sample).count(),
        prose_paragraphs: count_prose_paragraphs(sample),
    }
}

/// 打分（只看前缀）
pub fn score(text: &str, config: &ClassifierConfig) -> ScoreState {
    let sample = bounded_prefix(text, config.prefix_chars);
    ScoreState::from_signals(detect_signals(sample))
}

/// 分类并返回完整报告
pub fn classify_with_report(text: &str, config: &ClassifierConfig) -> ClassificationReport {
    let state = score(text, config);
    let genre = state.genre();

    tracing::debug!(
        genre = %genre,
        play_score = state.play_score,
        novel_score = state.novel_score,
        "Genre classified"
    );

    ClassificationReport {
        genre,
        play_score: state.play_score,
        novel_score: state.novel_score,
        signals: state.signals,
    }
}

/// 使用默认配置分类（便捷方法）
pub fn classify(text: &str) -> Genre {
    classify_with_report(text, &ClassifierConfig::default()).genre
}
