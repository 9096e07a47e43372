//! Oracle Provider - 外部结构化服务的尽力而为包装
//!
//! 把 StructureOraclePort 的结果校验、规整为单元。任何失败都降级为 `None`，只记日志。

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    OracleUnit, SegmentationProviderPort, StructureOraclePort, StructureRequest,
};
use crate::domain::document::{Genre, SegmentationSource, Unit};
use crate::domain::{bounded_prefix, parse_dialogue, Segmentation};

/// 默认发送给外部服务的前缀长度（字符）
pub const DEFAULT_ORACLE_PREFIX_CHARS: usize = 30_000;

/// 外部结构化服务提供者
pub struct OracleSegmentationProvider {
    oracle: Arc<dyn StructureOraclePort>,
    max_prefix_chars: usize,
}

impl OracleSegmentationProvider {
    pub fn new(oracle: Arc<dyn StructureOraclePort>) -> Self {
        Self {
            oracle,
            max_prefix_chars: DEFAULT_ORACLE_PREFIX_CHARS,
        }
    }

    pub fn with_max_prefix_chars(mut self, max_prefix_chars: usize) -> Self {
        self.max_prefix_chars = max_prefix_chars;
        self
    }
}

/// 规整服务返回的单元
///
/// - 丢弃内容为空白的单元
/// - 标题 trim，空标题补为 `Section <n>`
/// - 剧本单元在本地补做台词解析
pub fn normalize_units(raw: Vec<OracleUnit>, genre: Genre) -> Vec<Unit> {
    raw.into_iter()
        .filter(|unit| !unit.content.trim().is_empty())
        .enumerate()
        .map(|(index, unit)| {
            let title = match unit.title.trim() {
                "" => format!("Section {}", index + 1),
                title => title.to_string(),
            };
            let content = unit.content.trim();
            let normalized = Unit::new(title, content);
            match genre {
                Genre::Play => normalized.with_dialogue(parse_dialogue(content)),
                Genre::Novel | Genre::Generic => normalized,
            }
        })
        .collect()
}

#[async_trait]
impl SegmentationProviderPort for OracleSegmentationProvider {
    fn name(&self) -> &'static str {
        "oracle"
    }

    async fn attempt(&self, text: &str, genre: Genre) -> Option<Segmentation> {
        let request = StructureRequest {
            content: bounded_prefix(text, self.max_prefix_chars).to_string(),
            content_type: genre,
        };

        let raw = match self.oracle.structure(request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    genre = %genre,
                    "Structure oracle failed, falling back to local segmentation"
                );
                return None;
            }
        };

        let reported = raw.len();
        let units = normalize_units(raw, genre);
        if units.len() <= 1 {
            tracing::info!(
                reported = reported,
                accepted = units.len(),
                "Structure oracle result rejected (needs more than one unit)"
            );
            return None;
        }

        tracing::info!(genre = %genre, units = units.len(), "Structure oracle result accepted");

        Some(Segmentation {
            units,
            source: SegmentationSource::Oracle,
        })
    }
}
