//! Deterministic Provider - 本地确定性分段
//!
//! 按体裁选择剧本 / 小说分段器，失败时分页。永远给出结果，是提供者链的兜底。

use async_trait::async_trait;

use crate::application::ports::SegmentationProviderPort;
use crate::domain::document::Genre;
use crate::domain::{segment, Segmentation, SegmenterConfig};

/// 本地确定性分段提供者
#[derive(Debug, Clone, Default)]
pub struct DeterministicProvider {
    config: SegmenterConfig,
}

impl DeterministicProvider {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// 同步分段（不会失败）
    pub fn segment(&self, text: &str, genre: Genre) -> Segmentation {
        segment(text, genre, &self.config)
    }
}

#[async_trait]
impl SegmentationProviderPort for DeterministicProvider {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    async fn attempt(&self, text: &str, genre: Genre) -> Option<Segmentation> {
        Some(self.segment(text, genre))
    }
}
