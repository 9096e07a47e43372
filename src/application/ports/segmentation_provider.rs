//! Segmentation Provider Port - 分段提供者抽象
//!
//! 每个提供者尝试对文本分段，返回 `None` 表示放弃，由链上的下一个提供者接手。

use async_trait::async_trait;

use crate::domain::document::Genre;
use crate::domain::Segmentation;

/// Segmentation Provider Port
#[async_trait]
pub trait SegmentationProviderPort: Send + Sync {
    /// 提供者名称（用于日志）
    fn name(&self) -> &'static str;

    /// 尝试分段；不可用或结果不被接受时返回 `None`
    async fn attempt(&self, text: &str, genre: Genre) -> Option<Segmentation>;
}
