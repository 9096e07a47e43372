//! Provider Chain - 按顺序尝试分段提供者
//!
//! 第一个被接受的结果胜出；每次尝试都受超时约束，超时视同放弃。
//! 链尾始终是本地确定性分段，所以链总能给出结果。

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SegmentationProviderPort;
use crate::domain::document::Genre;
use crate::domain::Segmentation;

use super::DeterministicProvider;

/// 默认单次尝试超时
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(12);

/// 分段提供者链
pub struct ProviderChain {
    providers: Vec<Arc<dyn SegmentationProviderPort>>,
    fallback: DeterministicProvider,
    attempt_timeout: Duration,
}

impl ProviderChain {
    /// 只有确定性兜底的链
    pub fn new(fallback: DeterministicProvider) -> Self {
        Self {
            providers: Vec::new(),
            fallback,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// 在兜底之前追加一个提供者（按追加顺序尝试）
    pub fn with_provider(mut self, provider: Arc<dyn SegmentationProviderPort>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// 已注册的提供者名称（不含兜底）
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// 依次尝试，全部放弃时使用确定性分段
    pub async fn segment(&self, text: &str, genre: Genre) -> Segmentation {
        for provider in &self.providers {
            match tokio::time::timeout(self.attempt_timeout, provider.attempt(text, genre)).await {
                Ok(Some(segmentation)) => {
                    tracing::debug!(
                        provider = provider.name(),
                        units = segmentation.units.len(),
                        "Segmentation provider accepted"
                    );
                    return segmentation;
                }
                Ok(None) => {
                    tracing::debug!(provider = provider.name(), "Segmentation provider declined");
                }
                Err(_) => {
                    tracing::warn!(
                        provider = provider.name(),
                        timeout_ms = self.attempt_timeout.as_millis() as u64,
                        "Segmentation provider timed out"
                    );
                }
            }
        }

        self.fallback.segment(text, genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::document::{SegmentationSource, Unit};

    const PLAY: &str = "ACT I\nROMEO.\nBut soft, what light through yonder window breaks?\n\nACT II\nJULIET.\nO Romeo, Romeo! wherefore art thou Romeo?";

    /// 永远超时的提供者
    struct StalledProvider;

    #[async_trait]
    impl SegmentationProviderPort for StalledProvider {
        fn name(&self) -> &'static str {
            "stalled"
        }

        async fn attempt(&self, _text: &str, _genre: Genre) -> Option<Segmentation> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            None
        }
    }

    struct FixedProvider(Option<Segmentation>);

    #[async_trait]
    impl SegmentationProviderPort for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn attempt(&self, _text: &str, _genre: Genre) -> Option<Segmentation> {
            self.0.clone()
        }
    }

    fn oracle_result() -> Segmentation {
        Segmentation {
            units: vec![Unit::new("A", "first"), Unit::new("B", "second")],
            source: SegmentationSource::Oracle,
        }
    }

    #[tokio::test]
    async fn test_empty_chain_uses_deterministic_path() {
        let chain = ProviderChain::new(DeterministicProvider::default());
        let segmentation = chain.segment(PLAY, Genre::Play).await;
        assert_eq!(segmentation.source, SegmentationSource::Structural);
        assert_eq!(segmentation.units.len(), 2);
    }

    #[tokio::test]
    async fn test_first_accepted_result_wins() {
        let chain = ProviderChain::new(DeterministicProvider::default())
            .with_provider(Arc::new(FixedProvider(None)))
            .with_provider(Arc::new(FixedProvider(Some(oracle_result()))));
        assert_eq!(chain.provider_names(), vec!["fixed", "fixed"]);
        assert_eq!(chain.segment(PLAY, Genre::Play).await, oracle_result());
    }

    #[tokio::test]
    async fn test_timeout_falls_through_to_deterministic_output() {
        let deterministic = DeterministicProvider::default();
        let expected = deterministic.segment(PLAY, Genre::Play);

        let chain = ProviderChain::new(deterministic)
            .with_provider(Arc::new(StalledProvider))
            .with_attempt_timeout(Duration::from_millis(50));

        let segmentation = chain.segment(PLAY, Genre::Play).await;
        assert_eq!(segmentation, expected);
    }
}
