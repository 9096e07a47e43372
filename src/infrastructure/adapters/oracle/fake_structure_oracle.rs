//! Fake Structure Oracle - 用于测试的结构化服务
//!
//! 始终返回配置的固定单元，不实际调用外部服务

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{OracleError, OracleUnit, StructureOraclePort, StructureRequest};

/// Fake Structure Oracle 配置
#[derive(Debug, Clone, Default)]
pub struct FakeStructureOracleConfig {
    /// 固定返回的单元 (title, content)
    pub units: Vec<(String, String)>,
    /// 模拟响应延迟
    pub delay: Duration,
    /// 为 true 时返回服务错误
    pub fail: bool,
}

/// Fake Structure Oracle
///
/// 用于测试，始终返回配置的固定单元
pub struct FakeStructureOracle {
    config: FakeStructureOracleConfig,
}

impl FakeStructureOracle {
    pub fn new(config: FakeStructureOracleConfig) -> Self {
        Self { config }
    }

    /// 返回给定单元的 oracle
    pub fn returning<T, C>(units: impl IntoIterator<Item = (T, C)>) -> Self
    where
        T: Into<String>,
        C: Into<String>,
    {
        Self::new(FakeStructureOracleConfig {
            units: units
                .into_iter()
                .map(|(title, content)| (title.into(), content.into()))
                .collect(),
            ..Default::default()
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.config.delay = delay;
        self
    }

    /// 总是失败的 oracle
    pub fn failing() -> Self {
        Self::new(FakeStructureOracleConfig {
            fail: true,
            ..Default::default()
        })
    }
}

#[async_trait]
impl StructureOraclePort for FakeStructureOracle {
    async fn structure(&self, request: StructureRequest) -> Result<Vec<OracleUnit>, OracleError> {
        tracing::debug!(
            content_len = request.content.len(),
            content_type = %request.content_type,
            "FakeStructureOracle: returning fixed units"
        );

        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }

        if self.config.fail {
            return Err(OracleError::ServiceError("fake oracle failure".to_string()));
        }

        Ok(self
            .config
            .units
            .iter()
            .map(|(title, content)| OracleUnit {
                title: title.clone(),
                content: content.clone(),
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        !self.config.fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Genre;

    fn request() -> StructureRequest {
        StructureRequest {
            content: "text".to_string(),
            content_type: Genre::Generic,
        }
    }

    #[tokio::test]
    async fn test_returns_configured_units() {
        let oracle = FakeStructureOracle::returning([("One", "first"), ("Two", "second")]);
        assert!(oracle.health_check().await);

        let units = oracle.structure(request()).await.unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].title, "Two");
        assert_eq!(units[1].content, "second");
    }

    #[tokio::test]
    async fn test_failing_oracle_reports_unhealthy() {
        let oracle = FakeStructureOracle::failing();
        assert!(!oracle.health_check().await);
        assert!(matches!(
            oracle.structure(request()).await,
            Err(OracleError::ServiceError(_))
        ));
    }
}
