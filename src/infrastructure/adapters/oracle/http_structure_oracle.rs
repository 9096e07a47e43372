//! HTTP Structure Oracle - 调用外部结构化 HTTP 服务
//!
//! 实现 StructureOraclePort trait，通过 HTTP 调用外部结构化服务
//!
//! 外部 API:
//! POST http://localhost:8000/structure-content
//! Request: {"content": "...", "content_type": "play|novel|generic"}  (JSON)
//! Response: {"units": [{"title": "...", "content": "..."}]}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{OracleError, OracleUnit, StructureOraclePort, StructureRequest};

/// 结构化响应体 (JSON)
#[derive(Debug, Deserialize)]
struct StructureHttpResponse {
    units: Vec<OracleUnit>,
}

/// HTTP 结构化服务客户端配置
#[derive(Debug, Clone)]
pub struct HttpStructureOracleConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpStructureOracleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 12,
        }
    }
}

impl HttpStructureOracleConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 结构化服务客户端
pub struct HttpStructureOracle {
    client: Client,
    config: HttpStructureOracleConfig,
}

impl HttpStructureOracle {
    /// 创建新的客户端
    pub fn new(config: HttpStructureOracleConfig) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取结构化 URL
    fn structure_url(&self) -> String {
        format!("{}/structure-content", self.config.base_url.trim_end_matches('/'))
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StructureOraclePort for HttpStructureOracle {
    async fn structure(&self, request: StructureRequest) -> Result<Vec<OracleUnit>, OracleError> {
        tracing::debug!(
            url = %self.structure_url(),
            content_len = request.content.len(),
            content_type = %request.content_type,
            "Sending structure request"
        );

        let response = self
            .client
            .post(self.structure_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else if e.is_connect() {
                    OracleError::NetworkError(format!("Cannot connect to structure service: {}", e))
                } else {
                    OracleError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OracleError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: StructureHttpResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                OracleError::Timeout
            } else {
                OracleError::InvalidResponse(format!("Failed to decode units: {}", e))
            }
        })?;

        tracing::debug!(units = body.units.len(), "Structure request completed");

        Ok(body.units)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
