//! Structure Oracle Port - 外部结构化服务抽象
//!
//! 定义外部“智能结构化”服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::document::Genre;

/// 结构化服务错误
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 结构化请求
#[derive(Debug, Clone, Serialize)]
pub struct StructureRequest {
    /// 文本内容（调用方负责截断）
    pub content: String,
    /// 已判定的体裁
    pub content_type: Genre,
}

/// 服务返回的单元（未经校验）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OracleUnit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Structure Oracle Port
///
/// 外部结构化服务的抽象接口。失败由调用方降级处理，从不致命。
#[async_trait]
pub trait StructureOraclePort: Send + Sync {
    /// 请求外部服务对文本分段
    async fn structure(&self, request: StructureRequest) -> Result<Vec<OracleUnit>, OracleError>;

    /// 检查服务是否可用
    async fn health_check(&self) -> bool;
}
