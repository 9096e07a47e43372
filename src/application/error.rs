//! 应用层错误定义
//!
//! 统一的命令错误类型。领域分段本身不会失败，这里只覆盖输入校验（过大、非 UTF-8）与外部服务装配。

use thiserror::Error;

use crate::application::ports::OracleError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建外部服务错误
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalServiceError(message.into())
    }
}

impl From<OracleError> for ApplicationError {
    fn from(err: OracleError) -> Self {
        Self::external(err.to_string())
    }
}
