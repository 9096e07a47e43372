//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StructureOracle、SegmentationProvider）
//! - segmentation: 分段提供者与提供者链
//! - commands: CQRS 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod segmentation;

// Re-exports
pub use commands::{
    handlers::{StructureDocumentHandler, StructureDocumentResponse, DEFAULT_MAX_INPUT_BYTES},
    StructureDocument,
};

pub use error::ApplicationError;

pub use ports::{
    OracleError, OracleUnit, SegmentationProviderPort, StructureOraclePort, StructureRequest,
};

pub use segmentation::{
    DeterministicProvider, OracleSegmentationProvider, ProviderChain, DEFAULT_ATTEMPT_TIMEOUT,
    DEFAULT_ORACLE_PREFIX_CHARS,
};
