//! 分段提供者
//!
//! - DeterministicProvider: 本地确定性分段（链尾兜底）
//! - OracleSegmentationProvider: 外部结构化服务（可选）
//! - ProviderChain: 按顺序尝试，第一个被接受的结果胜出

mod deterministic_provider;
mod oracle_provider;
mod provider_chain;

pub use deterministic_provider::DeterministicProvider;
pub use oracle_provider::{normalize_units, OracleSegmentationProvider, DEFAULT_ORACLE_PREFIX_CHARS};
pub use provider_chain::{ProviderChain, DEFAULT_ATTEMPT_TIMEOUT};
