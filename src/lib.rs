//! Folio - 文档结构推断
//!
//! 把一段纯文本识别为剧本 / 小说 / 普通文档，并切分为有标题的单元。
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Document Context: 文档、单元、台词块
//! - 体裁分类、台词解析、结构分段、分页兜底
//!
//! 应用层 (application/):
//! - Ports: StructureOracle, SegmentationProvider
//! - Segmentation: 提供者链（可选外部服务 + 本地确定性分段）
//! - Commands: StructureDocument 及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 结构化服务客户端、测试用 Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
