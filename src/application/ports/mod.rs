//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod segmentation_provider;
mod structure_oracle;

pub use segmentation_provider::SegmentationProviderPort;
pub use structure_oracle::{OracleError, OracleUnit, StructureOraclePort, StructureRequest};
