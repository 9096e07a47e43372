//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现

pub mod adapters;

pub use adapters::{FakeStructureOracle, HttpStructureOracle, HttpStructureOracleConfig};
