//! Oracle Adapter - 外部结构化服务客户端实现

mod fake_structure_oracle;
mod http_structure_oracle;

pub use fake_structure_oracle::{FakeStructureOracle, FakeStructureOracleConfig};
pub use http_structure_oracle::*;
