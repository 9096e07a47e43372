//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod oracle;

pub use oracle::*;
