//! 应用层 - 命令
//!
//! CQRS 命令侧：文档结构化

mod structure_commands;

pub mod handlers;

pub use structure_commands::*;
