//! Command Handlers 实现

mod structure_handlers;

pub use structure_handlers::*;
