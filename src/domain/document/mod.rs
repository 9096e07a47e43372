//! Document Context - 文档结构上下文
//!
//! 职责:
//! - Document 聚合（体裁、标题、单元）
//! - 结构单元与剧本块实体
//! - 标题推断

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::{infer_title, Document, DocumentMetadata};
pub use entities::{Block, Unit};
pub use value_objects::{Genre, SegmentationSource, Title, UNTITLED};
