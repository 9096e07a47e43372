//! Structure Commands

use crate::application::error::ApplicationError;

/// 结构化文档命令
#[derive(Debug, Clone)]
pub struct StructureDocument {
    /// 提取后的纯文本
    pub text: String,
    /// 调用方提供的标题（为空时从文本推断）
    pub title: Option<String>,
}

impl StructureDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    /// 从原始字节构造，输入必须是 UTF-8
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ApplicationError> {
        let text = String::from_utf8(bytes).map_err(|e| {
            ApplicationError::validation(format!(
                "Input is not valid UTF-8 (at byte {})",
                e.utf8_error().valid_up_to()
            ))
        })?;
        Ok(Self::new(text))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_accepts_utf8() {
        let cmd = StructureDocument::from_bytes("Café scene".as_bytes().to_vec()).unwrap();
        assert_eq!(cmd.text, "Café scene");
        assert!(cmd.title.is_none());
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = StructureDocument::from_bytes(vec![b'A', b'C', b'T', 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(msg) if msg.contains("byte 3")));
    }
}
