//! Structure Command Handlers

use std::sync::Arc;

use serde::Serialize;

use crate::application::commands::structure_commands::StructureDocument;
use crate::application::error::ApplicationError;
use crate::application::segmentation::ProviderChain;
use crate::domain::document::{infer_title, Document, Title};
use crate::domain::{clean_text, classify_with_report, ClassificationReport, ClassifierConfig};

/// 默认输入上限 20MB
pub const DEFAULT_MAX_INPUT_BYTES: usize = 20 * 1024 * 1024;

/// StructureDocument 响应
#[derive(Debug, Clone, Serialize)]
pub struct StructureDocumentResponse {
    pub document: Document,
    pub classification: ClassificationReport,
}

/// StructureDocument Handler - 分类 + 分段 + 组装文档
pub struct StructureDocumentHandler {
    chain: Arc<ProviderChain>,
    classifier: ClassifierConfig,
    clean_input: bool,
    max_input_bytes: usize,
}

impl StructureDocumentHandler {
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self {
            chain,
            classifier: ClassifierConfig::default(),
            clean_input: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_clean_input(mut self, clean_input: bool) -> Self {
        self.clean_input = clean_input;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub async fn handle(
        &self,
        cmd: StructureDocument,
    ) -> Result<StructureDocumentResponse, ApplicationError> {
        if cmd.text.len() > self.max_input_bytes {
            return Err(ApplicationError::validation(format!(
                "Input too large: {} bytes (limit {})",
                cmd.text.len(),
                self.max_input_bytes
            )));
        }

        let text = if self.clean_input {
            clean_text(&cmd.text)
        } else {
            cmd.text.trim().to_string()
        };

        let classification = classify_with_report(&text, &self.classifier);

        // 调用方标题不合法时退回推断
        let title = cmd
            .title
            .and_then(|title| Title::new(title).ok())
            .unwrap_or_else(|| infer_title(&text));

        let segmentation = self.chain.segment(&text, classification.genre).await;

        let document = Document::new(
            classification.genre,
            title,
            segmentation.units,
            segmentation.source,
        );

        tracing::info!(
            genre = %document.genre(),
            title = %document.title(),
            units = document.metadata().unit_count,
            words = document.metadata().word_count,
            source = ?document.metadata().source,
            "Document structured"
        );

        Ok(StructureDocumentResponse {
            document,
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::application::segmentation::{DeterministicProvider, OracleSegmentationProvider};
    use crate::domain::document::{Genre, SegmentationSource, UNTITLED};
    use crate::infrastructure::adapters::FakeStructureOracle;

    const PLAY: &str = "THE TRAGEDY OF ROMEO AND JULIET

ACT I

SCENE I. Verona. A public place.

Enter Sampson and Gregory.

SAMPSON.
Gregory, on my word, we'll not carry coals.

GREGORY.
No, for then we should be colliers.

ACT II

SCENE II. Capulet's orchard.

Enter Romeo.

ROMEO.
He jests at scars that never felt a wound.
";

    fn deterministic_handler() -> StructureDocumentHandler {
        StructureDocumentHandler::new(Arc::new(ProviderChain::new(DeterministicProvider::default())))
    }

    fn handler_with_oracle(oracle: FakeStructureOracle, timeout: Duration) -> StructureDocumentHandler {
        let chain = ProviderChain::new(DeterministicProvider::default())
            .with_provider(Arc::new(OracleSegmentationProvider::new(Arc::new(oracle))))
            .with_attempt_timeout(timeout);
        StructureDocumentHandler::new(Arc::new(chain))
    }

    #[tokio::test]
    async fn test_play_is_structured_by_headings() {
        let response = deterministic_handler()
            .handle(StructureDocument::new(PLAY))
            .await
            .unwrap();
        let document = response.document;

        assert_eq!(response.classification.genre, Genre::Play);
        assert_eq!(document.genre(), Genre::Play);
        assert_eq!(document.title().as_str(), "THE TRAGEDY OF ROMEO AND JULIET");
        assert_eq!(document.metadata().source, SegmentationSource::Structural);
        assert!(document.units().len() >= 2);
        assert!(document.units().iter().all(|u| u.dialogue().is_some()));

        let joined: String = document.units().iter().map(|u| u.content()).collect();
        assert_eq!(joined, PLAY.trim());
    }

    #[tokio::test]
    async fn test_explicit_title_wins() {
        let response = deterministic_handler()
            .handle(StructureDocument::new(PLAY).with_title("  Romeo and Juliet "))
            .await
            .unwrap();
        assert_eq!(response.document.title().as_str(), "Romeo and Juliet");
    }

    #[tokio::test]
    async fn test_blank_title_falls_back_to_inference() {
        let response = deterministic_handler()
            .handle(StructureDocument::new(PLAY).with_title("   "))
            .await
            .unwrap();
        assert_eq!(response.document.title().as_str(), "THE TRAGEDY OF ROMEO AND JULIET");
    }

    #[tokio::test]
    async fn test_empty_text() {
        let response = deterministic_handler()
            .handle(StructureDocument::new("   \n\n  "))
            .await
            .unwrap();
        let document = response.document;

        assert_eq!(document.genre(), Genre::Generic);
        assert!(document.units().is_empty());
        assert_eq!(document.title().as_str(), UNTITLED);
        assert_eq!(document.metadata().word_count, 0);
    }

    #[tokio::test]
    async fn test_input_too_large() {
        let handler = deterministic_handler().with_max_input_bytes(10);
        let err = handler
            .handle(StructureDocument::new("a much longer input than ten bytes"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_oracle_result_is_used() {
        let oracle = FakeStructureOracle::returning([
            ("Part one", "Once upon a time."),
            ("Part two", "They lived happily."),
        ]);
        let response = handler_with_oracle(oracle, Duration::from_secs(5))
            .handle(StructureDocument::new("Once upon a time. They lived happily."))
            .await
            .unwrap();
        let document = response.document;

        assert_eq!(document.metadata().source, SegmentationSource::Oracle);
        assert_eq!(document.units().len(), 2);
        assert_eq!(document.units()[1].title(), "Part two");
    }

    #[tokio::test]
    async fn test_failing_oracle_falls_back() {
        let expected = deterministic_handler()
            .handle(StructureDocument::new(PLAY))
            .await
            .unwrap();
        let response = handler_with_oracle(FakeStructureOracle::failing(), Duration::from_secs(5))
            .handle(StructureDocument::new(PLAY))
            .await
            .unwrap();

        assert_eq!(response.document, expected.document);
    }

    #[tokio::test]
    async fn test_slow_oracle_is_abandoned() {
        let oracle = FakeStructureOracle::returning([("A", "first"), ("B", "second")])
            .with_delay(Duration::from_secs(60));
        let expected = deterministic_handler()
            .handle(StructureDocument::new(PLAY))
            .await
            .unwrap();
        let response = handler_with_oracle(oracle, Duration::from_millis(50))
            .handle(StructureDocument::new(PLAY))
            .await
            .unwrap();

        assert_eq!(response.document, expected.document);
        assert_eq!(response.document.metadata().source, SegmentationSource::Structural);
    }

    #[tokio::test]
    async fn test_cleaning_can_be_disabled() {
        let raw = "Intro line\r\n[PAGE 1]\r\nmore text";
        let cleaned = deterministic_handler()
            .handle(StructureDocument::new(raw))
            .await
            .unwrap();
        let kept = deterministic_handler()
            .with_clean_input(false)
            .handle(StructureDocument::new(raw))
            .await
            .unwrap();

        let cleaned_text: String = cleaned.document.units().iter().map(|u| u.content()).collect();
        let kept_text: String = kept.document.units().iter().map(|u| u.content()).collect();
        assert!(!cleaned_text.contains("[PAGE 1]"));
        assert!(kept_text.contains("[PAGE 1]"));
    }
}
