//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（folio.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["folio", "folio.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `FOLIO_`，层级分隔符 `__`）
/// 2. 配置文件（folio.toml 或 folio.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `FOLIO_ORACLE__ENABLED=true`
/// - `FOLIO_ORACLE__URL=http://structure-service:8000`
/// - `FOLIO_SEGMENTATION__WORDS_PER_PAGE=400`
/// - `FOLIO_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("segmentation.classifier_prefix_chars", 12_000)?
        .set_default("segmentation.words_per_page", 600)?
        .set_default("segmentation.play_min_section_chars", 30)?
        .set_default("segmentation.novel_min_section_chars", 100)?
        .set_default("segmentation.clean_input", true)?
        .set_default("segmentation.max_input_bytes", 20 * 1024 * 1024)?
        .set_default("oracle.enabled", false)?
        .set_default("oracle.url", "http://localhost:8000")?
        .set_default("oracle.timeout_secs", 12)?
        .set_default("oracle.max_prefix_chars", 30_000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: FOLIO_ORACLE__URL=http://structure-service:8000
    builder = builder.add_source(
        Environment::with_prefix("FOLIO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.segmentation.words_per_page == 0 {
        return Err(ConfigError::ValidationError(
            "words_per_page cannot be 0".to_string(),
        ));
    }

    if config.segmentation.max_input_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "max_input_bytes cannot be 0".to_string(),
        ));
    }

    if config.oracle.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Oracle timeout cannot be 0".to_string(),
        ));
    }

    if config.oracle.enabled && config.oracle.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Oracle URL cannot be empty when the oracle is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Folio Configuration ===");
    tracing::info!(
        "Classifier Prefix: {} chars",
        config.segmentation.classifier_prefix_chars
    );
    tracing::info!("Words Per Page: {}", config.segmentation.words_per_page);
    tracing::info!(
        "Min Section Chars: play={} novel={}",
        config.segmentation.play_min_section_chars,
        config.segmentation.novel_min_section_chars
    );
    tracing::info!("Clean Input: {}", config.segmentation.clean_input);
    tracing::info!("Oracle Enabled: {}", config.oracle.enabled);
    if config.oracle.enabled {
        tracing::info!("Oracle URL: {}", config.oracle.url);
        tracing::info!("Oracle Timeout: {}s", config.oracle.timeout_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("===========================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_words_per_page() {
        let mut config = AppConfig::default();
        config.segmentation.words_per_page = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_oracle_timeout() {
        let mut config = AppConfig::default();
        config.oracle.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_url_only_matters_when_enabled() {
        let mut config = AppConfig::default();
        config.oracle.url = String::new();
        assert!(validate_config(&config).is_ok());

        config.oracle.enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_toml(
            r#"
[segmentation]
words_per_page = 250
clean_input = false

[oracle]
enabled = true
url = "http://structure:9000"
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.segmentation.words_per_page, 250);
        assert!(!config.segmentation.clean_input);
        assert_eq!(config.segmentation.novel_min_section_chars, 100);
        assert!(config.oracle.enabled);
        assert_eq!(config.oracle.url, "http://structure:9000");
        assert_eq!(config.oracle.timeout_secs, 12);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let file = write_toml("[segmentation]\nwords_per_page = 0\n");
        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
