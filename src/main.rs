//! Folio - 文档结构推断命令行
//!
//! 读取纯文本，输出结构化 JSON（文档 + 分类报告）到 stdout，日志写到 stderr。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use folio::application::{
    ApplicationError, DeterministicProvider, OracleSegmentationProvider, ProviderChain,
    StructureDocument, StructureDocumentHandler, StructureOraclePort,
};
use folio::config::{load_config, load_config_from_path, print_config, AppConfig};
use folio::infrastructure::{HttpStructureOracle, HttpStructureOracleConfig};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

/// 识别文档体裁（剧本 / 小说 / 普通文档）并切分为有标题的单元
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// 文本文件路径，`-` 表示从 stdin 读取
    path: String,

    /// 文档标题（省略时从文本推断）
    title: Option<String>,

    /// 配置文件路径（默认搜索 folio.toml / folio.local.toml）
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!("{},folio={}", config.log.level, config.log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn build_chain(config: &AppConfig) -> Result<ProviderChain, ApplicationError> {
    let fallback = DeterministicProvider::new(config.segmentation.segmenter());
    let mut chain = ProviderChain::new(fallback).with_attempt_timeout(config.oracle.timeout());

    if config.oracle.enabled {
        let oracle_config = HttpStructureOracleConfig::new(config.oracle.url.clone())
            .with_timeout(config.oracle.timeout_secs);
        let oracle = HttpStructureOracle::new(oracle_config)?;

        // 不可用时仍然注册：每次尝试失败都会退回本地分段
        if !oracle.health_check().await {
            tracing::warn!(
                url = %config.oracle.url,
                "Structure oracle is not reachable, local segmentation will be used on failure"
            );
        }

        let provider = OracleSegmentationProvider::new(Arc::new(oracle))
            .with_max_prefix_chars(config.oracle.max_prefix_chars);
        chain = chain.with_provider(Arc::new(provider));
    }

    Ok(chain)
}

async fn read_input(path: &str) -> anyhow::Result<Vec<u8>> {
    if path == "-" {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .context("Failed to read stdin")?;
        return Ok(bytes);
    }

    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match &cli.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    let bytes = read_input(&cli.path).await?;
    let mut command = StructureDocument::from_bytes(bytes)?;
    if let Some(title) = cli.title {
        command = command.with_title(title);
    }

    let chain = build_chain(&config).await?;
    tracing::info!(providers = ?chain.provider_names(), "Segmentation chain ready");

    let handler = StructureDocumentHandler::new(Arc::new(chain))
        .with_classifier(config.segmentation.classifier())
        .with_clean_input(config.segmentation.clean_input)
        .with_max_input_bytes(config.segmentation.max_input_bytes);

    let response = handler.handle(command).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
