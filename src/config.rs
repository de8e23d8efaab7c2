//! 全局配置管理，存储剪枝阈值与剥离规则集等可配置项

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScrubError, ScrubResult};
use crate::strip::{RuleSet, RuleSpec, DEFAULT_SEPARATOR};
use crate::vocab::{DEFAULT_HIGH_FRACTION, DEFAULT_LOW_THRESHOLD};

/// 剪枝配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    // 低频阈值（含）
    pub low_threshold: i64,
    // 高频占比（含）
    pub high_fraction: f64,
    // 文档总数覆盖；为空时取语料长度
    pub total_documents: Option<u64>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_fraction: DEFAULT_HIGH_FRACTION,
            total_documents: None,
        }
    }
}

/// 内置规则集类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetKind {
    #[default]
    Canonical,
    Extended,
}

/// 剥离配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    // 内置规则集
    pub rule_set: RuleSetKind,
    // 被删除片段的替换串
    pub separator: String,
    // 自定义规则（非空时取代内置规则集）
    pub rules: Vec<RuleSpec>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSetKind::Canonical,
            separator: DEFAULT_SEPARATOR.to_string(),
            rules: Vec::new(),
        }
    }
}

impl StripConfig {
    /// 构建规则集：默认分隔符下复用全局编译结果，否则重新编译
    pub fn build_rule_set(&self) -> ScrubResult<Arc<RuleSet>> {
        if !self.rules.is_empty() {
            return Ok(Arc::new(RuleSet::from_specs("custom", &self.rules)?));
        }
        let shared = self.separator == DEFAULT_SEPARATOR;
        Ok(match (self.rule_set, shared) {
            (RuleSetKind::Canonical, true) => RuleSet::canonical(),
            (RuleSetKind::Extended, true) => RuleSet::extended(),
            (RuleSetKind::Canonical, false) => {
                Arc::new(RuleSet::canonical_with_separator(&self.separator)?)
            }
            (RuleSetKind::Extended, false) => {
                Arc::new(RuleSet::extended_with_separator(&self.separator)?)
            }
        })
    }
}

/// 全局配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub prune: PruneConfig,
    pub strip: StripConfig,
    // 是否启用详细日志
    pub verbose: bool,
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> PipelineConfig {
        PipelineConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从 JSON 文件加载配置，缺省字段取默认值
    pub async fn load(path: impl AsRef<Path>) -> ScrubResult<PipelineConfig> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let config: PipelineConfig = serde_json::from_str(&raw)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 解析 JSON 字符串配置
    pub fn from_json(raw: &str) -> ScrubResult<PipelineConfig> {
        serde_json::from_str(raw).map_err(ScrubError::from)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: PipelineConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low_threshold(mut self, low_threshold: i64) -> Self {
        self.config.prune.low_threshold = low_threshold;
        self
    }

    pub fn high_fraction(mut self, high_fraction: f64) -> Self {
        self.config.prune.high_fraction = high_fraction;
        self
    }

    pub fn total_documents(mut self, total_documents: u64) -> Self {
        self.config.prune.total_documents = Some(total_documents);
        self
    }

    pub fn rule_set(mut self, kind: RuleSetKind) -> Self {
        self.config.strip.rule_set = kind;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.strip.separator = separator.into();
        self
    }

    pub fn rules(mut self, rules: Vec<RuleSpec>) -> Self {
        self.config.strip.rules = rules;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigManager::get_default();
        assert_eq!(config.prune.low_threshold, 3);
        assert_eq!(config.prune.high_fraction, 0.25);
        assert_eq!(config.prune.total_documents, None);
        assert_eq!(config.strip.rule_set, RuleSetKind::Canonical);
        assert_eq!(config.strip.separator, " ");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = ConfigManager::from_json(
            r#"{"prune": {"total_documents": 57330}, "strip": {"rule_set": "extended"}}"#,
        )
        .unwrap();
        assert_eq!(config.prune.low_threshold, 3);
        assert_eq!(config.prune.total_documents, Some(57330));
        assert_eq!(config.strip.rule_set, RuleSetKind::Extended);
        assert!(Arc::ptr_eq(
            &config.strip.build_rule_set().unwrap(),
            &RuleSet::extended()
        ));
    }

    #[test]
    fn test_builder() {
        let config = ConfigManager::custom()
            .low_threshold(5)
            .high_fraction(0.5)
            .total_documents(10)
            .separator(" | ")
            .verbose(true)
            .build();
        assert_eq!(config.prune.low_threshold, 5);
        assert_eq!(config.prune.high_fraction, 0.5);
        assert_eq!(config.prune.total_documents, Some(10));
        assert!(config.verbose);

        let rule_set = config.strip.build_rule_set().unwrap();
        assert_eq!(rule_set.name(), "canonical");
        assert!(rule_set.rules().iter().all(|r| r.replacement() == " | "));
    }

    #[test]
    fn test_custom_rules_replace_builtin_set() {
        let config = ConfigManager::custom()
            .rules(vec![RuleSpec::new("sig", r"(?m)^--\s*$[\s\S]*", "")])
            .build();
        let rule_set = config.strip.build_rule_set().unwrap();
        assert_eq!(rule_set.name(), "custom");
        assert_eq!(rule_set.len(), 1);
    }

    #[test]
    fn test_invalid_custom_rule_fails_at_build() {
        let config = ConfigManager::custom()
            .rules(vec![RuleSpec::new("bad", "(", " ")])
            .build();
        assert!(matches!(
            config.strip.build_rule_set(),
            Err(ScrubError::InvalidRule { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrub.json");
        tokio::fs::write(&path, r#"{"prune": {"low_threshold": 1}, "verbose": true}"#)
            .await
            .unwrap();

        let config = ConfigManager::load(&path).await.unwrap();
        assert_eq!(config.prune.low_threshold, 1);
        assert_eq!(config.prune.high_fraction, 0.25);
        assert!(config.verbose);

        assert!(matches!(
            ConfigManager::load(dir.path().join("missing.json")).await,
            Err(ScrubError::Io(_))
        ));
    }
}
