//! 有序规则集
//! 规则严格按顺序逐条应用，每条规则作用于上一条的输出

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::patterns::{canonical_specs, extended_specs};
use super::rule::{RewriteRule, RuleSpec, DEFAULT_SEPARATOR};
use crate::error::ScrubResult;

/// 内置标准规则集（只编译一次，全局共享）
static CANONICAL_RULE_SET: Lazy<Arc<RuleSet>> = Lazy::new(|| {
    Arc::new(
        RuleSet::from_specs("canonical", &canonical_specs(DEFAULT_SEPARATOR))
            .expect("built-in canonical rules must compile"),
    )
});

/// 内置扩展规则集
static EXTENDED_RULE_SET: Lazy<Arc<RuleSet>> = Lazy::new(|| {
    Arc::new(
        RuleSet::from_specs("extended", &extended_specs(DEFAULT_SEPARATOR))
            .expect("built-in extended rules must compile"),
    )
});

/// 有序改写规则集
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// 共享的标准规则集
    pub fn canonical() -> Arc<RuleSet> {
        Arc::clone(&CANONICAL_RULE_SET)
    }

    /// 共享的扩展规则集
    pub fn extended() -> Arc<RuleSet> {
        Arc::clone(&EXTENDED_RULE_SET)
    }

    /// 使用自定义分隔符编译标准规则集
    pub fn canonical_with_separator(separator: &str) -> ScrubResult<RuleSet> {
        Self::from_specs("canonical", &canonical_specs(separator))
    }

    /// 使用自定义分隔符编译扩展规则集
    pub fn extended_with_separator(separator: &str) -> ScrubResult<RuleSet> {
        Self::from_specs("extended", &extended_specs(separator))
    }

    /// 按给定顺序编译规则定义，任一规则非法即失败
    pub fn from_specs(name: impl Into<String>, specs: &[RuleSpec]) -> ScrubResult<RuleSet> {
        specs
            .iter()
            .try_fold(RuleSetBuilder::new(name), |builder, spec| builder.spec(spec))
            .map(RuleSetBuilder::build)
    }

    pub fn builder(name: impl Into<String>) -> RuleSetBuilder {
        RuleSetBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// 按名称查找单条规则（便于单独测试某条规则）
    pub fn rule(&self, name: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn specs(&self) -> Vec<RuleSpec> {
        self.rules.iter().map(RewriteRule::to_spec).collect()
    }
}

/// 规则集构建器：按追加顺序保存规则
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    name: String,
    rules: Vec<RewriteRule>,
}

impl RuleSetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// 追加已编译规则
    pub fn rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 编译并追加规则定义
    pub fn spec(self, spec: &RuleSpec) -> ScrubResult<Self> {
        Ok(self.rule(spec.compile()?))
    }

    /// 编译并追加一条规则
    pub fn pattern(
        self,
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> ScrubResult<Self> {
        Ok(self.rule(RewriteRule::new(name, pattern, replacement)?))
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            name: self.name,
            rules: self.rules,
        }
    }
}
