//! 改写规则模型
//! 一条规则 = 名称 + 正则 + 替换串，配置期编译，运行期只做替换

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ScrubError, ScrubResult};

/// 默认分隔符：被删除的片段统一替换为单个空格
pub const DEFAULT_SEPARATOR: &str = " ";

/// 未编译的规则定义（可从 JSON 配置加载）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

fn default_replacement() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl RuleSpec {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// 编译为可执行规则
    pub fn compile(&self) -> ScrubResult<RewriteRule> {
        RewriteRule::new(self.name.clone(), &self.pattern, self.replacement.clone())
    }
}

/// 编译后的改写规则
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl RewriteRule {
    /// 编译规则，正则非法时返回 InvalidRule（携带规则名）
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> ScrubResult<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| ScrubError::InvalidRule {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            regex,
            replacement: replacement.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// 将所有非重叠匹配替换为替换串；无匹配时返回借用，不分配
    /// 替换串支持 `$1` / `${name}` 分组引用
    #[inline]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }

    /// 非重叠匹配数量
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// 还原为规则定义
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec::new(self.name.clone(), self.pattern(), self.replacement.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_every_match() {
        let rule = RewriteRule::new("digits", r"\d+", "#").unwrap();
        assert_eq!(rule.apply("a1b22c333"), "a#b#c#");
        assert_eq!(rule.count_matches("a1b22c333"), 3);
    }

    #[test]
    fn test_apply_without_match_borrows() {
        let rule = RewriteRule::new("digits", r"\d+", "#").unwrap();
        assert!(matches!(rule.apply("no numbers"), Cow::Borrowed("no numbers")));
        assert!(matches!(rule.apply(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_invalid_pattern_names_rule() {
        let err = RewriteRule::new("broken", r"(unclosed", " ").unwrap_err();
        match err {
            ScrubError::InvalidRule { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_spec_defaults_replacement_to_separator() {
        let spec: RuleSpec =
            serde_json::from_str(r#"{"name": "cc", "pattern": "(?m)^cc:.*$"}"#).unwrap();
        assert_eq!(spec.replacement, " ");

        let rule = spec.compile().unwrap();
        assert_eq!(rule.to_spec(), spec);
        assert_eq!(rule.apply("body\ncc: someone\nmore"), "body\n \nmore");
    }
}
