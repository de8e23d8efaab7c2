//! 剥离模块：基于有序正则改写规则去除邮件头、引用块、签名等样板文本
pub mod rule;
pub mod patterns;
pub mod rule_set;
pub mod stripper;

// 导出核心接口
pub use self::rule::{RewriteRule, RuleSpec, DEFAULT_SEPARATOR};
pub use self::rule_set::{RuleSet, RuleSetBuilder};
pub use self::stripper::{strip, BoilerplateStripper, StripStats};
