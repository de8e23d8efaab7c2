//! 收集模块：目录遍历读取原始邮件、逐项跳过汇总、批量剥离
pub mod collector;
pub mod batch;

// 导出核心接口
pub use self::collector::{CollectReport, ItemOutcome, MailCollector, RawEmail, SkipReason, Skipped};
pub use self::batch::{strip_batch, CleanedEmail};
