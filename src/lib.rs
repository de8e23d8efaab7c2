//! corpus-scrub - 文本挖掘语料规范化：文档频率词表剪枝 + 邮件样板剥离

// 导出全局错误类型
pub use self::error::{ScrubError, ScrubResult};

// 导出配置模块
pub use self::config::{
    ConfigManager, CustomConfigBuilder, PipelineConfig, PruneConfig, RuleSetKind, StripConfig,
};

// 导出词表剪枝核心接口
pub use self::vocab::{
    prune, Corpus, Document, NoiseReason, PruneRule, PruneStats, Vocabulary, VocabularyPruner,
};

// 导出样板剥离核心接口
pub use self::strip::{
    strip, BoilerplateStripper, RewriteRule, RuleSet, RuleSetBuilder, RuleSpec, StripStats,
};

// 导出主题词接口
pub use self::topics::{top_words, TopicModelOutput, TopicModelParams, TopicWords};

// 导出收集与存储接口
pub use self::collect::{
    strip_batch, CleanedEmail, CollectReport, MailCollector, RawEmail, SkipReason, Skipped,
};
pub use self::store::{CorpusStore, StoreFormat};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod vocab;
pub mod strip;
pub mod topics;
pub mod collect;
pub mod store;
pub mod utils;
