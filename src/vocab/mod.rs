//! 词表模块：文档频率词表、语料模型与噪声词剪枝
pub mod model;
pub mod rule;
pub mod prune_stats;
pub mod pruner;

// 导出核心接口
pub use self::model::{Corpus, Document, Vocabulary};
pub use self::rule::{NoiseReason, PruneRule, DEFAULT_HIGH_FRACTION, DEFAULT_LOW_THRESHOLD};
pub use self::prune_stats::PruneStats;
pub use self::pruner::{prune, NoiseSet, VocabularyPruner};
