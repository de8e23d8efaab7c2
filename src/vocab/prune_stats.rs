//! 剪枝统计信息的定义与格式化输出

use tracing::debug;

/// 词表剪枝统计信息
/// 记录剪枝过程中的各类指标：
/// 1. 词表规模与噪声词分布（过稀/过常见）
/// 2. 语料词元数变化
/// 3. 被清空的文档数（文档仍保留为空序列）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PruneStats {
    // ========== 词表统计 ==========
    /// 词表词项总数
    pub vocabulary_terms: usize,
    /// 过稀噪声词数
    pub rare_terms: usize,
    /// 过常见噪声词数
    pub common_terms: usize,

    // ========== 语料统计 ==========
    /// 参与占比计算的文档总数
    pub total_documents: u64,
    /// 剪枝前词元数
    pub tokens_before: usize,
    /// 剪枝后词元数
    pub tokens_after: usize,
    /// 剪枝后变为空的文档数
    pub emptied_documents: usize,
}

impl PruneStats {
    /// 噪声词总数
    pub fn noise_terms(&self) -> usize {
        self.rare_terms + self.common_terms
    }

    /// 被删除的词元数
    pub fn removed_tokens(&self) -> usize {
        self.tokens_before.saturating_sub(self.tokens_after)
    }

    /// 格式化输出统计信息（结构化日志）
    pub fn print_stats(&self, total_time: std::time::Duration) {
        debug!(
            "Vocabulary pruning completed | Time: {:?} | Terms: {} | Noise terms: {} (rare {} | common {})",
            total_time,
            self.vocabulary_terms,
            self.noise_terms(),
            self.rare_terms,
            self.common_terms
        );
        debug!(
            "Corpus stats: documents {} | tokens {} -> {} (removed {}) | emptied documents {}",
            self.total_documents,
            self.tokens_before,
            self.tokens_after,
            self.removed_tokens(),
            self.emptied_documents
        );
    }
}
