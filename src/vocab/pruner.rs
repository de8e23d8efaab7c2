//! 词表剪枝器核心
//! 两阶段：先一次性构建噪声词集合 O(|词表|)，再单遍过滤语料 O(总词元数)

use rustc_hash::FxHashSet;

use super::model::{Corpus, Document, Vocabulary};
use super::prune_stats::PruneStats;
use super::rule::{NoiseReason, PruneRule};
use crate::config::PruneConfig;
use crate::error::{ScrubError, ScrubResult};

/// 噪声词集合（借用词表中的词项，避免复制）
pub type NoiseSet<'v> = FxHashSet<&'v str>;

/// 词表剪枝器
#[derive(Debug, Clone, Default)]
pub struct VocabularyPruner {
    rule: PruneRule,
    // 覆盖文档总数；None 时取语料长度
    document_count: Option<u64>,
}

impl VocabularyPruner {
    pub fn new(rule: PruneRule) -> Self {
        Self {
            rule,
            document_count: None,
        }
    }

    /// 从配置构建剪枝器（阈值在此处校验）
    pub fn from_config(config: &PruneConfig) -> ScrubResult<Self> {
        let pruner = Self::new(PruneRule::new(config.low_threshold, config.high_fraction)?);
        Ok(match config.total_documents {
            Some(count) => pruner.with_document_count(count),
            None => pruner,
        })
    }

    /// 指定计算占比时使用的文档总数（词表统计自更大的文档集合时使用）
    pub fn with_document_count(mut self, count: u64) -> Self {
        self.document_count = Some(count);
        self
    }

    pub fn rule(&self) -> &PruneRule {
        &self.rule
    }

    /// 解析文档总数，为 0 时返回 EmptyCorpus
    fn total_documents(&self, corpus: &Corpus) -> ScrubResult<u64> {
        let total = self.document_count.unwrap_or(corpus.len() as u64);
        if total == 0 {
            return Err(ScrubError::EmptyCorpus);
        }
        Ok(total)
    }

    /// 构建噪声词集合，同时统计过稀/过常见数量
    fn classify_vocabulary<'v>(
        &self,
        vocabulary: &'v Vocabulary,
        total_documents: u64,
        stats: &mut PruneStats,
    ) -> NoiseSet<'v> {
        let mut noise = NoiseSet::default();
        for (term, frequency) in vocabulary.iter() {
            match self.rule.classify(frequency, total_documents) {
                Some(NoiseReason::TooRare) => stats.rare_terms += 1,
                Some(NoiseReason::TooCommon) => stats.common_terms += 1,
                None => continue,
            }
            noise.insert(term);
        }
        noise
    }

    /// 计算噪声词集合
    pub fn noise_terms<'v>(
        &self,
        vocabulary: &'v Vocabulary,
        corpus: &Corpus,
    ) -> ScrubResult<NoiseSet<'v>> {
        let total = self.total_documents(corpus)?;
        Ok(self.classify_vocabulary(vocabulary, total, &mut PruneStats::default()))
    }

    /// 单篇文档剪枝：删除所有噪声词出现，保留其余词元的相对顺序
    /// 文档间互不依赖，可作为外部并行调度的最小单元
    #[inline]
    pub fn prune_document(document: &[String], noise: &NoiseSet<'_>) -> Document {
        document
            .iter()
            .filter(|token| !noise.contains(token.as_str()))
            .cloned()
            .collect()
    }

    /// 剪枝整个语料；文档数量与顺序不变，清空的文档保留为空序列
    pub fn prune(&self, vocabulary: &Vocabulary, corpus: &Corpus) -> ScrubResult<Corpus> {
        self.prune_with_stats(vocabulary, corpus).map(|(pruned, _)| pruned)
    }

    /// 剪枝并返回统计信息
    pub fn prune_with_stats(
        &self,
        vocabulary: &Vocabulary,
        corpus: &Corpus,
    ) -> ScrubResult<(Corpus, PruneStats)> {
        let total_documents = self.total_documents(corpus)?;
        let mut stats = PruneStats {
            vocabulary_terms: vocabulary.len(),
            total_documents,
            tokens_before: corpus.total_tokens(),
            ..Default::default()
        };

        // 1. 噪声词集合只构建一次
        let noise = self.classify_vocabulary(vocabulary, total_documents, &mut stats);

        // 2. 单遍过滤
        let pruned: Corpus = corpus
            .iter()
            .map(|document| Self::prune_document(document, &noise))
            .collect();

        stats.tokens_after = pruned.total_tokens();
        stats.emptied_documents = corpus
            .iter()
            .zip(pruned.iter())
            .filter(|(before, after)| !before.is_empty() && after.is_empty())
            .count();

        Ok((pruned, stats))
    }
}

/// 便捷入口：按给定阈值剪枝语料
pub fn prune(
    vocabulary: &Vocabulary,
    corpus: &Corpus,
    low_threshold: i64,
    high_fraction: f64,
) -> ScrubResult<Corpus> {
    VocabularyPruner::new(PruneRule::new(low_threshold, high_fraction)?).prune(vocabulary, corpus)
}
