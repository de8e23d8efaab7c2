//! 噪声词判定规则
//! 按文档频率双阈值判定：过稀（≤ low_threshold）或过常见（占比 ≥ high_fraction）

use serde::{Deserialize, Serialize};

use crate::error::{ScrubError, ScrubResult};

/// 默认低频阈值：出现在 3 篇及以下文档中的词项视为噪声
pub const DEFAULT_LOW_THRESHOLD: i64 = 3;
/// 默认高频占比：出现在 25% 及以上文档中的词项视为噪声（停用词）
pub const DEFAULT_HIGH_FRACTION: f64 = 0.25;

/// 噪声原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseReason {
    /// 文档频率 ≤ 低频阈值
    TooRare,
    /// 文档频率占比 ≥ 高频占比
    TooCommon,
}

/// 剪枝判定规则（无状态，每个词项只评估一次）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneRule {
    low_threshold: i64,
    high_fraction: f64,
}

impl Default for PruneRule {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_fraction: DEFAULT_HIGH_FRACTION,
        }
    }
}

impl PruneRule {
    /// 创建规则并校验阈值，非法阈值直接失败，不做静默修正
    pub fn new(low_threshold: i64, high_fraction: f64) -> ScrubResult<Self> {
        if low_threshold < 0 {
            return Err(ScrubError::invalid_threshold("low_threshold", low_threshold));
        }
        // NaN 不落在 [0,1] 内，同样拒绝
        if !(0.0..=1.0).contains(&high_fraction) {
            return Err(ScrubError::invalid_threshold("high_fraction", high_fraction));
        }
        Ok(Self {
            low_threshold,
            high_fraction,
        })
    }

    pub fn low_threshold(&self) -> i64 {
        self.low_threshold
    }

    pub fn high_fraction(&self) -> f64 {
        self.high_fraction
    }

    /// 判定词项是否为噪声，返回噪声原因；过稀优先于过常见
    /// total_documents 由调用方保证非 0
    #[inline]
    pub fn classify(&self, frequency: u64, total_documents: u64) -> Option<NoiseReason> {
        // low_threshold 已校验为非负
        if frequency <= self.low_threshold as u64 {
            return Some(NoiseReason::TooRare);
        }
        if frequency as f64 / total_documents as f64 >= self.high_fraction {
            return Some(NoiseReason::TooCommon);
        }
        None
    }

    #[inline]
    pub fn is_noise(&self, frequency: u64, total_documents: u64) -> bool {
        self.classify(frequency, total_documents).is_some()
    }
}
