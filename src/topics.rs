//! 主题词提取
//! 主题模型训练由外部库完成，此处只把主题-词权重矩阵归约为每个主题的前 N 个词

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScrubError, ScrubResult};

/// 交给外部主题模型的超参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicModelParams {
    pub n_topics: usize,
    pub n_iter: usize,
    pub random_state: u64,
}

impl Default for TopicModelParams {
    fn default() -> Self {
        Self {
            n_topics: 20,
            n_iter: 1500,
            random_state: 1,
        }
    }
}

/// 外部主题模型的输出文件：超参数 + 词表 + 主题-词矩阵
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicModelOutput {
    #[serde(default)]
    pub params: TopicModelParams,
    pub vocabulary: Vec<String>,
    pub topic_word: Vec<Vec<f64>>,
}

impl TopicModelOutput {
    pub fn top_words(&self, n: usize) -> ScrubResult<Vec<TopicWords>> {
        top_words(&self.topic_word, &self.vocabulary, n)
    }
}

/// 单个主题的前 N 个词（按权重降序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicWords {
    pub topic: usize,
    pub words: Vec<String>,
}

impl fmt::Display for TopicWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic {}: {}", self.topic, self.words.join(" "))
    }
}

/// 对每一行权重取前 n 个词；权重相同按词表原始顺序（稳定排序）
pub fn top_words(
    topic_word: &[Vec<f64>],
    vocabulary: &[String],
    n: usize,
) -> ScrubResult<Vec<TopicWords>> {
    topic_word
        .iter()
        .enumerate()
        .map(|(topic, row)| {
            if row.len() != vocabulary.len() {
                return Err(ScrubError::DimensionMismatch {
                    topic,
                    expected: vocabulary.len(),
                    found: row.len(),
                });
            }
            if let Some(index) = row.iter().position(|w| w.is_nan()) {
                return Err(ScrubError::InvalidInput(format!(
                    "topic {} has NaN weight at term index {}",
                    topic, index
                )));
            }

            let mut order: Vec<usize> = (0..row.len()).collect();
            // sort_by 为稳定排序，NaN 已排除
            order.sort_by(|&a, &b| row[b].partial_cmp(&row[a]).unwrap_or(Ordering::Equal));

            let words = order
                .into_iter()
                .take(n)
                .map(|index| vocabulary[index].clone())
                .collect();
            Ok(TopicWords { topic, words })
        })
        .collect()
}
