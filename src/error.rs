//! 全局错误类型定义
//! 配置期错误（阈值/规则/空语料）快速失败，I/O 与序列化错误统一透传

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum ScrubError {
    // ===================== 配置相关错误 =====================
    /// 剪枝阈值非法（low_threshold < 0 或 high_fraction 不在 [0,1]）
    #[error("Invalid threshold `{name}`: {value}")]
    InvalidThreshold { name: &'static str, value: String },

    /// 文档总数为 0，无法计算文档频率占比
    #[error("Empty corpus: total document count is zero")]
    EmptyCorpus,

    /// 改写规则的正则编译失败
    #[error("Invalid rule `{name}`: {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: RegexError,
    },

    // ===================== 数据相关错误 =====================
    /// 主题-词矩阵某一行长度与词表大小不一致
    #[error("Topic {topic} has {found} weights, vocabulary has {expected} terms")]
    DimensionMismatch {
        topic: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===================== 基础错误 =====================
    #[error("IO operation failed: {0}")]
    Io(#[from] IoError),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("MessagePack error: {0}")]
    MsgPack(String),
}

impl ScrubError {
    /// 构造阈值错误，value 统一格式化为字符串便于诊断输出
    pub fn invalid_threshold(name: &'static str, value: impl ToString) -> Self {
        ScrubError::InvalidThreshold {
            name,
            value: value.to_string(),
        }
    }
}

// 全局Result类型
pub type ScrubResult<T> = Result<T, ScrubError>;
