//! 词表与语料数据模型定义
//! 仅存储数据，无剪枝逻辑，支持序列化/反序列化（与 dictionary / texts 文件格式一致）

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// 单篇文档：有序的词元序列（顺序对下游有意义，剪枝不重排）
pub type Document = Vec<String>;

/// 词表：词项 -> 文档频率（包含该词项至少一次的文档数）
/// JSON 形式为扁平对象 `{"term": count}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    doc_freq: FxHashMap<String, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从语料统计文档频率：同一文档内重复出现只计一次
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut doc_freq: FxHashMap<String, u64> = FxHashMap::default();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for document in corpus.iter() {
            seen.clear();
            for token in document {
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        Self { doc_freq }
    }

    /// 写入（或覆盖）单个词项的文档频率
    pub fn insert(&mut self, term: impl Into<String>, frequency: u64) -> Option<u64> {
        self.doc_freq.insert(term.into(), frequency)
    }

    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.doc_freq.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.doc_freq.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    /// 遍历 (词项, 文档频率)，顺序不保证
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.doc_freq.iter().map(|(term, freq)| (term.as_str(), *freq))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            doc_freq: iter.into_iter().map(|(t, f)| (t.into(), f)).collect(),
        }
    }
}

/// 语料：有序文档序列，文档下标与外部元数据（标题/标签）按位置对齐
/// JSON 形式为二维字符串数组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// 全部文档的词元总数
    pub fn total_tokens(&self) -> usize {
        self.documents.iter().map(Vec::len).sum()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl From<Vec<Document>> for Corpus {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
