//! 语料/词表持久化
//! 按扩展名选择格式：`.mp` / `.msgpack` 为 MessagePack，其余为 JSON

use std::path::Path;

use rmp_serde::{from_slice, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ScrubError, ScrubResult};
use crate::vocab::{Corpus, Vocabulary};

/// 存储格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    MsgPack,
}

impl StoreFormat {
    /// 根据文件扩展名判断格式
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mp") || ext.eq_ignore_ascii_case("msgpack") => {
                StoreFormat::MsgPack
            }
            _ => StoreFormat::Json,
        }
    }

    pub fn decode<T: DeserializeOwned>(self, data: &[u8]) -> ScrubResult<T> {
        match self {
            StoreFormat::Json => Ok(serde_json::from_slice(data)?),
            StoreFormat::MsgPack => from_slice(data)
                .map_err(|e| ScrubError::MsgPack(format!("deserialize failed: {}", e))),
        }
    }

    pub fn encode<T: Serialize>(self, value: &T) -> ScrubResult<Vec<u8>> {
        match self {
            StoreFormat::Json => Ok(serde_json::to_vec(value)?),
            StoreFormat::MsgPack => {
                let mut data = Vec::new();
                value
                    .serialize(&mut Serializer::new(&mut data))
                    .map_err(|e| ScrubError::MsgPack(format!("serialize failed: {}", e)))?;
                Ok(data)
            }
        }
    }
}

/// 语料存储管理器
pub struct CorpusStore;

impl CorpusStore {
    /// 读取并解码任意可反序列化的值
    pub async fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> ScrubResult<T> {
        let path = path.as_ref();
        let format = StoreFormat::from_path(path);
        let data = tokio::fs::read(path).await?;
        let value = format.decode(&data)?;
        debug!("Loaded {} ({:?}, {} bytes)", path.display(), format, data.len());
        Ok(value)
    }

    /// 编码并写入
    pub async fn save<T: Serialize>(path: impl AsRef<Path>, value: &T) -> ScrubResult<()> {
        let path = path.as_ref();
        let format = StoreFormat::from_path(path);
        let data = format.encode(value)?;
        debug!("Saving {} ({:?}, {} bytes)", path.display(), format, data.len());
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    pub async fn load_vocabulary(path: impl AsRef<Path>) -> ScrubResult<Vocabulary> {
        Self::load(path).await
    }

    pub async fn load_corpus(path: impl AsRef<Path>) -> ScrubResult<Corpus> {
        Self::load(path).await
    }

    pub async fn save_corpus(path: impl AsRef<Path>, corpus: &Corpus) -> ScrubResult<()> {
        Self::save(path, corpus).await
    }
}
