//! 邮件文本收集器
//! 从显式根目录遍历邮件文件，逐项返回成功或跳过原因；单项失败不中断整体遍历

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 原始邮件文本（标识 = 相对根目录的路径）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmail {
    pub id: String,
    pub text: String,
}

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 根目录不存在或不是目录
    MissingRoot,
    /// 目录遍历失败（权限不足等）
    Walk(String),
    /// 文件读取失败
    Read(String),
    /// 文件内容不是合法 UTF-8（严格模式）
    NotUtf8,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingRoot => write!(f, "root is not a readable directory"),
            SkipReason::Walk(e) => write!(f, "walk failed: {}", e),
            SkipReason::Read(e) => write!(f, "read failed: {}", e),
            SkipReason::NotUtf8 => write!(f, "content is not valid UTF-8"),
        }
    }
}

/// 被跳过的单项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// 单项结果：成功读取或带原因跳过
pub type ItemOutcome = Result<RawEmail, Skipped>;

/// 收集汇总
#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    pub items: Vec<RawEmail>,
    pub skipped: Vec<Skipped>,
}

impl CollectReport {
    pub fn total(&self) -> usize {
        self.items.len() + self.skipped.len()
    }
}

impl FromIterator<ItemOutcome> for CollectReport {
    fn from_iter<I: IntoIterator<Item = ItemOutcome>>(iter: I) -> Self {
        let mut report = CollectReport::default();
        for outcome in iter {
            match outcome {
                Ok(item) => report.items.push(item),
                Err(skipped) => report.skipped.push(skipped),
            }
        }
        report
    }
}

/// 换行统一为 `\n`：`\r\n` 与单独的 `\r` 都会被替换
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 邮件收集器
#[derive(Debug, Clone)]
pub struct MailCollector {
    root: PathBuf,
    // 非 UTF-8 内容按有损方式解码而不是跳过
    lossy: bool,
}

impl MailCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lossy: false,
        }
    }

    pub fn with_lossy_utf8(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn skipped(path: &Path, reason: SkipReason) -> Skipped {
        warn!("Skipping {}: {}", path.display(), reason);
        Skipped {
            path: path.to_path_buf(),
            reason,
        }
    }

    /// 文件标识：相对根目录路径，统一使用 `/` 分隔
    fn item_id(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// 读取单个文件
    async fn read_item(&self, path: &Path) -> ItemOutcome {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => return Err(Self::skipped(path, SkipReason::Read(e.to_string()))),
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) if self.lossy => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            Err(_) => return Err(Self::skipped(path, SkipReason::NotUtf8)),
        };
        Ok(RawEmail {
            id: self.item_id(path),
            text: normalize_newlines(text),
        })
    }

    /// 同步遍历根目录，返回普通文件路径（按文件名排序，结果确定）
    fn walk_files(root: &Path) -> Vec<Result<PathBuf, Skipped>> {
        if !root.is_dir() {
            return vec![Err(Self::skipped(root, SkipReason::MissingRoot))];
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(Ok(entry.into_path())),
                Ok(_) => {}
                Err(e) => {
                    let path = e.path().unwrap_or(root);
                    files.push(Err(Self::skipped(path, SkipReason::Walk(e.to_string()))));
                }
            }
        }
        files
    }

    /// 遍历根目录下全部普通文件并逐个读取
    /// 目录遍历在阻塞线程池执行，文件读取走 tokio::fs
    pub async fn collect(&self) -> Vec<ItemOutcome> {
        let root = self.root.clone();
        let files = match tokio::task::spawn_blocking(move || Self::walk_files(&root)).await {
            Ok(files) => files,
            Err(e) => {
                return vec![Err(Self::skipped(&self.root, SkipReason::Walk(e.to_string())))];
            }
        };

        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            match file {
                Ok(path) => outcomes.push(self.read_item(&path).await),
                Err(skipped) => outcomes.push(Err(skipped)),
            }
        }

        debug!(
            "Collected {} item(s) under {}",
            outcomes.len(),
            self.root.display()
        );
        outcomes
    }

    /// 遍历并汇总为成功项与跳过项
    pub async fn collect_report(&self) -> CollectReport {
        self.collect().await.into_iter().collect()
    }
}
