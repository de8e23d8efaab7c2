//! 清洗结果的日志预览

use std::fmt::{self, Write};

/// 按单词重排的预览视图：首尾空白去掉，单词之间保留一个空格，
/// 超过 `max_chars` 个字符时截断并追加 `…`
pub struct Preview<'a> {
    text: &'a str,
    max_chars: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut budget = self.max_chars;
        for (i, word) in self.text.split_whitespace().enumerate() {
            let separator = if i == 0 { None } else { Some(' ') };
            for ch in separator.into_iter().chain(word.chars()) {
                if budget == 0 {
                    return f.write_char('…');
                }
                f.write_char(ch)?;
                budget -= 1;
            }
        }
        Ok(())
    }
}

/// 清洗后邮件正文的单行预览（不分配）
pub fn preview_compact(text: &str, max_chars: usize) -> Preview<'_> {
    Preview { text, max_chars }
}
