//! 内置规则的正则定义
//! 顺序即应用顺序：后续规则依赖前序规则已完成的结构性删除

use super::rule::RuleSpec;

// ===================== 标准规则集 =====================

/// 邮件头块：Message-ID … X-FileName 行区间 / To: … Subject 行区间 / 引用的 `< Message-ID` 头块
pub const EMAIL_HEADER: &str = concat!(
    r"(?:Message-ID(?:.*?\n)*X-FileName.*?\n)",
    r"|(?:To:(?:.*?\n)*?Subject.*?\n)",
    r"|(?:< Message-ID(?:.*?\n)*.*?X-FileName.*?\n)",
);

/// 成对出现的分隔线包围的引用块（连同两条分隔线一起删除）
pub const DASH_BLOCK: &str = r"(?s)\s-{15}.*?-{15}\s";
pub const ASTERISK_BLOCK: &str = r"(?s)\s\*{5}.*?\*{5}\s";
pub const UNDERSCORE_BLOCK: &str = r"(?s)\s_{15}.*?_{15}\s";

/// 以 ` -` 开头的签名行
pub const DASH_SIGNATURE_LINE: &str = r"\n -.*";
/// 首个非空白字符为数字的列表行
pub const NUMBERED_LINE: &str = r"\n\s*\d.*";
/// 仅由 1~3 个单词组成的孤立标签行（如单独的 From / cc）
pub const LABEL_LINE: &str = r"\n *\w+(?:\s+\w+){0,2} *\n";

// ===================== 扩展规则集 =====================

pub const EMAIL_ADDRESS: &str = r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+";
/// 方括号/圆括号包裹的数字残留，如 `[3]`、`(713)`
pub const BRACKET_NUMBER: &str = r"[\[(]\s*\d[\d\s.,:/-]*[\])]";
/// 含 `word:` 字段标签的行（冒号后为空白或行尾，排除 URL 与时间）
pub const COLON_LINE: &str = r"(?m)^.*?\w:(?:[ \t].*)?$";
pub const WHITESPACE_RUN: &str = r"\s+";
/// 两侧为空白的单个非单词字符；相邻的多个孤立符号一次折叠
pub const ISOLATED_SYMBOL: &str = r"\s(?:[^\w\s]\s)+";

/// 标准规则集定义（步骤 1~4）
pub fn canonical_specs(separator: &str) -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("email_header", EMAIL_HEADER, separator),
        RuleSpec::new("dash_block", DASH_BLOCK, separator),
        RuleSpec::new("asterisk_block", ASTERISK_BLOCK, separator),
        RuleSpec::new("underscore_block", UNDERSCORE_BLOCK, separator),
        RuleSpec::new("dash_signature_line", DASH_SIGNATURE_LINE, separator),
        RuleSpec::new("numbered_line", NUMBERED_LINE, separator),
        RuleSpec::new("label_line", LABEL_LINE, separator),
    ]
}

/// 扩展规则集定义：标准规则 + 地址/数字残留/冒号行折叠 + 空白归一
pub fn extended_specs(separator: &str) -> Vec<RuleSpec> {
    let mut specs = canonical_specs(separator);
    specs.extend([
        RuleSpec::new("email_address", EMAIL_ADDRESS, separator),
        RuleSpec::new("bracket_number", BRACKET_NUMBER, separator),
        RuleSpec::new("colon_line", COLON_LINE, separator),
        // 空白归一固定为单个空格，与分隔符无关
        RuleSpec::new("whitespace_run", WHITESPACE_RUN, " "),
        RuleSpec::new("isolated_symbol", ISOLATED_SYMBOL, " "),
    ]);
    specs
}
