//! 样板剥离器
//! 对单段原始文本按规则集顺序逐条替换，输出尽力而为的正文近似

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use super::rule_set::RuleSet;

/// 按顺序应用规则集；任何输入都不会失败，无匹配的规则不做改动
pub fn strip(raw_text: &str, rule_set: &RuleSet) -> String {
    let mut text = raw_text.to_owned();
    for rule in rule_set.rules() {
        let rewritten = match rule.apply(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(rewritten) = rewritten {
            text = rewritten;
        }
    }
    text
}

/// 单次剥离统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripStats {
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// (规则名, 匹配次数)，与规则集顺序一致
    pub rule_matches: Vec<(String, usize)>,
}

impl StripStats {
    /// 至少命中一次的规则数
    pub fn rules_matched(&self) -> usize {
        self.rule_matches.iter().filter(|(_, count)| *count > 0).count()
    }

    pub fn print_stats(&self) {
        debug!(
            "Boilerplate stripping | Bytes: {} -> {} | Rules matched: {}/{}",
            self.bytes_in,
            self.bytes_out,
            self.rules_matched(),
            self.rule_matches.len()
        );
        for (name, count) in self.rule_matches.iter().filter(|(_, c)| *c > 0) {
            debug!("  {}: {} match(es)", name, count);
        }
    }
}

/// 样板剥离器：持有共享规则集，单段文本为最小处理单元
#[derive(Debug, Clone)]
pub struct BoilerplateStripper {
    rule_set: Arc<RuleSet>,
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self::canonical()
    }
}

impl BoilerplateStripper {
    pub fn new(rule_set: Arc<RuleSet>) -> Self {
        Self { rule_set }
    }

    pub fn canonical() -> Self {
        Self::new(RuleSet::canonical())
    }

    pub fn extended() -> Self {
        Self::new(RuleSet::extended())
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn strip(&self, raw_text: &str) -> String {
        strip(raw_text, &self.rule_set)
    }

    /// 剥离并记录每条规则在其输入上的匹配次数
    pub fn strip_with_stats(&self, raw_text: &str) -> (String, StripStats) {
        let mut stats = StripStats {
            bytes_in: raw_text.len(),
            rule_matches: Vec::with_capacity(self.rule_set.len()),
            ..Default::default()
        };

        let mut text = raw_text.to_owned();
        for rule in self.rule_set.rules() {
            let count = rule.count_matches(&text);
            stats.rule_matches.push((rule.name().to_string(), count));
            if count > 0 {
                text = rule.apply(&text).into_owned();
            }
        }

        stats.bytes_out = text.len();
        (text, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EMAIL: &str = "Message-ID: <123.JavaMail.evans@thyme>\n\
Date: Mon, 14 May 2001 16:39:00 -0700 (PDT)\n\
From: a@enron.com\n\
To: b@enron.com\n\
Subject: Re: gas\n\
X-FileName: lewis-a.nsf\n\
\n\
Please review the attached.\n \
-Andy\n \
---------------\n\
From: someone\n\
Original note\n\
--------------- \n\
Thanks again for the help";

    fn apply_rule(rule_set: &RuleSet, name: &str, text: &str) -> String {
        rule_set
            .rule(name)
            .unwrap_or_else(|| panic!("missing rule {name}"))
            .apply(text)
            .into_owned()
    }

    #[test]
    fn test_sample_email_layout() {
        // 续行符会吞掉下一行行首空白，确认 ` -Andy` 与 ` ----` 的前导空格被保留
        assert!(SAMPLE_EMAIL.contains("attached.\n -Andy\n ---------------\nFrom"));
        assert!(SAMPLE_EMAIL.contains("--------------- \nThanks"));
    }

    #[test]
    fn test_email_header_message_id_span() {
        let rules = RuleSet::canonical();
        let text = "Message-ID: <1>\nX-FileName: a.txt\nHello there";
        assert_eq!(apply_rule(&rules, "email_header", text), " Hello there");
    }

    #[test]
    fn test_email_header_to_subject_span() {
        let rules = RuleSet::canonical();
        let text = "Hi\nTo: bob@enron.com\ncc: amy\nSubject: Gas\nBody";
        assert_eq!(apply_rule(&rules, "email_header", text), "Hi\n Body");
    }

    #[test]
    fn test_email_header_quoted_block() {
        let rules = RuleSet::canonical();
        let text = "> text\n< Message-ID: <2>\nDate: x\nX-FileName: b.nsf\nreply";
        assert_eq!(apply_rule(&rules, "email_header", text), "> text\n reply");
    }

    #[test]
    fn test_dash_block() {
        let rules = RuleSet::canonical();
        let text = "Body text\n ---------------\nQuoted old message\n--------------- \nMore body";
        assert_eq!(apply_rule(&rules, "dash_block", text), "Body text\n \nMore body");
    }

    #[test]
    fn test_asterisk_block() {
        let rules = RuleSet::canonical();
        let text = "Keep this\n***** forwarded *****\nafter";
        assert_eq!(apply_rule(&rules, "asterisk_block", text), "Keep this after");
    }

    #[test]
    fn test_underscore_block() {
        let rules = RuleSet::canonical();
        let text = "Thanks\n_______________\nold note\n_______________\nNew";
        assert_eq!(apply_rule(&rules, "underscore_block", text), "Thanks New");
    }

    #[test]
    fn test_unpaired_delimiter_is_left_alone() {
        let rules = RuleSet::canonical();
        let text = "Body\n ---------------\nno closing line";
        assert_eq!(apply_rule(&rules, "dash_block", text), text);
    }

    #[test]
    fn test_dash_signature_line() {
        let rules = RuleSet::canonical();
        let text = "Regards\n -John\nP.S.";
        assert_eq!(apply_rule(&rules, "dash_signature_line", text), "Regards \nP.S.");
    }

    #[test]
    fn test_numbered_line() {
        let rules = RuleSet::canonical();
        let text = "Agenda\n  1. budget\n2. staffing";
        assert_eq!(apply_rule(&rules, "numbered_line", text), "Agenda  ");
    }

    #[test]
    fn test_label_line() {
        let rules = RuleSet::canonical();
        assert_eq!(
            apply_rule(&rules, "label_line", "Body text here today\nFrom\nMore body text here"),
            "Body text here today More body text here"
        );
        assert_eq!(
            apply_rule(&rules, "label_line", "x y z w\nsee you soon\nrest of body"),
            "x y z w rest of body"
        );
        // 四个单词的行视为正文
        let body = "start\nthis has four words\nend";
        assert_eq!(apply_rule(&rules, "label_line", body), body);
    }

    #[test]
    fn test_email_address() {
        let rules = RuleSet::extended();
        assert_eq!(
            apply_rule(&rules, "email_address", "mail jeff.dasovich@enron.com now"),
            "mail   now"
        );
    }

    #[test]
    fn test_bracket_number() {
        let rules = RuleSet::extended();
        assert_eq!(
            apply_rule(&rules, "bracket_number", "call (713) 853-5000 ref [3]"),
            "call   853-5000 ref  "
        );
        assert_eq!(apply_rule(&rules, "bracket_number", "(see below)"), "(see below)");
    }

    #[test]
    fn test_colon_line() {
        let rules = RuleSet::extended();
        let text = "Hello\nSent by: Jeff\nsee http://enron.com at 10:30\nbye";
        assert_eq!(
            apply_rule(&rules, "colon_line", text),
            "Hello\n \nsee http://enron.com at 10:30\nbye"
        );
    }

    #[test]
    fn test_whitespace_and_isolated_symbol() {
        let rules = RuleSet::extended();
        assert_eq!(apply_rule(&rules, "whitespace_run", "a \n\t b"), "a b");
        assert_eq!(apply_rule(&rules, "isolated_symbol", "rates - up & down"), "rates up down");
        assert_eq!(apply_rule(&rules, "isolated_symbol", "rates - - up & down"), "rates up down");
        assert_eq!(apply_rule(&rules, "isolated_symbol", "a > > > b"), "a b");
    }

    #[test]
    fn test_extended_collapses_adjacent_symbols() {
        let stripper = BoilerplateStripper::extended();
        assert_eq!(stripper.strip("rates - - up & down"), "rates up down");
    }

    #[test]
    fn test_canonical_pipeline() {
        let stripper = BoilerplateStripper::canonical();
        assert_eq!(
            stripper.strip(SAMPLE_EMAIL),
            " \nPlease review the attached. \n \nThanks again for the help"
        );
    }

    #[test]
    fn test_extended_pipeline() {
        let stripper = BoilerplateStripper::extended();
        assert_eq!(
            stripper.strip(SAMPLE_EMAIL),
            " Please review the attached. Thanks again for the help"
        );
    }

    #[test]
    fn test_rules_apply_to_previous_output() {
        // 第二条规则只能看到第一条规则的输出
        let rule_set = RuleSet::builder("chain")
            .pattern("a_to_b", "a", "b")
            .unwrap()
            .pattern("b_to_c", "b", "c")
            .unwrap()
            .build();
        assert_eq!(strip("ab", &rule_set), "cc");

        let reversed = RuleSet::builder("chain")
            .pattern("b_to_c", "b", "c")
            .unwrap()
            .pattern("a_to_b", "a", "b")
            .unwrap()
            .build();
        assert_eq!(strip("ab", &reversed), "bc");
    }

    #[test]
    fn test_strip_is_deterministic() {
        let stripper = BoilerplateStripper::extended();
        assert_eq!(stripper.strip(SAMPLE_EMAIL), stripper.strip(SAMPLE_EMAIL));
    }

    #[test]
    fn test_empty_input_is_noop_for_every_rule() {
        let extended = RuleSet::extended();
        for rule in extended.rules() {
            assert_eq!(rule.apply(""), "", "rule {} changed empty input", rule.name());
        }
        assert_eq!(BoilerplateStripper::extended().strip(""), "");
    }

    #[test]
    fn test_strip_with_stats_matches_strip() {
        let stripper = BoilerplateStripper::canonical();
        let (text, stats) = stripper.strip_with_stats(SAMPLE_EMAIL);
        assert_eq!(text, stripper.strip(SAMPLE_EMAIL));
        assert_eq!(stats.bytes_in, SAMPLE_EMAIL.len());
        assert_eq!(stats.bytes_out, text.len());
        assert_eq!(stats.rule_matches.len(), stripper.rule_set().len());
        assert_eq!(stats.rule_matches[0], ("email_header".to_string(), 1));
        assert_eq!(stats.rules_matched(), 3);
    }
}
