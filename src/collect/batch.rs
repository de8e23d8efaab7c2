//! 批量剥离：逐项独立处理，保持标识与顺序

use serde::{Deserialize, Serialize};

use super::collector::RawEmail;
use crate::strip::BoilerplateStripper;

/// 剥离后的邮件正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedEmail {
    pub id: String,
    pub text: String,
}

/// 对每封邮件独立执行剥离
pub fn strip_batch(emails: &[RawEmail], stripper: &BoilerplateStripper) -> Vec<CleanedEmail> {
    emails
        .iter()
        .map(|email| CleanedEmail {
            id: email.id.clone(),
            text: stripper.strip(&email.text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_batch_preserves_ids_and_order() {
        let emails = vec![
            RawEmail {
                id: "lewis-a/1.".to_string(),
                text: "Message-ID: <1>\nX-FileName: a.txt\nHello there".to_string(),
            },
            RawEmail {
                id: "lewis-a/2.".to_string(),
                text: String::new(),
            },
        ];

        let cleaned = strip_batch(&emails, &BoilerplateStripper::canonical());
        assert_eq!(
            cleaned,
            vec![
                CleanedEmail {
                    id: "lewis-a/1.".to_string(),
                    text: " Hello there".to_string(),
                },
                CleanedEmail {
                    id: "lewis-a/2.".to_string(),
                    text: String::new(),
                },
            ]
        );
    }
}
