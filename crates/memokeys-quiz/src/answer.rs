use memokeys_common::AnswerRule;
use memokeys_keys::keymap::{compact, normalize, KeyCombo};

/// Whether `submitted` answers a question whose combo is `expected`.
pub fn answers_match(expected: &str, submitted: &str, rule: AnswerRule) -> bool {
    match rule {
        AnswerRule::Canonical => normalize(expected) == normalize(submitted),
        AnswerRule::Compact => {
            let submitted = compact(submitted);
            !submitted.is_empty() && compact(expected) == submitted
        }
        AnswerRule::CrossPlatform => {
            KeyCombo::parse(expected).with_cmd_as_ctrl()
                == KeyCombo::parse(submitted).with_cmd_as_ctrl()
        }
    }
}
