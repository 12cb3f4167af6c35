use std::fmt;

use serde::Serialize;

/// Performance band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// 90% and up.
    Outstanding,
    /// 70% and up.
    Great,
    /// 50% and up.
    Good,
    KeepLearning,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Outstanding,
            70..=89 => Grade::Great,
            50..=69 => Grade::Good,
            _ => Grade::KeepLearning,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Outstanding => "Outstanding! You're a keyboard shortcut master!",
            Grade::Great => "Great job! You know your shortcuts well.",
            Grade::Good => "Good effort! Keep practicing to improve.",
            Grade::KeepLearning => "Keep learning! Shortcuts will save you time.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
