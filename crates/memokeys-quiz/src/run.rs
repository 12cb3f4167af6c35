use memokeys_common::{AnswerRule, Platform, QuizError};
use memokeys_config::ShortcutEntry;
use serde::Serialize;
use tracing::{debug, info};

use crate::answer::answers_match;
use crate::grade::Grade;

/// One quiz prompt: an action and the combo that performs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: String,
    pub action: String,
    /// Combo as written in the data file.
    pub expected: String,
    /// Platform `expected` was written for; differs from the quiz platform
    /// when the entry had to fall back.
    pub platform: Platform,
}

impl Question {
    /// Build a question for `platform`, or `None` when the entry has no
    /// combo anywhere along the platform's fallback chain.
    pub fn from_entry(entry: &ShortcutEntry, platform: Platform) -> Option<Self> {
        let (source, combo) = entry.best_combo(platform)?;
        Some(Self {
            id: entry.id.clone(),
            action: entry.action.clone(),
            expected: combo.to_string(),
            platform: source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Given(String),
    Skipped,
}

/// Result of one answered or skipped question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub question: Question,
    pub answer: Answer,
    pub correct: bool,
}

/// A quiz in progress.
///
/// Questions are asked in order. The score only ever goes up, by one per
/// correct answer, so it never exceeds [`QuizRun::total`].
#[derive(Debug, Clone)]
pub struct QuizRun {
    questions: Vec<Question>,
    rule: AnswerRule,
    outcomes: Vec<Outcome>,
    score: usize,
}

impl QuizRun {
    pub fn new(questions: Vec<Question>, rule: AnswerRule) -> Self {
        Self {
            questions,
            rule,
            outcomes: Vec::new(),
            score: 0,
        }
    }

    /// Quiz over the first `count` entries that have a combo for `platform`.
    pub fn from_entries(
        entries: &[ShortcutEntry],
        platform: Platform,
        count: usize,
        rule: AnswerRule,
    ) -> Result<Self, QuizError> {
        let questions: Vec<Question> = entries
            .iter()
            .filter_map(|e| Question::from_entry(e, platform))
            .take(count)
            .collect();
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        info!(
            "starting {platform} quiz with {} questions ({rule:?} answers)",
            questions.len()
        );
        Ok(Self::new(questions, rule))
    }

    /// The question awaiting an answer, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.outcomes.len())
    }

    /// Answer the current question. Returns whether the answer was correct.
    pub fn submit(&mut self, answer: &str) -> Result<bool, QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?.clone();
        let correct = answers_match(&question.expected, answer, self.rule);
        debug!(
            "'{}': expected '{}', got '{answer}' ({})",
            question.action,
            question.expected,
            if correct { "correct" } else { "wrong" }
        );
        if correct {
            self.score += 1;
        }
        self.outcomes.push(Outcome {
            question,
            answer: Answer::Given(answer.to_string()),
            correct,
        });
        Ok(correct)
    }

    /// Record the current question as skipped (counts as wrong).
    pub fn skip(&mut self) -> Result<(), QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?.clone();
        debug!("'{}' skipped", question.action);
        self.outcomes.push(Outcome {
            question,
            answer: Answer::Skipped,
            correct: false,
        });
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.outcomes.len() >= self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Questions answered or skipped so far.
    pub fn answered(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn rule(&self) -> AnswerRule {
        self.rule
    }

    /// Score as a whole percentage of all questions, rounded half up.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        let total = self.questions.len();
        ((self.score * 200 + total) / (total * 2)) as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}
