//! Quiz scoring: matching submitted answers and tallying a run.

mod answer;
mod grade;
mod run;

pub use answer::answers_match;
pub use grade::Grade;
pub use run::{Answer, Outcome, Question, QuizRun};
