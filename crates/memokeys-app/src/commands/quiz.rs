use std::io::{BufRead, Write};

use memokeys_common::{AnswerRule, DisplayMode, Platform, Result};
use memokeys_keys::KeyCombo;
use memokeys_quiz::{Answer, QuizRun};
use tracing::info;

use super::Context;

pub struct QuizOptions {
    pub platform: Platform,
    pub count: usize,
    pub rule: AnswerRule,
    pub display: DisplayMode,
}

pub fn run(
    ctx: &Context,
    mode: Option<&str>,
    options: &QuizOptions,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let loaded = ctx.load(mode)?;
    let mut quiz = QuizRun::from_entries(&loaded.entries, options.platform, options.count, options.rule)?;
    let show = |combo: &str| KeyCombo::parse(combo).display(options.display);

    let mut line = String::new();
    while let Some(question) = quiz.current().cloned() {
        writeln!(
            out,
            "Question {} of {}: {}",
            quiz.answered() + 1,
            quiz.total(),
            question.action
        )?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            info!("input closed after {} questions", quiz.answered());
            break;
        }
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("skip") {
            quiz.skip()?;
            writeln!(out, "Skipped. Answer: {}", show(&question.expected))?;
        } else if quiz.submit(answer)? {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Wrong. Answer: {}", show(&question.expected))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Review:")?;
    for outcome in quiz.outcomes() {
        let given = match &outcome.answer {
            Answer::Given(text) => text.as_str(),
            Answer::Skipped => "skipped",
        };
        writeln!(
            out,
            "  [{}] {}: {} (you: {given})",
            if outcome.correct { "x" } else { " " },
            outcome.question.action,
            show(&outcome.question.expected)
        )?;
    }
    writeln!(
        out,
        "Score: {}/{} ({}%)",
        quiz.score(),
        quiz.total(),
        quiz.percentage()
    )?;
    writeln!(out, "{}", quiz.grade())?;
    Ok(())
}
