//! Validation for the settings file and for shortcut library data.
//!
//! Each validator collects every problem it finds and returns them joined
//! into a single error rather than stopping at the first one.

mod data;
mod helpers;


pub use data::validate_library;

use crate::schema::MemoKeysConfig;
use memokeys_common::ConfigError;

/// Validate settings ranges.
pub fn validate_settings(config: &MemoKeysConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    helpers::validate_range(
        &mut errors,
        "quiz.question_count",
        config.quiz.question_count,
        1,
        50,
    );
    if let Some(mode) = &config.data.mode {
        if mode.trim().is_empty() {
            errors.push("data.mode must not be blank".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
