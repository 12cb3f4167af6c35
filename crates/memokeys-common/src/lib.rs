pub mod errors;
pub mod types;

pub use errors::{ConfigError, DataError, MemoKeysError, QuizError};
pub use types::{AnswerRule, DisplayMode, Platform};

pub type Result<T> = std::result::Result<T, MemoKeysError>;
