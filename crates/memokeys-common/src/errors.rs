use std::path::PathBuf;

/// Failures while reading shortcut data files or the mode index.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("shortcut file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unknown mode '{mode}' (available: {available})")]
    UnknownMode { mode: String, available: String },

    #[error("shortcut data validation error: {0}")]
    Validation(String),
}

/// Failures while loading the `memokeys.toml` settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("cannot read config {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("cannot write config {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is already finished")]
    Finished,

    #[error("quiz has no questions")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum MemoKeysError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_error_display() {
        let err = DataError::FileNotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "shortcut file not found: /tmp/missing.json");

        let err = DataError::Parse {
            path: PathBuf::from("basic.json"),
            message: "expected value at line 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse basic.json: expected value at line 1"
        );

        let err = DataError::UnknownMode {
            mode: "emacs".into(),
            available: "basic, vscode".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown mode 'emacs' (available: basic, vscode)"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("quiz.question_count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: quiz.question_count = 0"
        );

        let err = ConfigError::Write {
            path: PathBuf::from("/ro/memokeys.toml"),
            message: "read-only file system".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot write config /ro/memokeys.toml: read-only file system"
        );
    }

    #[test]
    fn quiz_error_display() {
        assert_eq!(QuizError::Finished.to_string(), "quiz is already finished");
        assert_eq!(QuizError::Empty.to_string(), "quiz has no questions");
    }

    #[test]
    fn memokeys_error_from_data() {
        let data_err = DataError::Validation("duplicate id 'copy'".into());
        let err: MemoKeysError = data_err.into();
        assert!(matches!(err, MemoKeysError::Data(_)));
        assert!(err.to_string().contains("duplicate id 'copy'"));
    }

    #[test]
    fn memokeys_error_from_quiz() {
        let err: MemoKeysError = QuizError::Finished.into();
        assert!(matches!(err, MemoKeysError::Quiz(QuizError::Finished)));
    }

    #[test]
    fn memokeys_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MemoKeysError = io_err.into();
        assert!(matches!(err, MemoKeysError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn memokeys_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MemoKeysError = json_err.into();
        assert!(matches!(err, MemoKeysError::Json(_)));
        assert!(err.to_string().contains("EOF"));
    }
}
