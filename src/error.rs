use thiserror::Error;

/// Errors raised while loading an [`AppConfig`](crate::config::AppConfig).
///
/// The pipeline and the component tree never fail; only reading and parsing
/// configuration can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::parse(err.line(), err.column(), err.to_string())
    }
}

// toml only reports a byte span, so the position is left at 0:0 and the
// rendered message (which already quotes the offending line) carries it.
impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse(0, 0, err.message().to_string())
    }
}
