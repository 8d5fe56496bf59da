use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown depth `{0}` (expected surface, medium or deep)")]
    UnknownDepth(String),

    #[error("Invalid concept pattern for category `{category}`: {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = Error::InvalidArgument("segment must be a string".into());
        assert_eq!(err.to_string(), "Invalid argument: segment must be a string");

        let err = Error::UnknownDepth("abyssal".into());
        assert_eq!(
            err.to_string(),
            "Unknown depth `abyssal` (expected surface, medium or deep)"
        );
    }

    #[test]
    fn test_config_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::ConfigParse {
            path: PathBuf::from("/tmp/liminal.json"),
            source,
        };
        assert!(err.to_string().contains("/tmp/liminal.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
