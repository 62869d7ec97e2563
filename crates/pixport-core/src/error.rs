//! Error types for pixport

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pixport operations
#[derive(Debug, Error)]
pub enum PixportError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to decode image {}: {message}", .path.display())]
    DecodeError { path: PathBuf, message: String },

    #[error("Failed to encode image {}: {message}", .path.display())]
    EncodeError { path: PathBuf, message: String },

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Parse error in {}: {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("Missing texture for slot '{slot}' ({location}): {}", .path.display())]
    MissingTexture {
        slot: String,
        location: String,
        path: PathBuf,
    },

    #[error("Invalid resource location: {0}")]
    InvalidResourceLocation(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PixportError {
    /// Errors the folder upscaler turns into skipped entries instead of aborting
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            PixportError::DecodeError { .. } | PixportError::NotAFile(_)
        )
    }
}

/// Result type alias for pixport operations
pub type Result<T> = std::result::Result<T, PixportError>;

impl From<toml::de::Error> for PixportError {
    fn from(err: toml::de::Error) -> Self {
        PixportError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for PixportError {
    fn from(err: serde_json::Error) -> Self {
        PixportError::ParseError {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skippable_kinds() {
        let decode = PixportError::DecodeError {
            path: PathBuf::from("a.png"),
            message: "bad".to_string(),
        };
        assert!(decode.is_skippable());
        assert!(PixportError::NotAFile(PathBuf::from("dir")).is_skippable());
        assert!(!PixportError::MissingFile(PathBuf::from("x.json")).is_skippable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!PixportError::from(io).is_skippable());
    }

    #[test]
    fn test_missing_texture_message_names_slot_and_location() {
        let err = PixportError::MissingTexture {
            slot: "all".to_string(),
            location: "mymod:block/foo".to_string(),
            path: PathBuf::from("/src/foo.png"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'all'"));
        assert!(msg.contains("mymod:block/foo"));
        assert!(msg.contains("/src/foo.png"));
    }
}
