// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

/// Crate-wide error type.
///
/// Payloads are strings so the error stays `Clone` and can travel inside
/// Iced messages.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The file is not an image (by extension or by content).
    #[error("Unsupported media: {0}")]
    UnsupportedMedia(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_becomes_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unsupported_media_names_the_file() {
        let err = Error::UnsupportedMedia("notes.txt".into());
        assert!(err.to_string().contains("notes.txt"));
    }
}
