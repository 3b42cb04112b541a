// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// No toast template is registered for the requested kind.
    TemplateNotFound(String),
    Network(String),
}

impl Error {
    /// Returns the diagnostics category for this error.
    pub fn error_type(&self) -> crate::diagnostics::ErrorType {
        use crate::diagnostics::ErrorType;
        match self {
            Error::Io(_) => ErrorType::IoError,
            Error::Config(_) => ErrorType::ConfigError,
            Error::TemplateNotFound(_) => ErrorType::TemplateNotFound,
            Error::Network(_) => ErrorType::NetworkError,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::TemplateNotFound(kind) => {
                write!(f, "Toast with id toast-{} not found", kind)
            }
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

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
    fn template_not_found_names_the_template_id() {
        let err = Error::TemplateNotFound("notice".into());
        assert_eq!(format!("{}", err), "Toast with id toast-notice not found");
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn error_types_map_to_diagnostics_categories() {
        assert_eq!(
            Error::TemplateNotFound("x".into()).error_type(),
            ErrorType::TemplateNotFound
        );
        assert_eq!(Error::Network("x".into()).error_type(), ErrorType::NetworkError);
        assert_eq!(Error::Io("x".into()).error_type(), ErrorType::IoError);
        assert_eq!(Error::Config("x".into()).error_type(), ErrorType::ConfigError);
    }
}
