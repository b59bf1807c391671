use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum NkconfError {
    #[error("Section not found for '{key}'")]
    SectionNotFound { key: String },

    #[error("Parameter not found: {{ {key} }}")]
    ParameterNotFound { key: String },

    #[error("Configuration file not found: {file_name}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(help("set a value with `section.name=value` or add the file to the working directory"))
    )]
    ConfigFileNotFound { file_name: String },

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the root of {path}")]
    NotAnObject { path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot convert '{key}' to {target}: {reason}")]
    Conversion {
        key: String,
        target: &'static str,
        reason: String,
    },

    #[error("Invalid format '{0}', expected 'section.name=value'")]
    #[cfg_attr(feature = "rich-errors", diagnostic(help("values cannot contain '='")))]
    InvalidFormat(String),

    #[error("Unknown action: {0}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(help("use the command {{ help }} for more information"))
    )]
    UnknownAction(String),

    #[error("Invalid key '{0}': segments must be non-empty")]
    InvalidKey(String),

    #[error("Cannot set '{key}': '{segment}' holds a value, not a section")]
    NotASection { key: String, segment: String },

    #[error("Project name is required: call .project() on the builder")]
    ProjectRequired,

    #[error("Could not determine the user's home directory")]
    #[cfg_attr(feature = "rich-errors", diagnostic(help("set an explicit directory with .home_dir()")))]
    NoHomeDirectory,

    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[source] serde_json::Error),

    #[error("Serialized configuration is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),
}
