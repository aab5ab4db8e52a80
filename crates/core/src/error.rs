#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate project identifier '{0}'")]
    DuplicateIdentifier(String),

    #[error("Unknown status '{value}' for project '{id}' (expected live, in-progress or planned)")]
    UnknownStatus { id: String, value: String },

    #[error("Invalid project identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
