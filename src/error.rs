use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected payload: {0}")]
    Data(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for anything that went wrong between issuing a request and
    /// holding a well-formed payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Status { .. } | Error::Json(_) | Error::Data(_)
        )
    }
}

impl From<::config::ConfigError> for Error {
    fn from(e: ::config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Internal(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
