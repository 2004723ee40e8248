use std::fmt;

/// Error type for listing operations
#[derive(Debug)]
pub enum CloudlsError {
    /// A bad `--filter`/`--tag` entry, `--sort-by` column, log stream name or
    /// instance name
    MalformedArgument(String),
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON or YAML parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Local I/O failure (snapshot files, output sink)
    Io(std::io::Error),
}

impl fmt::Display for CloudlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudlsError::MalformedArgument(msg) => write!(f, "{}", msg),
            CloudlsError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CloudlsError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CloudlsError::TokenNotFound(msg) => write!(f, "{}", msg),
            CloudlsError::Credentials(msg) => write!(f, "{}", msg),
            CloudlsError::Json(msg) => write!(f, "JSON error: {}", msg),
            CloudlsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CloudlsError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CloudlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloudlsError::Http(e) => Some(e),
            CloudlsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CloudlsError {
    fn from(err: reqwest::Error) -> Self {
        CloudlsError::Http(err)
    }
}

impl From<serde_json::Error> for CloudlsError {
    fn from(err: serde_json::Error) -> Self {
        CloudlsError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for CloudlsError {
    fn from(err: serde_yml::Error) -> Self {
        CloudlsError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CloudlsError {
    fn from(err: std::io::Error) -> Self {
        CloudlsError::Io(err)
    }
}

/// Result type alias for listing operations
pub type Result<T> = std::result::Result<T, CloudlsError>;
