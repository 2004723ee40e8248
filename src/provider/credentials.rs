//! API token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{CloudlsError, Result};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, Credential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct Credential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given endpoint host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: Self::default_credentials_path(),
        }
    }

    /// Use a specific credentials file (for testing)
    pub fn with_credentials_path(host: &str, path: PathBuf) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: Some(path),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (CLOUDLS_TOKEN, CLOUD_API_TOKEN - in order)
    /// 3. Credentials file (~/.cloudls/credentials.json), keyed by host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_credentials_file()
    }

    fn read_from_credentials_file(&self) -> Result<String> {
        let path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| CloudlsError::TokenNotFound(self.token_not_found_message(None)))?;

        debug!("Looking for credentials file at: {}", path.display());

        let content = fs::read_to_string(path).map_err(|_| {
            CloudlsError::TokenNotFound(self.token_not_found_message(Some(path)))
        })?;

        let creds: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            CloudlsError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| CloudlsError::TokenNotFound(self.token_not_found_message(Some(path))))
    }

    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      cloudls --token <TOKEN>\n\
             2. Environment var:   export CLOUDLS_TOKEN=<TOKEN>  (also: CLOUD_API_TOKEN)\n\
             3. Credentials file:  ~/{} with {{\"credentials\": {{\"{}\": {{\"token\": \"...\"}}}}}}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            credentials::FILE_PATH,
            self.host,
            env_vars,
            creds_info
        )
    }

    fn default_credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}
