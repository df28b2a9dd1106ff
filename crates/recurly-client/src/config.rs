//! Client configuration.

use serde::Deserialize;
use std::path::Path;

use crate::client::ClientOptions;
use crate::error::Error;

/// Credentials and transport settings for a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Site subdomain, e.g. `your-subdomain` for `your-subdomain.recurly.com`.
    pub subdomain: String,

    /// Private API key.
    pub api_key: String,

    /// Transport options.
    pub options: ClientOptions,
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct RecurlySecrets {
    subdomain: String,
    api_key: String,
    #[serde(default)]
    base_url: Option<String>,
}

impl Config {
    /// Load configuration from a secrets file or environment variables.
    ///
    /// `.secrets/recurly.json` (or `../.secrets/recurly.json`) is tried first;
    /// otherwise `RECURLY_SUBDOMAIN` and `RECURLY_API_KEY` are read.
    /// `RECURLY_TIMEOUT_SECONDS` applies either way.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are found.
    pub fn from_env() -> Result<Self, Error> {
        let secret_paths = [".secrets/recurly.json", "../.secrets/recurly.json"];

        let mut config = match Self::from_first_secrets_file(&secret_paths) {
            Some(config) => config,
            None => {
                tracing::debug!("Recurly secrets file not found, using environment variables");
                Self {
                    subdomain: std::env::var("RECURLY_SUBDOMAIN").map_err(|_| {
                        Error::Configuration("RECURLY_SUBDOMAIN is not set".to_string())
                    })?,
                    api_key: std::env::var("RECURLY_API_KEY").map_err(|_| {
                        Error::Configuration("RECURLY_API_KEY is not set".to_string())
                    })?,
                    options: ClientOptions::default(),
                }
            }
        };

        if let Some(timeout) = std::env::var("RECURLY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.options.timeout_seconds = timeout;
        }
        Ok(config)
    }

    /// First secrets file in `paths` that loads. A file that exists but cannot be
    /// read or parsed is logged and skipped.
    fn from_first_secrets_file<P: AsRef<Path>>(paths: &[P]) -> Option<Self> {
        paths.iter().find_map(|path| {
            let path: &Path = path.as_ref();
            if !path.exists() {
                return None;
            }
            match Self::from_secrets_file(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded Recurly secrets from file");
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ignoring unreadable Recurly secrets file"
                    );
                    None
                }
            }
        })
    }

    /// Load configuration from a JSON secrets file with `subdomain` and `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: RecurlySecrets = serde_json::from_str(&contents).map_err(|e| {
            Error::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;
        Ok(Self {
            subdomain: secrets.subdomain,
            api_key: secrets.api_key,
            options: ClientOptions {
                base_url: secrets.base_url,
                ..ClientOptions::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"subdomain": "acme", "api_key": "secret", "base_url": "http://localhost:9999/v2/"}}"#
        )
        .unwrap();

        let config = Config::from_secrets_file(file.path()).unwrap();
        assert_eq!(config.subdomain, "acme");
        assert_eq!(config.api_key, "secret");
        assert_eq!(
            config.options.base_url.as_deref(),
            Some("http://localhost:9999/v2/")
        );
        assert_eq!(config.options.timeout_seconds, 30);
    }

    #[test]
    fn missing_secrets_file() {
        let err = Config::from_secrets_file("/nonexistent/recurly.json").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn malformed_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"subdomain": "acme"}}"#).unwrap();
        let err = Config::from_secrets_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn malformed_secrets_file_is_skipped() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, r#"{{"subdomain": "acme","#).unwrap();
        let mut valid = tempfile::NamedTempFile::new().unwrap();
        write!(valid, r#"{{"subdomain": "backup", "api_key": "key2"}}"#).unwrap();

        let config =
            Config::from_first_secrets_file(&[broken.path(), valid.path()]).unwrap();
        assert_eq!(config.subdomain, "backup");

        assert!(Config::from_first_secrets_file(&[broken.path()]).is_none());
        assert!(Config::from_first_secrets_file(&["/nonexistent/recurly.json"]).is_none());
    }
}
