// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    media_root: PathBuf,
    media_base_url: String,
    placeholder_image_url: String,
    allowed_origins: Vec<String>,
    editor_session_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://article_desk.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_media_root() -> String {
    "./storage/public".into()
}

fn default_media_base_url() -> String {
    "/media".into()
}

fn default_placeholder_image_url() -> String {
    "/img/placeholder.png".into()
}

fn default_editor_session_ttl_secs() -> u64 {
    30 * 60
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for everything that is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid(
                "DATABASE_URL must be a sqlite: connection string".into(),
            ));
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let media_root = PathBuf::from(lookup("MEDIA_ROOT").unwrap_or_else(default_media_root));

        let media_base_url = lookup("MEDIA_BASE_URL").unwrap_or_else(default_media_base_url);
        if media_base_url.trim().is_empty() {
            return Err(ConfigError::Missing("MEDIA_BASE_URL"));
        }

        let placeholder_image_url =
            lookup("PLACEHOLDER_IMAGE_URL").unwrap_or_else(default_placeholder_image_url);
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let editor_session_ttl = match lookup("EDITOR_SESSION_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(
                        "EDITOR_SESSION_TTL_SECS must be a positive number of seconds".into(),
                    )
                })?,
            None => default_editor_session_ttl_secs(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            media_root,
            media_base_url,
            placeholder_image_url,
            allowed_origins,
            editor_session_ttl: Duration::from_secs(editor_session_ttl),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Directory uploaded images are written to.
    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }

    /// URL prefix the media directory is served under.
    pub fn media_base_url(&self) -> &str {
        &self.media_base_url
    }

    pub fn placeholder_image_url(&self) -> &str {
        &self.placeholder_image_url
    }

    /// Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// How long an untouched editing session is kept before eviction.
    pub fn editor_session_ttl(&self) -> Duration {
        self.editor_session_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://article_desk.db?mode=rwc");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.media_base_url(), "/media");
        assert!(config.allowed_origins().is_empty());
        assert_eq!(config.editor_session_ttl(), Duration::from_secs(1800));
    }

    #[test]
    fn session_ttl_must_be_positive() {
        let config = config_from(&[("EDITOR_SESSION_TTL_SECS", "90")]).unwrap();
        assert_eq!(config.editor_session_ttl(), Duration::from_secs(90));

        for raw in ["0", "soon"] {
            let err = config_from(&[("EDITOR_SESSION_TTL_SECS", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        }
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config =
            config_from(&[("ALLOWED_ORIGINS", "http://a.test, http://b.test ,")]).unwrap();
        assert_eq!(config.allowed_origins(), ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn rejects_non_sqlite_database() {
        let err = config_from(&[("DATABASE_URL", "postgres://localhost/db")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
