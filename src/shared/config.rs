// src/shared/config.rs
use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONTENT_PATH: &str = "client/public/content.json";
pub const DEFAULT_ASSETS_DIR: &str = "attached_assets";
pub const DEFAULT_RESUME_FALLBACK_DIR: &str = "/mnt/data";
pub const DEFAULT_PHOTO_UPLOAD_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5MB
pub const DEFAULT_JSON_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_LOCAL_SMTP_PORT: u16 = 1025;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be set when CONTACT_NOTIFY_TO is set")]
    Missing(&'static str),
}

/// Where contact submissions are forwarded, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMailConfig {
    Relay {
        server: String,
        username: String,
        password: String,
        from: String,
        to: String,
    },
    // Mailpit, MailHog, etc.
    Local {
        host: String,
        port: u16,
        from: String,
        to: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_path: PathBuf,
    pub assets_dir: PathBuf,
    pub resume_fallback_dir: PathBuf,
    pub resume_download_prefix: Option<String>,
    pub resume_sde_alternate_name: Option<String>,
    pub resume_ai_alternate_name: Option<String>,
    pub photo_upload_max_bytes: u64,
    pub json_body_limit_bytes: usize,
    pub contact_mail: Option<ContactMailConfig>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => parse_value("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let photo_upload_max_bytes = match get("PHOTO_UPLOAD_MAX_BYTES") {
            Some(raw) => parse_value("PHOTO_UPLOAD_MAX_BYTES", &raw)?,
            None => DEFAULT_PHOTO_UPLOAD_MAX_BYTES,
        };
        let json_body_limit_bytes = match get("JSON_BODY_LIMIT_BYTES") {
            Some(raw) => parse_value("JSON_BODY_LIMIT_BYTES", &raw)?,
            None => DEFAULT_JSON_BODY_LIMIT_BYTES,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            content_path: PathBuf::from(
                get("CONTENT_PATH").unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string()),
            ),
            assets_dir: PathBuf::from(
                get("ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
            ),
            resume_fallback_dir: PathBuf::from(
                get("RESUME_FALLBACK_DIR")
                    .unwrap_or_else(|| DEFAULT_RESUME_FALLBACK_DIR.to_string()),
            ),
            resume_download_prefix: get("RESUME_DOWNLOAD_PREFIX"),
            resume_sde_alternate_name: get("RESUME_SDE_ALTERNATE_NAME"),
            resume_ai_alternate_name: get("RESUME_AI_ALTERNATE_NAME"),
            photo_upload_max_bytes,
            json_body_limit_bytes,
            contact_mail: contact_mail_config(&get)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn contact_mail_config<G>(get: &G) -> Result<Option<ContactMailConfig>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let Some(to) = get("CONTACT_NOTIFY_TO") else {
        return Ok(None);
    };
    let from = get("EMAIL_FROM").ok_or(ConfigError::Missing("EMAIL_FROM"))?;

    if let Some(server) = get("SMTP_SERVER") {
        return Ok(Some(ContactMailConfig::Relay {
            server,
            username: get("SMTP_USERNAME").ok_or(ConfigError::Missing("SMTP_USERNAME"))?,
            password: get("SMTP_PASSWORD").ok_or(ConfigError::Missing("SMTP_PASSWORD"))?,
            from,
            to,
        }));
    }

    let port = match get("SMTP_PORT") {
        Some(raw) => parse_value("SMTP_PORT", &raw)?,
        None => DEFAULT_LOCAL_SMTP_PORT,
    };

    Ok(Some(ContactMailConfig::Local {
        host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
        port,
        from,
        to,
    }))
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
