use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::Deserialize;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Merge the given TOML files in order and deserialize them into a [`Config`].
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    /// Absent when no SMTP server is configured. The email service then
    /// reports every send as failed instead of the process refusing to start.
    pub email: Option<EmailConfig>,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Implicit TLS when set, STARTTLS otherwise.
    #[serde(default)]
    pub secure: bool,
    pub username: String,
    pub password: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Destination inbox for contact form notifications.
    pub inbox: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

fn default_smtp_port() -> u16 {
    587
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.email.unwrap().port, 587);
    }
}
