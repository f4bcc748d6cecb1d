use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_impl::{EmailServiceImpl, SmtpConfig};

/// Build the SMTP email service from the config section.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&SmtpConfig {
        host: config.host.clone(),
        port: config.port,
        secure: config.secure,
        username: config.username.clone(),
        password: config.password.clone(),
        from: config.from.clone(),
    })
    .context("Failed to set up SMTP transport")
}
