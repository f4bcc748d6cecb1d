use anyhow::{anyhow, bail};
use folio_email_contracts::{Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use lettre::{
    message::{header, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    inner: Option<Inner>,
}

#[derive(Debug, Clone)]
struct Inner {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// SMTP connection settings, matching the `[email]` config section.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub username: String,
    pub password: String,
    pub from: EmailAddressWithName,
}

impl EmailServiceImpl {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            inner: Some(Inner {
                from: config.from.clone(),
                transport,
            }),
        })
    }

    /// Service without a transport. Sending always fails with an error the
    /// relay turns into a failure result.
    pub fn unconfigured() -> Self {
        Self { inner: None }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let Some(inner) = &self.inner else {
            bail!("SMTP transport is not configured");
        };

        let builder = Message::builder()
            .from(inner.from.0.clone())
            .to(email.recipient.0)
            .subject(email.subject);
        let message = match email.html_body {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                email.text_body,
                html,
            ))?,
            None => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(email.text_body)?,
        };

        inner
            .transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let Some(inner) = &self.inner else {
            bail!("SMTP transport is not configured");
        };

        inner
            .transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping SMTP server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_send_fails() {
        let service = EmailServiceImpl::unconfigured();

        let result = service
            .send(Email {
                recipient: "test@example.com".parse().unwrap(),
                subject: "Subject".into(),
                text_body: "Body".into(),
                html_body: None,
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unconfigured_ping_fails() {
        let service = EmailServiceImpl::unconfigured();

        assert!(service.ping().await.is_err());
    }
}
