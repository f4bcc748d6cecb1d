use std::sync::Arc;

use folio_core_contact_contracts::ContactService;
use folio_email_contracts::{Email, EmailService};
use folio_models::{
    contact::{ContactPayload, RelayResult},
    email_address::EmailAddress,
};
use tracing::error;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Destination inbox for contact notifications.
    pub inbox: Arc<EmailAddress>,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_notification(&self, payload: ContactPayload) -> RelayResult {
        if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
            return RelayResult::failure("Missing required fields");
        }

        let email = Email {
            recipient: (*self.config.inbox).clone().into(),
            subject: format!("New contact form submission from {}", *payload.name),
            text_body: text_body(&payload),
            html_body: Some(html_body(&payload)),
        };

        match self.email.send(email).await {
            Ok(true) => RelayResult::success("Email sent successfully"),
            Ok(false) => {
                error!("Contact notification was rejected by the mail provider");
                RelayResult::failure("Failed to send email")
            }
            Err(err) => {
                error!("Failed to send contact notification: {err}");
                RelayResult::failure("Failed to send email")
            }
        }
    }
}

fn text_body(payload: &ContactPayload) -> String {
    format!(
        "Name: {}\nEmail: {}\nMessage:\n{}\n",
        *payload.name, *payload.email, *payload.message
    )
}

fn html_body(payload: &ContactPayload) -> String {
    format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; padding: 20px; max-width: 600px; margin: 0 auto;">"#,
            r#"<h3 style="color: #333; border-bottom: 2px solid #eee; padding-bottom: 10px;">New Contact Form Submission</h3>"#,
            r#"<div style="margin: 20px 0; background: #f9f9f9; padding: 15px; border-radius: 5px;">"#,
            r#"<p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>"#,
            r#"<p style="margin: 10px 0;"><strong>Email:</strong> {email}</p>"#,
            r#"<p style="margin: 10px 0;"><strong>Message:</strong></p>"#,
            r#"<p style="white-space: pre-wrap; background: white; padding: 15px; border-radius: 5px; border: 1px solid #eee;">{message}</p>"#,
            "</div></div>"
        ),
        name = escape_html(&payload.name),
        email = escape_html(&payload.email),
        message = escape_html(&payload.message),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use folio_email_contracts::MockEmailService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> ContactServiceConfig {
        ContactServiceConfig {
            inbox: Arc::new("contact@example.com".parse().unwrap()),
        }
    }

    fn payload(name: &str, email: &str, message: &str) -> ContactPayload {
        ContactPayload {
            name: name.to_owned().try_into().unwrap(),
            email: email.to_owned().try_into().unwrap(),
            message: message.to_owned().try_into().unwrap(),
        }
    }

    fn expected_email() -> Email {
        Email {
            recipient: "contact@example.com".parse().unwrap(),
            subject: "New contact form submission from Ann".into(),
            text_body: "Name: Ann\nEmail: ann@x.com\nMessage:\nHi\n".into(),
            html_body: Some(html_body(&payload("Ann", "ann@x.com", "Hi"))),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), true);
        let sut = ContactServiceImpl::new(email, config());

        // Act
        let result = sut.send_notification(payload("Ann", "ann@x.com", "Hi")).await;

        // Assert
        assert_eq!(result, RelayResult::success("Email sent successfully"));
    }

    #[tokio::test]
    async fn provider_rejects() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), false);
        let sut = ContactServiceImpl::new(email, config());

        // Act
        let result = sut.send_notification(payload("Ann", "ann@x.com", "Hi")).await;

        // Assert
        assert_eq!(result, RelayResult::failure("Failed to send email"));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(anyhow!("connection refused")))));
        let sut = ContactServiceImpl::new(email, config());

        // Act
        let result = sut.send_notification(payload("Ann", "ann@x.com", "Hi")).await;

        // Assert
        assert_eq!(result, RelayResult::failure("Failed to send email"));
    }

    #[tokio::test]
    async fn missing_fields() {
        for payload in [
            payload("", "ann@x.com", "Hi"),
            payload("Ann", "", "Hi"),
            payload("Ann", "ann@x.com", ""),
        ] {
            // Arrange
            let email = MockEmailService::new();
            let sut = ContactServiceImpl::new(email, config());

            // Act
            let result = sut.send_notification(payload).await;

            // Assert
            assert_eq!(result, RelayResult::failure("Missing required fields"));
        }
    }

    #[test]
    fn html_body_is_escaped() {
        let body = html_body(&payload("<Ann>", "ann@x.com", "a & b"));
        assert!(body.contains("<strong>Name:</strong> &lt;Ann&gt;"));
        assert!(body.contains("a &amp; b"));
    }
}
