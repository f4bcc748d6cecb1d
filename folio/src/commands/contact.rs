use std::sync::Arc;

use anyhow::bail;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_submission::{SubmissionController, SubmissionControllerConfig};
use folio_email_impl::EmailServiceImpl;
use folio_models::{contact::ContactPayload, submission::SubmissionStatus};
use tracing::info;

use crate::email;

/// Run one contact submission through the same state machine the website
/// form uses, including the delayed auto-close on success.
pub async fn send(
    config: Config,
    name: String,
    email: String,
    message: String,
) -> anyhow::Result<()> {
    let email_service = match &config.email {
        Some(email_config) => email::connect(email_config)?,
        None => EmailServiceImpl::unconfigured(),
    };
    let contact = ContactServiceImpl::new(
        email_service,
        ContactServiceConfig {
            inbox: Arc::new(config.contact.inbox),
        },
    );
    let controller = SubmissionController::new(contact, SubmissionControllerConfig::default());

    let payload = ContactPayload {
        name: name.try_into()?,
        email: email.try_into()?,
        message: message.try_into()?,
    };

    let mut unmounted = controller.unmounted();
    controller.submit(payload).await;

    match controller.status() {
        SubmissionStatus::Success => {
            info!("Sent Successfully!");
            unmounted.wait_for(|closed| *closed).await?;
            Ok(())
        }
        SubmissionStatus::Error => bail!("Failed to send message. Please try again."),
        SubmissionStatus::Idle => bail!("Missing required fields"),
        SubmissionStatus::Sending => unreachable!(),
    }
}
