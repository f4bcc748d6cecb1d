use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_email_contracts::EmailService;
use folio_email_impl::EmailServiceImpl;
use tracing::{info, warn};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = match &config.email {
        Some(email_config) => {
            info!("Connecting to SMTP server");
            let email = email::connect(email_config)?;
            email.ping().await?;
            email
        }
        None => {
            warn!("No [email] config section found, contact messages cannot be delivered");
            EmailServiceImpl::unconfigured()
        }
    };

    let contact = ContactServiceImpl::new(
        email.clone(),
        ContactServiceConfig {
            inbox: Arc::new(config.contact.inbox.clone()),
        },
    );
    let health = HealthServiceImpl::new(
        email,
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let server = RestServer::new(health, contact);
    info!(
        "Starting HTTP server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
