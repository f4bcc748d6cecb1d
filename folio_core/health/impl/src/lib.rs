use std::{sync::Arc, time::Duration};

use folio_core_health_contracts::{HealthService, HealthStatus};
use folio_email_contracts::EmailService;
use tokio::{sync::RwLock, time::Instant};
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
    config: HealthServiceConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email, config: HealthServiceConfig) -> Self {
        Self {
            email,
            config,
            state: Arc::default(),
        }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = Instant::now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping SMTP server: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use folio_email_contracts::MockEmailService;

    use super::*;

    fn sut(email: MockEmailService) -> HealthServiceImpl<MockEmailService> {
        HealthServiceImpl::new(
            email,
            HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn email_reachable() {
        // Arrange
        let email = MockEmailService::new().with_ping(Ok(()));
        let sut = sut(email);

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: true });
    }

    #[tokio::test(start_paused = true)]
    async fn email_unreachable() {
        // Arrange
        let email = MockEmailService::new().with_ping(Err(anyhow!("connection refused")));
        let sut = sut(email);

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: false });
    }

    #[tokio::test(start_paused = true)]
    async fn status_is_cached_until_ttl_expires() {
        // Arrange
        let email = MockEmailService::new()
            .with_ping(Ok(()))
            .with_ping(Err(anyhow!("connection refused")));
        let sut = sut(email);

        // Act + Assert
        assert_eq!(sut.get_status().await, HealthStatus { email: true });

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(sut.get_status().await, HealthStatus { email: true });

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(sut.get_status().await, HealthStatus { email: false });
    }
}
