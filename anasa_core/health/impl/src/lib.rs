use std::{sync::Arc, time::Duration};

use anasa_core_health_contracts::{HealthFeatureService, HealthStatus};
use anasa_email_contracts::EmailService;
use anasa_shared_contracts::time::TimeService;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Email> HealthFeatureServiceImpl<Time, Email> {
    pub fn new(time: Time, email: Email, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Email>
where
    Time: TimeService,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let is_fresh = |cached: &&CachedStatus| now < cached.timestamp + self.config.cache_ttl;

        if let Some(cached) = self.state.cache.read().await.as_ref().filter(is_fresh) {
            return cached.status;
        }

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err:#}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { email },
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use anasa_email_contracts::MockEmailService;
    use anasa_shared_contracts::time::MockTimeService;
    use chrono::TimeZone;

    use super::*;

    type Sut = HealthFeatureServiceImpl<MockTimeService, MockEmailService>;

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(10),
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let time = MockTimeService::new().with_now(at(0));
        let email = MockEmailService::new().with_ping(Ok(()));
        let sut = Sut::new(time, email, config());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn email_down() {
        // Arrange
        let time = MockTimeService::new().with_now(at(0));
        let email = MockEmailService::new().with_ping(Err("connection refused"));
        let sut = Sut::new(time, email, config());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let mut time = MockTimeService::new();
        let mut seq = mockall::Sequence::new();
        for secs in [0, 5, 11] {
            time.expect_now()
                .once()
                .in_sequence(&mut seq)
                .return_const(at(secs));
        }

        let mut email = MockEmailService::new();
        let mut results = vec![Err("connection refused"), Ok(())].into_iter();
        email.expect_ping().times(2).returning(move || {
            let result = results.next().unwrap();
            Box::pin(std::future::ready(result.map_err(|err| anyhow::anyhow!(err))))
        });

        let sut = Sut::new(time, email, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;
        let third = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: false });
        assert_eq!(second, first);
        assert_eq!(third, HealthStatus { email: true });
    }
}
