use crate::config::HealthConfig;
use crate::storage::DbPool;
use crate::telemetry::METER_NAME;
use backon::{ExponentialBuilder, Retryable};
use opentelemetry::{KeyValue, global, metrics::Gauge};
use std::time::Duration;
use tokio::time::timeout;

#[derive(Clone, Debug)]
struct Metrics {
    status: Gauge<i64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter(METER_NAME);
        Self {
            status: meter
                .i64_gauge("user_crud_health_status")
                .with_description("Status of health checks (1 for ok, 0 for error)")
                .build(),
        }
    }

    fn record_db(&self, healthy: bool) {
        self.status.record(i64::from(healthy), &[KeyValue::new("component", "database")]);
    }
}

#[derive(Clone, Debug)]
pub struct HealthService {
    pool: DbPool,
    config: HealthConfig,
    metrics: Metrics,
}

impl HealthService {
    #[must_use]
    pub fn new(pool: DbPool, config: HealthConfig) -> Self {
        Self { pool, config, metrics: Metrics::new() }
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    /// Returns a string describing the failure if the database is unreachable.
    pub async fn check_db(&self) -> Result<(), String> {
        let db_timeout = Duration::from_millis(self.config.db_timeout_ms);

        match timeout(db_timeout, sqlx::query("SELECT 1").execute(&self.pool)).await {
            Ok(Ok(_)) => {
                self.metrics.record_db(true);
                Ok(())
            }
            Ok(Err(e)) => {
                self.metrics.record_db(false);
                Err(format!("Database connection failed: {e:?}"))
            }
            Err(_) => {
                self.metrics.record_db(false);
                Err("Database connection timed out".to_string())
            }
        }
    }

    /// Startup readiness check: retries the database check with exponential
    /// backoff until it passes or the configured attempts run out.
    ///
    /// # Errors
    /// Returns the last check failure once retries are exhausted.
    #[tracing::instrument(skip(self), err)]
    pub async fn wait_until_ready(&self) -> Result<(), String> {
        let retry_strategy = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.config.startup_min_backoff_ms))
            .with_max_delay(Duration::from_millis(self.config.startup_max_backoff_ms))
            .with_max_times(self.config.startup_attempts.saturating_sub(1));

        (|| async { self.check_db().await })
            .retry(retry_strategy)
            .notify(|e, duration| {
                tracing::warn!(error = %e, retry_in = ?duration, "Database not ready, retrying");
            })
            .await?;

        tracing::info!("Database is ready");
        Ok(())
    }
}
