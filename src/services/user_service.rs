use crate::domain::user::User;
use crate::error::Result;
use crate::telemetry::METER_NAME;
use async_trait::async_trait;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;

/// Persistence contract for users. Implemented by the Postgres repository.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    async fn create(&self, user: User) -> Result<User>;

    async fn get(&self, id: &str) -> Result<User>;

    async fn update(&self, user: User) -> Result<User>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Operations exposed to the HTTP layer.
#[async_trait]
pub trait UserUseCase: Send + Sync + std::fmt::Debug {
    async fn create_user(&self, user: User) -> Result<User>;

    async fn get_user(&self, id: &str) -> Result<User>;

    async fn update_user(&self, user: User) -> Result<User>;

    async fn delete_user(&self, id: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
struct Metrics {
    operations_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter(METER_NAME);
        Self {
            operations_total: meter
                .u64_counter("user_operations_total")
                .with_description("User operations handled, by operation and outcome")
                .build(),
        }
    }

    fn record<T>(&self, operation: &'static str, res: &Result<T>) {
        self.operations_total
            .add(1, &[KeyValue::new("operation", operation), KeyValue::new("outcome", outcome(res))]);
    }
}

const fn outcome<T>(res: &Result<T>) -> &'static str {
    if res.is_ok() { "ok" } else { "error" }
}

#[derive(Clone, Debug)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    metrics: Metrics,
}

impl UserService {
    #[must_use]
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo, metrics: Metrics::new() }
    }
}

#[async_trait]
impl UserUseCase for UserService {
    #[tracing::instrument(skip(self, user), err(level = "warn"))]
    async fn create_user(&self, user: User) -> Result<User> {
        let res = self.repo.create(user).await.map_err(|e| e.context("UserService - Create - repo"));
        self.metrics.record("create", &res);
        res
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    async fn get_user(&self, id: &str) -> Result<User> {
        let res = self.repo.get(id).await.map_err(|e| e.context("UserService - Get - repo"));
        self.metrics.record("get", &res);
        res
    }

    #[tracing::instrument(skip(self, user), fields(user_id = %user.id), err(level = "warn"))]
    async fn update_user(&self, user: User) -> Result<User> {
        let res = self.repo.update(user).await.map_err(|e| e.context("UserService - Update - repo"));
        self.metrics.record("update", &res);
        res
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    async fn delete_user(&self, id: &str) -> Result<()> {
        let res = self.repo.delete(id).await.map_err(|e| e.context("UserService - Delete - repo"));
        self.metrics.record("delete", &res);
        res
    }
}
