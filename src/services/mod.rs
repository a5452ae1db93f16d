//! Business logic services
//!
//! [`Library`] owns every collection plus the session identity. Each
//! operation checks authorization first, validates, and only then mutates,
//! so a failed call leaves no partial change behind.

pub mod auth;
pub mod catalog;
pub mod loans;
pub mod reports;
pub mod users;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock},
    config::{AppConfig, BootstrapConfig, CirculationPolicy},
    error::AppResult,
    models::{Role, User},
    repository::Repository,
    session::Session,
};

/// Session-bound library façade
pub struct Library {
    repository: Repository,
    session: Session,
    clock: Arc<dyn Clock>,
    policy: CirculationPolicy,
}

impl Library {
    /// Library with default policy, the wall clock and the bootstrap admin
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::build(CirculationPolicy::default(), &BootstrapConfig::default(), clock)
    }

    /// Fails with a configuration error if the circulation policy is out of range
    pub fn with_config(config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let policy = config.library.policy()?;
        Ok(Self::build(policy, &config.bootstrap, clock))
    }

    fn build(policy: CirculationPolicy, bootstrap: &BootstrapConfig, clock: Arc<dyn Clock>) -> Self {
        let admin = User::new(
            bootstrap.admin_id.clone(),
            bootstrap.admin_name.clone(),
            bootstrap.admin_email.clone(),
            bootstrap.admin_password.clone(),
            Role::Admin,
            clock.now(),
        );
        tracing::warn!(
            admin_id = %bootstrap.admin_id,
            admin_email = %bootstrap.admin_email,
            "Seeded default administrator with a well-known password"
        );

        Self {
            repository: Repository::with_user(admin),
            session: Session::default(),
            clock,
            policy,
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub(crate) fn loan_period(&self) -> Duration {
        self.policy.loan_period
    }

    pub(crate) fn daily_fine_rate(&self) -> Decimal {
        self.policy.daily_fine_rate
    }

    /// Read-only view of the collections
    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
