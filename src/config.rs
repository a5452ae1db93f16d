//! Configuration management for LibFraga

use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

pub const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;

/// Longest loan period accepted, about a hundred years
pub const MAX_LOAN_PERIOD_DAYS: i64 = 36_500;

/// Circulation policy as read from configuration sources
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Days between loan date and due date
    pub loan_period_days: i64,
    /// Fine charged per full day overdue
    pub daily_fine_rate: Decimal,
}

/// Checked circulation policy used by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CirculationPolicy {
    pub loan_period: Duration,
    pub daily_fine_rate: Decimal,
}

/// Account seeded when the library is constructed.
///
/// This is a well-known credential meant for first-run setup of a local or
/// demo deployment only.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BootstrapConfig {
    pub admin_id: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBFRAGA_LIBRARY__LOAN_PERIOD_DAYS=21 and friends
            .add_source(
                Environment::with_prefix("LIBFRAGA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.library.policy()?;
        Ok(config)
    }
}

impl LibraryConfig {
    /// Check the raw values and turn them into a policy
    pub fn policy(&self) -> Result<CirculationPolicy, ConfigError> {
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&self.loan_period_days) {
            return Err(ConfigError::Message(format!(
                "library.loan_period_days must be between 1 and {}, got {}",
                MAX_LOAN_PERIOD_DAYS, self.loan_period_days
            )));
        }
        let loan_period = Duration::try_days(self.loan_period_days).ok_or_else(|| {
            ConfigError::Message(format!(
                "library.loan_period_days out of range: {}",
                self.loan_period_days
            ))
        })?;

        if self.daily_fine_rate < Decimal::ZERO {
            return Err(ConfigError::Message(format!(
                "library.daily_fine_rate must not be negative, got {}",
                self.daily_fine_rate
            )));
        }

        Ok(CirculationPolicy {
            loan_period,
            daily_fine_rate: self.daily_fine_rate,
        })
    }
}

impl Default for CirculationPolicy {
    fn default() -> Self {
        Self {
            loan_period: Duration::days(DEFAULT_LOAN_PERIOD_DAYS),
            daily_fine_rate: Decimal::ONE,
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            daily_fine_rate: Decimal::ONE,
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_id: "admin001".to_string(),
            admin_name: "Administrador".to_string(),
            admin_email: "admin@libfraga.com".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
