//! LibFraga Library Circulation
//!
//! In-memory circulation core for a small library: user accounts with
//! roles, book inventory, loans with due dates, overdue fines and fine
//! payments, all gated by per-role authorization through [`Library`].

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod repository;
pub mod services;
pub mod session;
pub mod telemetry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
