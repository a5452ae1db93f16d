//! Error types for LibFraga

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Stable error codes exposed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    NoSuchLoan = 22,
    AlreadyReturned = 23,
    InsufficientAmount = 24,
}

/// What kind of record a lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Book,
    Loan,
    Payment,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::User => "User",
            Entity::Book => "Book",
            Entity::Loan => "Loan",
            Entity::Payment => "Payment",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {entity} {id}")]
    NotFound { entity: Entity, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Conflict: loan {0} was already returned")]
    AlreadyReturned(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Insufficient amount: fine is {owed}, got {offered}")]
    InsufficientAmount { owed: Decimal, offered: Decimal },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error body for display by a presentation layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// True for both duplicate ids and double returns
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_) | AppError::AlreadyReturned(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Authorization(_) => ErrorCode::NotAuthorized,
            AppError::NotFound { entity, .. } => match entity {
                Entity::User => ErrorCode::NoSuchUser,
                Entity::Book => ErrorCode::NoSuchItem,
                Entity::Loan | Entity::Payment => ErrorCode::NoSuchLoan,
            },
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::AlreadyReturned(_) => ErrorCode::AlreadyReturned,
            AppError::Unavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::InsufficientAmount { .. } => ErrorCode::InsufficientAmount,
            AppError::Validation(_) | AppError::Config(_) => ErrorCode::BadValue,
            AppError::Serialization(_) => ErrorCode::Failure,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.to_string(),
        }
    }
}

/// Result type alias for library operations
pub type AppResult<T> = Result<T, AppError>;
