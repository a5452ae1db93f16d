//! Report rows
//!
//! Display fields taken from other collections are optional and left out of
//! the serialized record when the referenced entry is missing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::loan::LoanRecord;
use crate::error::AppResult;

/// One loan in the per-student report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentLoanRow {
    #[serde(flatten)]
    pub loan: LoanRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_author: Option<String>,
}

/// One loan in the overdue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueRow {
    #[serde(flatten)]
    pub loan: LoanRecord,
    pub days_overdue: i64,
    /// Still accruing, unlike `loan.fine_amount`
    pub current_fine: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
}

/// Loan count for one book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularBookRow {
    pub book_id: String,
    pub loan_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Flatten a record into a field-name to value mapping.
///
/// Fails for values that do not serialize to an object.
pub fn to_record<T: Serialize>(value: &T) -> AppResult<Map<String, Value>> {
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}
