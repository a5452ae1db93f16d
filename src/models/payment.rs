//! Fine payment

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "payment_id")]
    pub id: String,
    pub loan_id: String,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        id: impl Into<String>,
        loan_id: impl Into<String>,
        amount: Decimal,
        payment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            loan_id: loan_id.into(),
            amount,
            payment_date,
        }
    }
}
