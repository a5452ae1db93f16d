//! Loan (borrow) model and related types

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Primary loan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    /// Fixed when the book comes back
    pub fine_amount: Decimal,
    pub fine_paid: bool,
}

impl Loan {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        book_id: impl Into<String>,
        loan_date: DateTime<Utc>,
        period: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            loan_date,
            due_date: Self::due_date_for(loan_date, period).unwrap_or(DateTime::<Utc>::MAX_UTC),
            return_date: None,
            fine_amount: Decimal::ZERO,
            fine_paid: false,
        }
    }

    /// `None` when the due date would not fit in a timestamp
    pub fn due_date_for(loan_date: DateTime<Utc>, period: Duration) -> Option<DateTime<Utc>> {
        loan_date.checked_add_signed(period)
    }

    pub fn status(&self) -> LoanStatus {
        if self.return_date.is_some() {
            LoanStatus::Returned
        } else {
            LoanStatus::Active
        }
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.return_date.is_none() && now > self.due_date
    }

    /// Whole days past the due date, truncated
    pub fn days_overdue(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_overdue(now) {
            return 0;
        }
        (now - self.due_date).num_days()
    }

    /// Live estimate for a loan still out
    pub fn calculate_fine(&self, now: DateTime<Utc>, daily_rate: Decimal) -> Decimal {
        Decimal::from(self.days_overdue(now)) * daily_rate
    }

    /// Close the loan and freeze its fine. Returns the fixed fine.
    pub fn return_book(&mut self, at: DateTime<Utc>, daily_rate: Decimal) -> Decimal {
        self.return_date = Some(at);
        if at > self.due_date {
            let days_late = (at - self.due_date).num_days();
            self.fine_amount = Decimal::from(days_late) * daily_rate;
        }
        self.fine_amount
    }

    pub fn to_record(&self, now: DateTime<Utc>) -> LoanRecord {
        LoanRecord {
            loan_id: self.id.clone(),
            user_id: self.user_id.clone(),
            book_id: self.book_id.clone(),
            loan_date: self.loan_date,
            due_date: self.due_date,
            return_date: self.return_date,
            fine_amount: self.fine_amount,
            fine_paid: self.fine_paid,
            status: self.status(),
            is_overdue: self.is_overdue(now),
        }
    }
}

/// Loan fields as seen by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: String,
    pub user_id: String,
    pub book_id: String,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub fine_amount: Decimal,
    pub fine_paid: bool,
    pub status: LoanStatus,
    pub is_overdue: bool,
}
