//! Loan management service

use rust_decimal::Decimal;

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::{Loan, LoanRecord, Payment},
    policy::Capability,
};

impl Library {
    /// Lend one copy of a book to a user.
    ///
    /// The copy count drops by one and the loan is stored together, or not
    /// at all.
    pub fn create_loan(&mut self, id: &str, user_id: &str, book_id: &str) -> AppResult<LoanRecord> {
        self.session.require(Capability::ManageLoans)?;
        self.repository.loans.ensure_vacant(id)?;
        self.repository.users.get(user_id)?;

        let book = self.repository.books.get(book_id)?;
        if !book.is_available() {
            return Err(AppError::Unavailable(format!(
                "Book {} has no copies available",
                book_id
            )));
        }

        let now = self.now();
        let period = self.loan_period();
        if Loan::due_date_for(now, period).is_none() {
            return Err(AppError::Validation(format!(
                "Due date for a loan made at {} is out of range",
                now
            )));
        }
        let loan = Loan::new(id, user_id, book_id, now, period);

        let book = self.repository.books.get_mut(book_id)?;
        book.borrow();
        let available = book.available;
        let record = self.repository.loans.insert(loan)?.to_record(now);

        tracing::info!(
            loan_id = %record.loan_id,
            user_id = %record.user_id,
            book_id = %record.book_id,
            due_date = %record.due_date,
            available,
            "Loan created"
        );
        Ok(record)
    }

    /// Take a book back and fix the fine owed for it. Returns the fine.
    pub fn return_book(&mut self, loan_id: &str) -> AppResult<Decimal> {
        self.session.require(Capability::ManageLoans)?;

        let now = self.now();
        let rate = self.daily_fine_rate();

        let loan = self.repository.loans.get_mut(loan_id)?;
        if loan.return_date.is_some() {
            return Err(AppError::AlreadyReturned(loan_id.to_string()));
        }
        let fine = loan.return_book(now, rate);
        let book_id = loan.book_id.clone();

        if let Some(book) = self.repository.books.find_mut(&book_id) {
            book.return_copy();
        }

        tracing::info!(loan_id = %loan_id, book_id = %book_id, fine = %fine, "Loan returned");
        Ok(fine)
    }

    /// Record a payment covering at least the fixed fine of a loan
    pub fn pay_fine(&mut self, payment_id: &str, loan_id: &str, amount: Decimal) -> AppResult<Payment> {
        self.session.require(Capability::ManageLoans)?;
        self.repository.payments.ensure_vacant(payment_id)?;

        let owed = self.repository.loans.get(loan_id)?.fine_amount;
        if amount < owed {
            return Err(AppError::InsufficientAmount {
                owed,
                offered: amount,
            });
        }

        let payment = Payment::new(payment_id, loan_id, amount, self.now());
        let payment = self.repository.payments.insert(payment)?.clone();
        self.repository.loans.get_mut(loan_id)?.fine_paid = true;

        tracing::info!(
            payment_id = %payment.id,
            loan_id = %loan_id,
            amount = %amount,
            "Fine paid"
        );
        Ok(payment)
    }

    /// One loan; students only see their own
    pub fn get_loan(&self, loan_id: &str) -> AppResult<LoanRecord> {
        let loan = self.repository.loans.get(loan_id)?;
        self.session.require_self_view(&loan.user_id)?;
        Ok(loan.to_record(self.now()))
    }

    pub fn payments_for_loan(&self, loan_id: &str) -> AppResult<Vec<Payment>> {
        self.session.require(Capability::ManageLoans)?;
        self.repository.loans.get(loan_id)?;
        Ok(self.repository.payments.by_loan(loan_id).cloned().collect())
    }
}
