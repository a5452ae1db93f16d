//! Circulation reports

use super::Library;
use crate::{
    error::AppResult,
    models::{OverdueRow, PopularBookRow, StudentLoanRow},
    policy::Capability,
};

impl Library {
    /// Every loan of one user, with book title and author when known.
    ///
    /// Students may only ask for themselves.
    pub fn report_books_by_student(&self, user_id: &str) -> AppResult<Vec<StudentLoanRow>> {
        self.session.require_self_view(user_id)?;

        let now = self.now();
        let books = &self.repository.books;
        let rows: Vec<StudentLoanRow> = self
            .repository
            .loans
            .by_user(user_id)
            .map(|loan| {
                let book = books.find(&loan.book_id);
                StudentLoanRow {
                    loan: loan.to_record(now),
                    book_title: book.map(|b| b.title.clone()),
                    book_author: book.map(|b| b.author.clone()),
                }
            })
            .collect();

        tracing::debug!(user_id = %user_id, count = rows.len(), "Student loans report");
        Ok(rows)
    }

    /// Loans past their due date that are still out, with the live fine
    pub fn report_overdue_books(&self) -> AppResult<Vec<OverdueRow>> {
        self.session.require(Capability::ManageLoans)?;

        let now = self.now();
        let rate = self.daily_fine_rate();
        let rows: Vec<OverdueRow> = self
            .repository
            .loans
            .overdue(now)
            .map(|loan| OverdueRow {
                loan: loan.to_record(now),
                days_overdue: loan.days_overdue(now),
                current_fine: loan.calculate_fine(now, rate),
                student_name: self.repository.users.find(&loan.user_id).map(|u| u.name.clone()),
                book_title: self.repository.books.find(&loan.book_id).map(|b| b.title.clone()),
            })
            .collect();

        tracing::debug!(count = rows.len(), "Overdue report");
        Ok(rows)
    }

    /// Most borrowed books, highest count first
    pub fn report_popular_books(&self, limit: usize) -> AppResult<Vec<PopularBookRow>> {
        self.session.require(Capability::ManageLoans)?;

        let mut counts: Vec<(&str, usize)> = self.repository.loans.count_by_book().into_iter().collect();
        // Stable: ties keep first-loan order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let rows = counts
            .into_iter()
            .take(limit)
            .map(|(book_id, loan_count)| {
                let book = self.repository.books.find(book_id);
                PopularBookRow {
                    book_id: book_id.to_string(),
                    loan_count,
                    title: book.map(|b| b.title.clone()),
                    author: book.map(|b| b.author.clone()),
                }
            })
            .collect();

        Ok(rows)
    }
}
