//! Loans collection

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::{Keyed, LoansRepository};
use crate::{error::Entity, models::Loan};

impl Keyed for Loan {
    const ENTITY: Entity = Entity::Loan;

    fn key(&self) -> &str {
        &self.id
    }
}

impl LoansRepository {
    /// All loans of a user, returned or not
    pub fn by_user<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Loan> + 'a {
        self.iter().filter(move |l| l.user_id == user_id)
    }

    pub fn overdue(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Loan> {
        self.iter().filter(move |l| l.is_overdue(now))
    }

    /// Loan count per book id, in order of each book's first loan
    pub fn count_by_book(&self) -> IndexMap<&str, usize> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for loan in self.iter() {
            *counts.entry(loan.book_id.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
