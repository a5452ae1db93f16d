//! Payments collection

use super::{Keyed, PaymentsRepository};
use crate::{error::Entity, models::Payment};

impl Keyed for Payment {
    const ENTITY: Entity = Entity::Payment;

    fn key(&self) -> &str {
        &self.id
    }
}

impl PaymentsRepository {
    pub fn by_loan<'a>(&'a self, loan_id: &'a str) -> impl Iterator<Item = &'a Payment> + 'a {
        self.iter().filter(move |p| p.loan_id == loan_id)
    }
}
