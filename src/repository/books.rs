//! Books collection

use super::{BooksRepository, Keyed};
use crate::{error::Entity, models::Book};

impl Keyed for Book {
    const ENTITY: Entity = Entity::Book;

    fn key(&self) -> &str {
        &self.id
    }
}

impl BooksRepository {
    pub fn available(&self) -> impl Iterator<Item = &Book> {
        self.iter().filter(|b| b.is_available())
    }
}
