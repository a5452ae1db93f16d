//! Book catalog

use super::Library;
use crate::{error::AppResult, models::Book, policy::Capability};

impl Library {
    /// Add a book with every copy available (administrators and librarians)
    pub fn add_book(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        isbn: &str,
        quantity: u32,
    ) -> AppResult<Book> {
        self.session.require(Capability::ManageBooks)?;
        self.repository.books.ensure_vacant(id)?;

        let book = Book::new(id, title, author, isbn, quantity, self.now());
        let book = self.repository.books.insert(book)?.clone();

        tracing::info!(book_id = %book.id, quantity = book.quantity, "Book added");
        Ok(book)
    }

    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.repository.books.find(id).cloned()
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.iter().cloned().collect()
    }

    pub fn list_available_books(&self) -> Vec<Book> {
        self.repository.books.available().cloned().collect()
    }
}
