//! Book (catalog entry with copy counts)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "book_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    /// Free text, not checked
    pub isbn: String,
    pub quantity: u32,
    pub available: u32,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// New book with every copy on the shelf
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        quantity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            quantity,
            available: quantity,
            created_at,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// Take one copy off the shelf. Returns false when none is left.
    pub fn borrow(&mut self) -> bool {
        if self.is_available() {
            self.available -= 1;
            true
        } else {
            false
        }
    }

    /// Put one copy back, never above `quantity`
    pub fn return_copy(&mut self) {
        if self.available < self.quantity {
            self.available += 1;
        }
    }
}
