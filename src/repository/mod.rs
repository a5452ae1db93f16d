//! In-memory repository layer
//!
//! Each collection is keyed by the entity id and enumerates in insertion
//! order.

pub mod books;
pub mod loans;
pub mod payments;
pub mod users;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{Book, Loan, Payment, User},
};

/// Entity stored in a [`Table`]
pub trait Keyed {
    const ENTITY: Entity;

    fn key(&self) -> &str;
}

/// Id-keyed collection
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: IndexMap<String, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }
}

impl<T: Keyed> From<T> for Table<T> {
    /// Table holding a single row
    fn from(row: T) -> Self {
        let mut rows = IndexMap::new();
        rows.insert(row.key().to_string(), row);
        Self { rows }
    }
}

impl<T: Keyed> Table<T> {
    /// Get row by ID
    pub fn get(&self, id: &str) -> AppResult<&T> {
        self.rows
            .get(id)
            .ok_or_else(|| AppError::not_found(T::ENTITY, id))
    }

    pub fn get_mut(&mut self, id: &str) -> AppResult<&mut T> {
        self.rows
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(T::ENTITY, id))
    }

    /// Lookup that treats absence as a normal outcome
    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    /// Fails with a conflict if the id is taken
    pub fn ensure_vacant(&self, id: &str) -> AppResult<()> {
        if self.contains(id) {
            return Err(AppError::Conflict(format!(
                "{} with id {} already exists",
                T::ENTITY,
                id
            )));
        }
        Ok(())
    }

    pub fn insert(&mut self, row: T) -> AppResult<&T> {
        self.ensure_vacant(row.key())?;
        let inserted = self.rows.entry(row.key().to_string()).or_insert(row);
        Ok(&*inserted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub type UsersRepository = Table<User>;
pub type BooksRepository = Table<Book>;
pub type LoansRepository = Table<Loan>;
pub type PaymentsRepository = Table<Payment>;

/// All collections owned by one library
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub users: UsersRepository,
    pub books: BooksRepository,
    pub loans: LoansRepository,
    pub payments: PaymentsRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collections apart from one seeded user
    pub fn with_user(user: User) -> Self {
        Self {
            users: UsersRepository::from(user),
            ..Self::default()
        }
    }
}
