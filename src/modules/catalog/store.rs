use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::models::Book;

/// Domain errors for catalog operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("year must be a number")]
    InvalidYear,

    #[error("a book with this title already exists")]
    DuplicateTitle,

    #[error("book not found")]
    UnknownId,

    #[error("the book list is empty")]
    EmptyCatalog,
}

/// In-memory book catalog shared across request handlers.
///
/// Handlers run on a multi-threaded runtime, so every read-modify-write
/// sequence (next-id computation plus insert, lookup plus overwrite) runs
/// under a single lock acquisition. The lock is never held across an await.
pub struct CatalogStore {
    books: Mutex<BTreeMap<u64, Book>>,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    /// Create the catalog pre-populated with the two seed records.
    pub fn seeded() -> Self {
        let mut books = BTreeMap::new();
        books.insert(
            1,
            Book {
                title: "Book One".to_string(),
                author: "Author A".to_string(),
                year: 2021,
                genre: "Fiction".to_string(),
            },
        );
        books.insert(
            2,
            Book {
                title: "Book Two".to_string(),
                author: "Author B".to_string(),
                year: 2020,
                genre: "Non-Fiction".to_string(),
            },
        );
        Self {
            books: Mutex::new(books),
        }
    }

    fn books(&self) -> MutexGuard<'_, BTreeMap<u64, Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new record, assigning the next available id.
    ///
    /// Fails with [`CatalogError::DuplicateTitle`] when an existing record
    /// carries exactly the same title. The next id is `max(existing) + 1`,
    /// or 1 for an empty catalog.
    pub fn add(&self, book: Book) -> Result<u64, CatalogError> {
        let mut books = self.books();

        if books.values().any(|existing| existing.title == book.title) {
            return Err(CatalogError::DuplicateTitle);
        }

        let id = books.keys().next_back().map_or(1, |max| max + 1);
        books.insert(id, book);
        Ok(id)
    }

    /// Fetch a copy of the record at `id`.
    pub fn get(&self, id: u64) -> Result<Book, CatalogError> {
        self.books().get(&id).cloned().ok_or(CatalogError::UnknownId)
    }

    /// Overwrite all fields of the record at `id`; the id itself is immutable.
    ///
    /// Unlike [`CatalogStore::add`], this does not check the new title
    /// against other records, so an edit may create a duplicate title.
    pub fn update(&self, id: u64, book: Book) -> Result<(), CatalogError> {
        let mut books = self.books();
        match books.get_mut(&id) {
            Some(slot) => {
                *slot = book;
                Ok(())
            }
            None => Err(CatalogError::UnknownId),
        }
    }

    /// Remove the record at `id`.
    pub fn remove(&self, id: u64) -> Result<(), CatalogError> {
        self.books()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::UnknownId)
    }

    /// All records in ascending id order.
    pub fn listing(&self) -> Vec<(u64, Book)> {
        self.books()
            .iter()
            .map(|(id, book)| (*id, book.clone()))
            .collect()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.books().len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}
