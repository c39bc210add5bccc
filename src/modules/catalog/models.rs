use serde::Deserialize;

use super::store::CatalogError;

/// One catalog entry. The id lives in the store's key, not on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Title of the book, unique across the catalog at add time
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Genre of the book
    pub genre: String,
}

/// Raw payload of the add and edit forms. `year` stays text until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
}

impl BookForm {
    /// Validate the raw form into a catalog record.
    ///
    /// `year` must be non-empty and composed entirely of ASCII digits;
    /// anything else (including digit strings too large for an `i32`)
    /// is rejected as [`CatalogError::InvalidYear`].
    pub fn validate(self) -> Result<Book, CatalogError> {
        if self.year.is_empty() || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(CatalogError::InvalidYear);
        }
        let year: i32 = self.year.parse().map_err(|_| CatalogError::InvalidYear)?;

        Ok(Book {
            title: self.title,
            author: self.author,
            year,
            genre: self.genre,
        })
    }
}
