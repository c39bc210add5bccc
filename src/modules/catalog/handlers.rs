//! Request handlers for the catalog pages.
//!
//! Each handler is one synchronous request/response cycle over the shared
//! store; failures surface as rendered error pages via `PageError`.

use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::response::Html;

use libris_http::error::PageError;

use super::models::BookForm;
use super::store::{CatalogError, CatalogStore};
use super::views;

impl From<CatalogError> for PageError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidYear => PageError::validation(message),
            CatalogError::DuplicateTitle => PageError::conflict(message),
            CatalogError::UnknownId => PageError::not_found(message),
            CatalogError::EmptyCatalog => PageError::empty_catalog(message),
        }
    }
}

/// GET `/` — landing page
pub async fn home() -> Html<String> {
    views::home()
}

/// GET `/add_a_book/` — add form plus the current listing
pub async fn add_form(State(store): State<Arc<CatalogStore>>) -> Html<String> {
    views::add_form(&store.listing())
}

/// POST `/add_a_book/` — create a record
///
/// Year validation runs before the duplicate-title check; neither failure
/// mutates the catalog.
pub async fn submit_add(
    State(store): State<Arc<CatalogStore>>,
    Form(form): Form<BookForm>,
) -> Result<Html<String>, PageError> {
    let book = form.validate()?;
    let id = store.add(book)?;

    tracing::info!(id, "book added");
    Ok(views::add_form(&store.listing()))
}

/// GET `/show_books/` — full listing, or the empty-catalog error
pub async fn show_books(
    State(store): State<Arc<CatalogStore>>,
) -> Result<Html<String>, PageError> {
    let listing = store.listing();
    if listing.is_empty() {
        return Err(CatalogError::EmptyCatalog.into());
    }
    Ok(views::show_books(&listing))
}

/// GET `/edit_a_book/{id}` — edit form pre-filled with current values
pub async fn edit_form(
    State(store): State<Arc<CatalogStore>>,
    Path(id): Path<u64>,
) -> Result<Html<String>, PageError> {
    let book = store.get(id)?;
    Ok(views::edit_form(id, &book))
}

/// POST `/edit_a_book/{id}` — overwrite the record at `id`
///
/// Year validation runs before the unknown-id check. Title uniqueness is
/// not enforced here, unlike add.
pub async fn submit_edit(
    State(store): State<Arc<CatalogStore>>,
    Path(id): Path<u64>,
    Form(form): Form<BookForm>,
) -> Result<Html<String>, PageError> {
    let book = form.validate()?;
    store.update(id, book)?;

    tracing::info!(id, "book updated");
    Ok(views::book_saved(Some("book updated successfully")))
}

/// GET `/book_saved` — static confirmation page
pub async fn book_saved() -> Html<String> {
    views::book_saved(None)
}

/// GET `/select_book/` — listing formatted for edit/delete navigation
pub async fn select_book(State(store): State<Arc<CatalogStore>>) -> Html<String> {
    views::select_book(&store.listing())
}

/// DELETE `/delete_a_book/{id}` — remove the record at `id`
pub async fn delete_book(
    State(store): State<Arc<CatalogStore>>,
    Path(id): Path<u64>,
) -> Result<Html<String>, PageError> {
    store.remove(id)?;

    tracing::info!(id, "book deleted");
    Ok(views::book_deleted("book deleted successfully"))
}
