//! HTML pages for the catalog module.
//!
//! One function per page, each returning a full document built on the
//! shared shell in `libris_http::render`.

use axum::response::Html;

use libris_http::render::{escape, page};

use super::models::Book;

/// Landing page with navigation to the catalog pages.
pub fn home() -> Html<String> {
    page(
        "Book Catalog",
        "<h1>Book Catalog</h1>\n\
         <ul class=\"nav\">\n\
         <li><a href=\"/add_a_book/\">Add a book</a></li>\n\
         <li><a href=\"/show_books/\">Show books</a></li>\n\
         <li><a href=\"/select_book/\">Select a book</a></li>\n\
         </ul>",
    )
}

fn listing_table(books: &[(u64, Book)]) -> String {
    if books.is_empty() {
        return "<p>No books in the catalog yet.</p>".to_string();
    }

    let mut rows = String::new();
    for (id, book) in books {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{title}</td><td>{author}</td>\
             <td>{year}</td><td>{genre}</td></tr>\n",
            id = id,
            title = escape(&book.title),
            author = escape(&book.author),
            year = book.year,
            genre = escape(&book.genre),
        ));
    }

    format!(
        "<table class=\"books\">\n\
         <tr><th>Id</th><th>Title</th><th>Author</th><th>Year</th><th>Genre</th></tr>\n\
         {rows}</table>"
    )
}

fn book_fields(book: Option<&Book>) -> String {
    let (title, author, year, genre) = match book {
        Some(book) => (
            escape(&book.title),
            escape(&book.author),
            book.year.to_string(),
            escape(&book.genre),
        ),
        None => Default::default(),
    };

    format!(
        "<label>Title <input type=\"text\" name=\"title\" value=\"{title}\" required></label>\n\
         <label>Author <input type=\"text\" name=\"author\" value=\"{author}\" required></label>\n\
         <label>Year <input type=\"text\" name=\"year\" value=\"{year}\" required></label>\n\
         <label>Genre <input type=\"text\" name=\"genre\" value=\"{genre}\" required></label>"
    )
}

/// Add-form page, including the current listing below the form.
pub fn add_form(books: &[(u64, Book)]) -> Html<String> {
    let body = format!(
        "<h1>Add a book</h1>\n\
         <form method=\"post\" action=\"/add_a_book/\">\n\
         {fields}\n\
         <button type=\"submit\">Add book</button>\n\
         </form>\n\
         <h2>Current catalog</h2>\n\
         {listing}\n\
         <p><a href=\"/\">Back to home</a></p>",
        fields = book_fields(None),
        listing = listing_table(books),
    );
    page("Add a Book", &body)
}

/// Full catalog listing.
pub fn show_books(books: &[(u64, Book)]) -> Html<String> {
    let body = format!(
        "<h1>All books</h1>\n\
         {listing}\n\
         <p><a href=\"/\">Back to home</a></p>",
        listing = listing_table(books),
    );
    page("All Books", &body)
}

/// Edit-form page pre-filled with the record's current values.
pub fn edit_form(id: u64, book: &Book) -> Html<String> {
    let body = format!(
        "<h1>Edit book {id}</h1>\n\
         <form method=\"post\" action=\"/edit_a_book/{id}\">\n\
         {fields}\n\
         <button type=\"submit\">Save changes</button>\n\
         </form>\n\
         <p><a href=\"/select_book/\">Back to selection</a></p>",
        fields = book_fields(Some(book)),
    );
    page("Edit a Book", &body)
}

/// Confirmation page shown after a successful edit, or statically.
pub fn book_saved(message: Option<&str>) -> Html<String> {
    let message = message.unwrap_or("the book was saved");
    let body = format!(
        "<h1>Saved</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/show_books/\">Show books</a></p>\n\
         <p><a href=\"/\">Back to home</a></p>",
        escape(message)
    );
    page("Book Saved", &body)
}

/// Selection listing with edit links and delete buttons. Deletes go out as
/// DELETE requests, which plain HTML forms cannot produce, so a small
/// script issues them and swaps in the returned page.
pub fn select_book(books: &[(u64, Book)]) -> Html<String> {
    let mut rows = String::new();
    for (id, book) in books {
        rows.push_str(&format!(
            "<li>{title} ({year}) \
             <a href=\"/edit_a_book/{id}\">Edit</a> \
             <button onclick=\"deleteBook({id})\">Delete</button></li>\n",
            title = escape(&book.title),
            year = book.year,
            id = id,
        ));
    }
    let listing = if rows.is_empty() {
        "<p>No books in the catalog yet.</p>".to_string()
    } else {
        format!("<ul class=\"select\">\n{rows}</ul>")
    };

    let body = format!(
        "<h1>Select a book</h1>\n\
         {listing}\n\
         <p><a href=\"/\">Back to home</a></p>\n\
         <script>\n\
         async function deleteBook(id) {{\n\
           const response = await fetch(`/delete_a_book/${{id}}`, {{ method: \"DELETE\" }});\n\
           document.open();\n\
           document.write(await response.text());\n\
           document.close();\n\
         }}\n\
         </script>",
    );
    page("Select a Book", &body)
}

/// Confirmation page shown after a successful delete.
pub fn book_deleted(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Deleted</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/select_book/\">Back to selection</a></p>\n\
         <p><a href=\"/\">Back to home</a></p>",
        escape(message)
    );
    page("Book Deleted", &body)
}
