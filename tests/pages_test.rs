//! End-to-end tests for the catalog pages, driven through the real router.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use libris_app::modules;
use libris_kernel::settings::Settings;
use libris_kernel::ModuleRegistry;
use tower::util::ServiceExt;

/// Build the full application router with a freshly seeded catalog.
fn app() -> Router {
    let settings = Settings::default();
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    libris_http::build_router(&registry, &settings)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_page_links_to_catalog_sections() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("/add_a_book/"));
    assert!(html.contains("/show_books/"));
    assert!(html.contains("/select_book/"));
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = app().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn listing_shows_seed_records() {
    let response = app().oneshot(get("/show_books/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Book One"));
    assert!(html.contains("Book Two"));
}

#[tokio::test]
async fn add_form_shows_current_listing() {
    let response = app().oneshot(get("/add_a_book/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("action=\"/add_a_book/\""));
    assert!(html.contains("Book One"));
}

#[tokio::test]
async fn adding_a_book_extends_the_listing() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_post(
            "/add_a_book/",
            "title=Book+Three&author=C&year=2019&genre=Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Book Three"));

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Book Three"));
    assert!(html.contains("<td>2019</td>"));
}

#[tokio::test]
async fn adding_a_duplicate_title_is_a_conflict() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_post(
            "/add_a_book/",
            "title=Book+One&author=Imposter&year=2000&genre=Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response)
        .await
        .contains("a book with this title already exists"));

    // Catalog unchanged: the imposter's author never shows up.
    let response = app.oneshot(get("/show_books/")).await.unwrap();
    assert!(!body_text(response).await.contains("Imposter"));
}

#[tokio::test]
async fn adding_with_a_word_year_is_a_validation_error() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_post(
            "/add_a_book/",
            "title=Book+Three&author=C&year=twenty&genre=Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("year must be a number"));

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    assert!(!body_text(response).await.contains("Book Three"));
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let response = app().oneshot(get("/edit_a_book/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("value=\"Book One\""));
    assert!(html.contains("value=\"2021\""));
}

#[tokio::test]
async fn edit_form_for_unknown_id_is_not_found() {
    let response = app().oneshot(get("/edit_a_book/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("book not found"));
}

#[tokio::test]
async fn editing_overwrites_all_fields_and_keeps_the_id() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_post(
            "/edit_a_book/1",
            "title=Rewritten&author=New+Author&year=1984&genre=Satire",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("book updated successfully"));

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("<td>1</td><td>Rewritten</td><td>New Author</td>"));
    assert!(html.contains("<td>1984</td>"));
    assert!(!html.contains("Book One"));
}

#[tokio::test]
async fn editing_an_unknown_id_is_not_found() {
    let response = app()
        .oneshot(form_post(
            "/edit_a_book/99",
            "title=Ghost&author=Nobody&year=2000&genre=Mystery",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("book not found"));
}

#[tokio::test]
async fn edit_year_validation_runs_before_the_id_check() {
    // A bad year on an unknown id reports the validation error, not the
    // missing record.
    let response = app()
        .oneshot(form_post(
            "/edit_a_book/99",
            "title=Ghost&author=Nobody&year=soon&genre=Mystery",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("year must be a number"));
}

#[tokio::test]
async fn editing_may_duplicate_an_existing_title() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_post(
            "/edit_a_book/2",
            "title=Book+One&author=Author+B&year=2020&genre=Non-Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert_eq!(html.matches("Book One").count(), 2);
}

#[tokio::test]
async fn saved_page_is_static() {
    let response = app().oneshot(get("/book_saved")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("the book was saved"));
}

#[tokio::test]
async fn select_page_offers_edit_and_delete() {
    let response = app().oneshot(get("/select_book/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("/edit_a_book/1"));
    assert!(html.contains("deleteBook(2)"));
}

#[tokio::test]
async fn deleting_removes_exactly_one_record() {
    let app = app();

    let response = app.clone().oneshot(delete("/delete_a_book/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("book deleted successfully"));

    let response = app.clone().oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Book One"));
    assert!(!html.contains("Book Two"));

    let response = app.oneshot(get("/edit_a_book/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_unknown_id_is_not_found() {
    let app = app();

    let response = app.clone().oneshot(delete("/delete_a_book/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("book not found"));

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Book One"));
    assert!(html.contains("Book Two"));
}

#[tokio::test]
async fn emptied_catalog_listing_is_an_error_page() {
    let app = app();

    for id in [1, 2] {
        let response = app
            .clone()
            .oneshot(delete(&format!("/delete_a_book/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/show_books/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("the book list is empty"));
}

#[tokio::test]
async fn non_numeric_path_id_is_rejected_by_the_router() {
    let response = app().oneshot(get("/edit_a_book/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seed_scenario_walkthrough() {
    let app = app();

    // POST add {Book Three, C, 2019, Fiction} -> listing gains id 3.
    let response = app
        .clone()
        .oneshot(form_post(
            "/add_a_book/",
            "title=Book+Three&author=C&year=2019&genre=Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("<td>3</td><td>Book Three</td><td>C</td><td>2019</td>"));

    // Same title again -> conflict, catalog still three records.
    let response = app
        .clone()
        .oneshot(form_post(
            "/add_a_book/",
            "title=Book+Three&author=C&year=2019&genre=Fiction",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.clone().oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert_eq!(html.matches("<tr><td>").count(), 3);

    // DELETE id 2 -> ids {1, 3} remain.
    let response = app.clone().oneshot(delete("/delete_a_book/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/show_books/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("<td>1</td>"));
    assert!(html.contains("<td>3</td>"));
    assert!(!html.contains("Book Two"));

    // GET edit id 2 -> not found.
    let response = app.oneshot(get("/edit_a_book/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
