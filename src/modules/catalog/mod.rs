pub mod handlers;
pub mod models;
pub mod store;
pub mod views;

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::{delete, get};
use axum::Router;
use libris_kernel::{InitCtx, Module};

use store::CatalogStore;

/// Catalog module: the in-memory book records and the pages managing them
pub struct CatalogModule {
    store: Arc<CatalogStore>,
}

impl CatalogModule {
    pub fn new() -> Self {
        Self {
            store: Arc::new(CatalogStore::seeded()),
        }
    }
}

impl Default for CatalogModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = self.store.len(),
            "catalog module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route(
                "/add_a_book/",
                get(handlers::add_form).post(handlers::submit_add),
            )
            .route("/show_books/", get(handlers::show_books))
            .route(
                "/edit_a_book/{id}",
                get(handlers::edit_form).post(handlers::submit_edit),
            )
            .route("/book_saved", get(handlers::book_saved))
            .route("/select_book/", get(handlers::select_book))
            .route("/delete_a_book/{id}", delete(handlers::delete_book))
            .with_state(self.store.clone())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module stopped");
        Ok(())
    }
}

/// Create a new instance of the catalog module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(CatalogModule::new())
}
