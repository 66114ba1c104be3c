use axum::Router;
use domain_items::{ItemUseCases, PgItemRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    handlers::router(ItemUseCases::new(repository))
}
