use axum::Router;

pub mod foodlist;
pub mod parties;
pub mod system;

/// Router for all party endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(parties::router())
        .merge(foodlist::router())
}
