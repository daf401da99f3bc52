//! HTTP API application wiring (Axum router + registry injection).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use potluck_registry::PartyRegistry;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The registry is constructed here and handed to handlers through an
/// extension layer; there is no ambient global state.
pub fn build_app() -> Router {
    let registry: Arc<PartyRegistry> = PartyRegistry::arc();

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(registry)))
}
