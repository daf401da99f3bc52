use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use potluck_core::PartyId;
use potluck_registry::PartyRegistry;

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/party/:id/foodlist", get(get_foodlist))
        .route(
            "/party/:id/foodlist/:guest/:item",
            post(add_food).delete(remove_food),
        )
}

/// `GET /party/:id/foodlist` — the party's food list in insertion order.
pub async fn get_foodlist(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    Path(id): Path<PartyId>,
) -> axum::response::Response {
    match registry.food_list(id) {
        Ok(entries) => (StatusCode::OK, Json(json!({ "foodlist": entries }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `POST /party/:id/foodlist/:guest/:item` — `guest` commits to bring `item`.
///
/// 401 when the guest is not invited, 400 when the same commitment already
/// exists; success answers with the created entry.
pub async fn add_food(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    Path((id, guest, item)): Path<(PartyId, String, String)>,
) -> axum::response::Response {
    match registry.add_food(id, &item, &guest) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `DELETE /party/:id/foodlist/:guest/:item` — withdraw the commitment.
pub async fn remove_food(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    Path((id, guest, item)): Path<(PartyId, String, String)>,
) -> axum::response::Response {
    match registry.remove_food(id, &item, &guest) {
        Ok(()) => (StatusCode::OK, Json(json!({ "msg": "Food deleted!" }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
