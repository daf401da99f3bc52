use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use potluck_core::PartyId;
use potluck_registry::PartyRegistry;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/parties", get(list_parties).post(create_party))
        .route("/parties/loaded", get(count_loaded))
        .route("/party/:id", get(get_party).delete(delete_party))
}

/// `POST /parties` — create a party, answer with its number.
///
/// A body without the `guests` key (or no parseable body at all) is the
/// same as an empty guest list: you cannot party alone.
pub async fn create_party(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    body: Option<Json<dto::CreatePartyRequest>>,
) -> axum::response::Response {
    let guests = body.map(|Json(b)| b.into_guests()).unwrap_or_default();

    match registry.create_party(guests) {
        Ok(id) => (StatusCode::OK, Json(json!({ "party_number": id }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `GET /parties` — snapshots of every loaded party.
pub async fn list_parties(
    Extension(registry): Extension<Arc<PartyRegistry>>,
) -> axum::response::Response {
    let parties = registry.list_parties();
    (StatusCode::OK, Json(json!({ "loaded_parties": parties }))).into_response()
}

/// `GET /parties/loaded` — how many parties are currently loaded.
pub async fn count_loaded(
    Extension(registry): Extension<Arc<PartyRegistry>>,
) -> axum::response::Response {
    let count = registry.count_loaded();
    (StatusCode::OK, Json(json!({ "loaded_parties": count }))).into_response()
}

/// `GET /party/:id` — one party's snapshot. 404 for never-issued ids,
/// 410 for deleted ones.
pub async fn get_party(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    Path(id): Path<PartyId>,
) -> axum::response::Response {
    match registry.snapshot(id) {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `DELETE /party/:id` — remove the party; its id is never reissued.
pub async fn delete_party(
    Extension(registry): Extension<Arc<PartyRegistry>>,
    Path(id): Path<PartyId>,
) -> axum::response::Response {
    match registry.delete_party(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "msg": "Party deleted!" }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
