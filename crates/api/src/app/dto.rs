use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /parties`.
///
/// `guests` is optional so a body without the key maps to the same
/// "cannot party alone" failure as an empty list.
#[derive(Debug, Deserialize)]
pub struct CreatePartyRequest {
    #[serde(default)]
    pub guests: Option<Vec<String>>,
}

impl CreatePartyRequest {
    pub fn into_guests(self) -> Vec<String> {
        self.guests.unwrap_or_default()
    }
}
