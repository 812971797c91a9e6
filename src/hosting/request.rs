use serde::Deserialize;

/// Body of `POST /session/{id}/play`.
#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    #[serde(rename = "move")]
    pub choice: String,
}
