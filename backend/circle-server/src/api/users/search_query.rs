use serde::Deserialize;

/// Query string of GET /api/v1/search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    /// Kept as text so a malformed page is reported in the API error format
    pub page: Option<String>,
}
