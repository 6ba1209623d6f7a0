//! DTOs for the share-link endpoint.

use serde::Serialize;

/// Response body of `GET /api/share-link`.
#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    pub link: String,
}
