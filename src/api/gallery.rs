//! Gallery Endpoints

use crate::models::Submission;
use super::{endpoint, get, RequestError};

/// List all submissions, in the order the server ranks them
pub async fn list_gallery(base: &str) -> Result<Vec<Submission>, RequestError> {
    get(&endpoint(base, "gallery")).await
}
