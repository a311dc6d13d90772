//! Task Endpoints

use crate::models::Task;
use super::{endpoint, get, RequestError};

/// Fetch a freshly generated task
pub async fn fetch_task(base: &str) -> Result<Task, RequestError> {
    get(&endpoint(base, "get-task")).await
}
