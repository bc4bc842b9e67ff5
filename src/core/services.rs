//! Service catalog queries.

use crate::core::error::ApiError;
use crate::core::http;
use crate::models::Service;

/// Fetch every service visible to the signed-in account.
pub async fn fetch_services(bearer: Option<&str>) -> Result<Vec<Service>, ApiError> {
    http::get_json("/services", bearer).await
}

/// Fetch a single service by id.
pub async fn fetch_service(id: &str, bearer: Option<&str>) -> Result<Service, ApiError> {
    http::get_json(&format!("/services/{}", id), bearer).await
}
