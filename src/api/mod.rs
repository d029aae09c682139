/// HTTP access to the labeling service: category and input stores.
mod category;
mod input;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::types::{Category, CategoryDraft, CategoryId, InputId, UserInput};

pub use category::HttpCategoryStore;
pub use input::HttpInputStore;

/// Errors from the labeling service HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request itself failed (connect, timeout, TLS, bad JSON body).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Remote store of categories. Records come back in creation order.
pub trait CategoryStore {
    fn list(&self) -> Result<Vec<Category>, ApiError>;
    fn create(&self, draft: &CategoryDraft) -> Result<Category, ApiError>;
    fn update(&self, id: CategoryId, name: &str) -> Result<Category, ApiError>;
    fn delete(&self, id: CategoryId) -> Result<(), ApiError>;
}

/// Remote store of submitted text items.
pub trait InputStore {
    fn list(&self) -> Result<Vec<UserInput>, ApiError>;
    fn submit(&self, text: &str) -> Result<UserInput, ApiError>;
    fn delete(&self, id: InputId) -> Result<(), ApiError>;
}

/// Builds the shared blocking client used by both stores.
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, ApiError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("labelr/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// `{base}/{id}`, tolerating a trailing slash on the base URL.
pub(crate) fn item_url(base: &str, id: u32) -> String {
    format!("{}/{id}", base.trim_end_matches('/'))
}

fn ensure_success(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::warn!(status = status.as_u16(), %body, "labeling service rejected request");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

fn parse_response<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T, ApiError> {
    let response = ensure_success(response)?;
    Ok(response.json::<T>()?)
}

fn check_status(response: reqwest::blocking::Response) -> Result<(), ApiError> {
    ensure_success(response)?;
    Ok(())
}
