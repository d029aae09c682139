/// Category endpoints.
use reqwest::blocking::Client;

use super::{ApiError, CategoryStore, check_status, item_url, parse_response};
use crate::types::{Category, CategoryDraft, CategoryId, RenameCategory};

pub struct HttpCategoryStore {
    client: Client,
    url: String,
}

impl HttpCategoryStore {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CategoryStore for HttpCategoryStore {
    fn list(&self) -> Result<Vec<Category>, ApiError> {
        tracing::debug!(url = %self.url, "listing categories");
        let response = self.client.get(&self.url).send()?;
        parse_response(response)
    }

    fn create(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        tracing::debug!(name = %draft.name, code = %draft.code, "creating category");
        let response = self.client.post(&self.url).json(draft).send()?;
        parse_response(response)
    }

    fn update(&self, id: CategoryId, name: &str) -> Result<Category, ApiError> {
        tracing::debug!(id, name, "renaming category");
        let response = self
            .client
            .put(item_url(&self.url, id))
            .json(&RenameCategory { name })
            .send()?;
        parse_response(response)
    }

    fn delete(&self, id: CategoryId) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting category");
        let response = self.client.delete(item_url(&self.url, id)).send()?;
        check_status(response)
    }
}
