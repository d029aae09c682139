/// User input endpoints.
use reqwest::blocking::Client;

use super::{ApiError, InputStore, check_status, item_url, parse_response};
use crate::types::{InputId, NewUserInput, UserInput};

pub struct HttpInputStore {
    client: Client,
    url: String,
}

impl HttpInputStore {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl InputStore for HttpInputStore {
    fn list(&self) -> Result<Vec<UserInput>, ApiError> {
        tracing::debug!(url = %self.url, "listing user inputs");
        let response = self.client.get(&self.url).send()?;
        parse_response(response)
    }

    fn submit(&self, text: &str) -> Result<UserInput, ApiError> {
        tracing::debug!(chars = text.chars().count(), "submitting user input");
        let response = self
            .client
            .post(&self.url)
            .json(&NewUserInput { input_data: text })
            .send()?;
        parse_response(response)
    }

    fn delete(&self, id: InputId) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting user input");
        let response = self.client.delete(item_url(&self.url, id)).send()?;
        check_status(response)
    }
}
