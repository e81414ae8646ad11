//! Gateway to the remote expense service.
//!
//! This is the only module that talks to the network. Every call returns
//! `Result<_, GatewayError>` and the error always carries a message fit for
//! display, so callers only ever have to render it.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::GatewayError;
use crate::model::{CategorySummary, ExpensePatch, ExpenseRecord, NewExpense};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    ListAll,
    Get,
    Update,
    Delete,
    CategorySummary,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Create => "Failed to create expense",
            Operation::ListAll => "Failed to fetch expenses",
            Operation::Get => "Failed to fetch expense",
            Operation::Update => "Failed to update expense",
            Operation::Delete => "Failed to delete expense",
            Operation::CategorySummary => "Failed to fetch category summary",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Operation::Create => "POST",
            Operation::ListAll | Operation::Get | Operation::CategorySummary => "GET",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseApi {
    base_url: String,
}

impl ExpenseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/expense", self.base_url)
    }

    pub fn category_summary_url(&self) -> String {
        format!("{}/expense/category-summary", self.base_url)
    }

    pub fn item_url(&self, id: &str, op: Operation) -> Result<String, GatewayError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(GatewayError::InvalidRequest(op.fallback_message().to_string()));
        }
        Ok(format!("{}/expense/{}", self.base_url, id))
    }

    pub async fn create(&self, expense: &NewExpense) -> Result<ExpenseRecord, GatewayError> {
        let op = Operation::Create;
        let url = self.collection_url();
        let request = Request::post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .json(expense);
        let response = execute(request, op, &url).await?;
        decode(response, op).await
    }

    pub async fn list_all(&self) -> Result<Vec<ExpenseRecord>, GatewayError> {
        let op = Operation::ListAll;
        let url = self.collection_url();
        let request = Request::get(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build();
        let response = execute(request, op, &url).await?;
        decode(response, op).await
    }

    pub async fn get(&self, id: &str) -> Result<ExpenseRecord, GatewayError> {
        let op = Operation::Get;
        let url = self.item_url(id, op)?;
        let request = Request::get(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build();
        let response = execute(request, op, &url).await?;
        decode(response, op).await
    }

    pub async fn update(
        &self,
        id: &str,
        patch: &ExpensePatch,
    ) -> Result<ExpenseRecord, GatewayError> {
        let op = Operation::Update;
        let url = self.item_url(id, op)?;
        let request = Request::put(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .json(patch);
        let response = execute(request, op, &url).await?;
        decode(response, op).await
    }

    /// Any 2xx counts as an acknowledgement; the body is not read.
    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let op = Operation::Delete;
        let url = self.item_url(id, op)?;
        let request = Request::delete(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build();
        execute(request, op, &url).await?;
        Ok(())
    }

    pub async fn category_summary(&self) -> Result<Vec<CategorySummary>, GatewayError> {
        let op = Operation::CategorySummary;
        let url = self.category_summary_url();
        let request = Request::get(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build();
        let response = execute(request, op, &url).await?;
        decode(response, op).await
    }
}

async fn execute(
    request: Result<Request, gloo_net::Error>,
    op: Operation,
    url: &str,
) -> Result<Response, GatewayError> {
    let request = request.map_err(|err| {
        warn!(method = op.method(), url, error = %err, "could not build request");
        GatewayError::Encode(op.fallback_message().to_string())
    })?;

    debug!(method = op.method(), url, "sending request");
    let response = request.send().await.map_err(|err| {
        warn!(method = op.method(), url, error = %err, "request failed");
        transport_error(&err.to_string(), op)
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(method = op.method(), url, status, "service returned an error");
    Err(server_error(status, &body, op))
}

async fn decode<T: DeserializeOwned>(response: Response, op: Operation) -> Result<T, GatewayError> {
    response.json::<T>().await.map_err(|err| {
        warn!(method = op.method(), error = %err, "could not decode response body");
        GatewayError::Decode(op.fallback_message().to_string())
    })
}

fn transport_error(detail: &str, op: Operation) -> GatewayError {
    let detail = detail.trim();
    if detail.is_empty() {
        GatewayError::Transport(op.fallback_message().to_string())
    } else {
        GatewayError::Transport(detail.to_string())
    }
}

fn server_error(status: u16, body: &str, op: Operation) -> GatewayError {
    let message = server_message(body)
        .unwrap_or_else(|| format!("{} (HTTP {})", op.fallback_message(), status));
    GatewayError::Server { status, message }
}

/// The `message` field of a JSON error body, if there is a non-blank one.
fn server_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
