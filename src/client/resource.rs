//! Typed CRUD client for one REST resource

use crate::client::ApiClient;
use crate::core::error::{ApiError, ListwiseResult};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// List/get/create/update/delete against a single resource path
///
/// Generic over the record type; dashboards that work schema-lessly use
/// [`DynRecord`](crate::core::record::DynRecord), typed feature modules use
/// their own structs.
#[derive(Clone)]
pub struct ResourceClient<T> {
    api: ApiClient,
    path: String,
    _record: PhantomData<fn() -> T>,
}

/// List bodies arrive either as a bare array or wrapped in `{"data": [...]}`
/// depending on the backend route; both normalize to the same `Vec`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> From<ListPayload<T>> for Vec<T> {
    fn from(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Wrapped { data } => data,
            ListPayload::Bare(records) => records,
        }
    }
}

/// Error bodies carry `{"message": ...}`, surfaced verbatim to the user
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl<T> ResourceClient<T> {
    pub fn new(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), id)
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// Fetch the full collection
    pub async fn list(&self) -> ListwiseResult<Vec<T>> {
        let response = self.send(Method::GET, &self.path).await?;
        let payload: ListPayload<T> = response.json().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?;
        Ok(payload.into())
    }

    /// Fetch a single record by identifier
    pub async fn get(&self, id: &str) -> ListwiseResult<T> {
        let response = self.send(Method::GET, &self.item_path(id)).await?;
        Ok(response.json().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?)
    }

    /// Create a record; the backend's stored representation comes back
    pub async fn create<B>(&self, body: &B) -> ListwiseResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let request = self.api.request(Method::POST, &self.path).json(body);
        let response = Self::check(request.send().await?, &self.path).await?;
        Ok(response.json().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?)
    }

    /// Update a record by identifier
    pub async fn update<B>(&self, id: &str, body: &B) -> ListwiseResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let path = self.item_path(id);
        let request = self.api.request(Method::PUT, &path).json(body);
        let response = Self::check(request.send().await?, &path).await?;
        Ok(response.json().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?)
    }

    /// Delete a record by identifier
    pub async fn delete(&self, id: &str) -> ListwiseResult<()> {
        self.send(Method::DELETE, &self.item_path(id)).await?;
        Ok(())
    }

    async fn send(&self, method: Method, path: &str) -> ListwiseResult<reqwest::Response> {
        tracing::debug!(%method, path, "sending request");
        let response = self.api.request(method, path).send().await?;
        Self::check(response, path).await
    }

    /// Turn a non-success response into a typed error carrying the
    /// backend's own message when one is present
    async fn check(
        response: reqwest::Response,
        path: &str,
    ) -> ListwiseResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        tracing::warn!(status = status.as_u16(), path, %message, "request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}
