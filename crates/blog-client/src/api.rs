//! Posts API port and its HTTP implementation.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;

use blog_core::domain::Post;
use blog_shared::{ErrorBody, PostRequest};

use crate::error::ClientError;

/// Default API location, matching the server's default bind port.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Posts API port - what a front-end needs from the backend.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the whole collection. A response that is not list-shaped yields an empty list.
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError>;

    async fn get_post(&self, id: &str) -> Result<Post, ClientError>;

    async fn create_post(&self, request: &PostRequest) -> Result<Post, ClientError>;

    async fn update_post(&self, id: &str, request: &PostRequest) -> Result<Post, ClientError>;

    async fn delete_post(&self, id: &str) -> Result<(), ClientError>;
}

/// Coerce a list response: array elements that decode as posts are kept, anything else is empty.
pub fn coerce_post_list(value: Value) -> Vec<Post> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Post>(item) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping undecodable post from list response");
                    None
                }
            })
            .collect(),
        other => {
            tracing::warn!(kind = value_kind(&other), "List response is not an array");
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `reqwest`-backed posts API client.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    base_url: Url,
    client: Client,
}

impl HttpPostsApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/posts` or `<base>/posts/<id>`, with the id percent-encoded as one segment.
    pub fn posts_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: status_message(status, &text),
        })
    }
}

/// Message for a failed response: the body's `error` (plus `details`) when it is an
/// error body, otherwise the status reason phrase.
pub fn status_message(status: StatusCode, text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| match body.details {
            Some(details) => format!("{} ({details})", body.error),
            None => body.error,
        })
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        })
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let response = self.client.get(self.posts_url(None)).send().await?;
        let value: Value = Self::check(response).await?.json().await?;
        Ok(coerce_post_list(value))
    }

    async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        let response = self.client.get(self.posts_url(Some(id))).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_post(&self, request: &PostRequest) -> Result<Post, ClientError> {
        let response = self
            .client
            .post(self.posts_url(None))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_post(&self, id: &str, request: &PostRequest) -> Result<Post, ClientError> {
        let response = self
            .client
            .put(self.posts_url(Some(id)))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_post(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.posts_url(Some(id))).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
