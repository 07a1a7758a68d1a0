//! JSON-over-HTTP client that attaches the session token to every call.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use partstock_auth::TokenStore;

use crate::error::ApiError;

/// Method of a body-carrying request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// The HTTP surface the controllers depend on.
///
/// One attempt per call: no retry, no timeout, no cancellation.
#[async_trait]
pub trait Api: Send + Sync {
    /// Read request; returns the parsed JSON body of a 2xx response.
    async fn get(&self, url: &str) -> Result<Value, ApiError>;

    /// POST or PUT `body` as JSON; returns the parsed JSON response body
    /// (`Value::Null` when the server sends none).
    async fn mutate(&self, url: &str, body: Value, method: Method) -> Result<Value, ApiError>;

    /// DELETE without a body; only the status matters.
    async fn delete(&self, url: &str) -> Result<(), ApiError>;
}

/// `Api::get` followed by deserialization into `T`.
pub async fn get_as<T: DeserializeOwned>(api: &dyn Api, url: &str) -> Result<T, ApiError> {
    let value = api.get(url).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// `Api` implementation over `reqwest`.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    tokens: TokenStore,
}

impl RestClient {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            tokens,
        }
    }

    /// Build request headers from the token current at call time.
    async fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth = match self.tokens.get().await? {
            Some(token) => HeaderValue::from_str(&token.bearer())
                .map_err(|e| ApiError::Network(format!("invalid token header: {e}")))?,
            None => HeaderValue::from_static(""),
        };
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<String, ApiError> {
        let resp = request
            .headers(self.headers().await?)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, error = %e, "request failed");
                ApiError::Network(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!(%url, error = %e, "failed to read response body");
            ApiError::Network(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!(%url, status = status.as_u16(), "request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%url, status = status.as_u16(), "request succeeded");
        Ok(body)
    }
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "response body is not JSON");
        ApiError::Parse(e.to_string())
    })
}

#[async_trait]
impl Api for RestClient {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        let body = self.send(self.http.get(url), url).await?;
        parse_body(&body)
    }

    async fn mutate(&self, url: &str, body: Value, method: Method) -> Result<Value, ApiError> {
        let payload = serde_json::to_string(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        let request = self.http.request(method.as_reqwest(), url).body(payload);
        let body = self.send(request, url).await?;
        parse_body(&body)
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(url), url).await?;
        Ok(())
    }
}
