//! HTTP client adapter: bearer-token injection and uniform status handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated REST call goes through [`HttpClient`]. The actual
//! request is performed by a [`Transport`]; in the browser that is
//! [`GlooTransport`] (`gloo-net` fetch), in tests a scripted fake.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the stored token and yields [`ClientError::AuthExpired`];
//! any other non-2xx yields [`ClientError::RequestFailed`] with the response
//! text. Nothing is retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::state::session::Session;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Complete `Authorization` header value, when a token is present.
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw response: status code plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. Implementations must not retry.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Format the `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// REST client bound to a base URL, a session, and a transport.
pub struct HttpClient<T> {
    config: ClientConfig,
    session: Session,
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(config: ClientConfig, session: Session, transport: T) -> Self {
        Self { config, session, transport }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `GET path`, decoding the JSON body.
    ///
    /// # Errors
    ///
    /// See module docs.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let value = self.send(Method::Get, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See module docs.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ClientError> {
        let body = serde_json::to_value(body)?;
        let value = self.send(Method::Post, path, Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `PATCH path` without a body.
    ///
    /// # Errors
    ///
    /// See module docs.
    pub async fn patch<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let value = self.send(Method::Patch, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See module docs.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let value = self.send(Method::Delete, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST` to a credential endpoint. No token is attached and a 401 is
    /// returned to the caller as a plain response instead of expiring the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] or a serialization error.
    pub async fn post_credentials<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ClientError> {
        let request = HttpRequest {
            method: Method::Post,
            url: self.config.url(path),
            authorization: None,
            body: Some(serde_json::to_value(body)?),
        };
        let response = self.transport.send(request).await?;
        log::debug!("POST {path} -> {}", response.status);
        Ok(response)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            authorization: self.session.token().as_deref().map(bearer),
            body,
        };
        let response = self.transport.send(request).await?;
        log::debug!("{method} {path} -> {}", response.status);
        interpret(method, path, response, &self.session)
    }
}

fn interpret(
    method: Method,
    path: &str,
    response: HttpResponse,
    session: &Session,
) -> Result<serde_json::Value, ClientError> {
    if response.status == 401 {
        log::warn!("{method} {path} rejected with 401; clearing session");
        session.sign_out();
        return Err(ClientError::AuthExpired);
    }
    if !response.is_success() {
        return Err(ClientError::RequestFailed {
            method,
            path: path.to_owned(),
            status: response.status,
            body: response.body,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Browser transport backed by `gloo-net` (window `fetch`).
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
