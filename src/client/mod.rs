//! HTTP client layer
//!
//! Two pre-configured client instances talk to the backend: an anonymous
//! one for credential-free reads and a bearer-authenticated one for
//! everything else. The credential comes from an injected [`TokenProvider`]
//! rather than ambient storage, preserving the "attach token if present"
//! contract without hidden global state.

pub mod resource;

pub use resource::ResourceClient;

use std::sync::Arc;

/// Source of the ambient bearer credential
///
/// `None` means "no credential available"; the request goes out without an
/// `Authorization` header.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Provider that never yields a credential
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Provider yielding a fixed credential
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A pre-configured HTTP client bound to a base URL and a token provider
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Client that attaches whatever token the provider currently yields
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Credential-free client
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(NoToken))
    }

    /// Client with a fixed bearer token
    pub fn with_static_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(StaticToken(token.into())))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Typed CRUD client for one resource path
    pub fn resource<T>(&self, path: impl Into<String>) -> ResourceClient<T> {
        ResourceClient::new(self.clone(), path)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request with the bearer token attached when present
    pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// The two client instances every dashboard carries
#[derive(Clone)]
pub struct ApiClients {
    /// Credential-free reads
    pub anonymous: ApiClient,
    /// Bearer-authenticated requests
    pub authenticated: ApiClient,
}

impl ApiClients {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into();
        Self {
            anonymous: ApiClient::anonymous(base_url.clone()),
            authenticated: ApiClient::new(base_url, tokens),
        }
    }
}
