//! HTTP transport shared by every TuCash resource client.
//!
//! One [`ApiClient`] implements all `*ClientTrait` contracts from
//! `tucash-core`. It attaches the bearer token of the current session to
//! each request and ends the session when the backend answers 401.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tucash_core::errors::{ApiError, Error, Result};
use tucash_core::pagination::ListResponse;
use tucash_core::session::AuthSession;

use crate::config::ClientConfig;

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the TuCash REST API.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(AuthSession::new(Arc::new(InMemorySessionStorage::new())));
/// let client = ApiClient::new(&ClientConfig::default(), session)?;
/// let accounts = client.list_accounts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<AuthSession>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    /// Default headers, with the bearer token when a session exists.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Session(format!("Invalid access token format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let params: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url = format!("{}?{}", url, params.join("&"));
        }
        url
    }

    /// Sends a request and returns the raw body of a successful response.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.url(path, query);
        debug!("[TuCashApi] {} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers()?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("[TuCashApi] {} {} failed: {}", method, url, e);
            Error::Api(ApiError::connection(format!("Request failed: {}", e)))
        })?;

        self.read_response(response).await
    }

    /// Maps non-2xx responses to [`ApiError`]; a 401 also clears the session.
    async fn read_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Api(ApiError::connection(format!("Failed to read response: {}", e))))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .and_then(|err| err.message.or(err.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                let snippet: String = body.chars().take(200).collect();
                if snippet.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    snippet
                }
            });

        if status == StatusCode::UNAUTHORIZED && self.session.is_logged_in() {
            warn!("[TuCashApi] Session rejected by the server, signing out");
            if let Err(e) = self.session.clear() {
                warn!("[TuCashApi] Failed to clear stored session: {}", e);
            }
        }

        Err(Error::Api(ApiError::new(status.as_u16(), message)))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            let snippet: String = body.chars().take(200).collect();
            Error::Decode(format!("response body: {} - {}", e, snippet))
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self
            .execute::<()>(Method::GET, path, query, None)
            .await?;
        Self::decode(&body)
    }

    /// GET a collection that may come back as a bare array or a page envelope.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let list: ListResponse<T> = self.get(path).await?;
        Ok(list.into_vec())
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(method, path, &[], Some(body)).await?;
        Self::decode(&body)
    }

    /// A bodiless command whose response is a resource.
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T> {
        let body = self.execute::<()>(method, path, &[], None).await?;
        Self::decode(&body)
    }

    /// A command whose response body, if any, is ignored.
    pub(crate) async fn send_unit(&self, method: Method, path: &str) -> Result<()> {
        self.execute::<()>(method, path, &[], None).await?;
        Ok(())
    }
}
