// API client module: a small blocking HTTP client for the inventory
// backend. One request per call, no retries, no caching. Every failure
// comes back as an `ApiError`; deciding what the user sees is left to
// the view layer.

use crate::error::{ApiError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A product row exactly as the backend sends it. Rows are usually JSON
/// objects, but nothing here insists on it.
pub type ProductRecord = Value;

/// Blocking client bound to one backend base address. It holds no token:
/// callers pass the session's token into each authenticated call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Login request payload. Built for a single attempt and dropped after it.
#[derive(Serialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Only the token matters to this client; other fields are ignored.
#[derive(Deserialize, Debug)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Payload of `GET /products/analysis`. `lowStock` and `topSelling` are
/// lifted out untouched, so a key that is present stays `Some` even when
/// its value is `null` or not a list. Every other key lands in `extra`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InventoryAnalysis {
    pub low_stock: Option<Value>,
    pub top_selling: Option<Value>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for InventoryAnalysis {
    fn from(mut body: Map<String, Value>) -> Self {
        InventoryAnalysis {
            low_stock: body.shift_remove("lowStock"),
            top_selling: body.shift_remove("topSelling"),
            extra: body,
        }
    }
}

impl ApiClient {
    /// Build a client for `base_url` with reqwest's default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a bearer token via `POST /auth/login`.
    /// Empty username or password are sent as-is.
    pub fn login(&self, credentials: &Credentials) -> Result<String> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(%url, "POST login");
        let result = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .map_err(ApiError::from)
            .and_then(decode::<LoginResponse>)
            .and_then(|body| match body.token {
                Some(token) if !token.is_empty() => Ok(token),
                _ => Err(ApiError::MissingToken),
            });
        if let Err(e) = &result {
            warn!(kind = e.kind(), error = %e, "login failed");
        }
        result
    }

    /// `GET /products` with the session token.
    pub fn fetch_products(&self, token: &str) -> Result<Vec<ProductRecord>> {
        self.get_json("/products", token)
    }

    /// `GET /products/analysis` with the session token.
    pub fn fetch_inventory_analysis(&self, token: &str) -> Result<InventoryAnalysis> {
        self.get_json::<Map<String, Value>>("/products/analysis", token)
            .map(InventoryAnalysis::from)
    }

    /// Shared shape of the authenticated reads: bearer header, one GET,
    /// body returned as parsed.
    fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let result = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .map_err(ApiError::from)
            .and_then(decode);
        if let Err(e) = &result {
            warn!(kind = e.kind(), error = %e, path, "request failed");
        }
        result
    }
}

/// Accept only `200 OK`, then parse the body. A body that fails to parse
/// is a `Decode` error rather than a transport one.
fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status != StatusCode::OK {
        return Err(ApiError::Status(status));
    }
    let text = res.text()?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
