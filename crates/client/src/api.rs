//! HTTP implementation of [`PosBackend`].

use async_trait::async_trait;
use nixgelato::{
    catalog::{CategoryRecord, ToppingRecord},
    checkout::{InvoiceReceipt, InvoiceRequest},
};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{backend::PosBackend, errors::ApiError, token::BearerToken};

/// Categories with their products.
pub const PRODUCTS_PATH: &str = "api/productos";

/// Shared topping list.
pub const TOPPINGS_PATH: &str = "api/toppings";

/// Invoice registration.
pub const INVOICES_PATH: &str = "api/facturas";

/// Bearer-authenticated client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    token: BearerToken,
    http: Client,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// A base URL with a path prefix keeps it: `https://host/pos` resolves
    /// products at `https://host/pos/api/productos`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] unless `base_url` is absolute.
    pub fn new(base_url: &str, token: BearerToken) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();

        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let parsed = Url::parse(&normalized).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: parsed,
            token,
            http: Client::new(),
        })
    }

    /// Root of the API.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path)?;

        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.token.expose())
            .send()
            .await?;

        let body: Value = ensure_success(response).await?.json().await?;

        decode_list(path, body)
    }
}

#[async_trait(?Send)]
impl PosBackend for ApiClient {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        self.get_list(PRODUCTS_PATH).await
    }

    async fn fetch_toppings(&self) -> Result<Vec<ToppingRecord>, ApiError> {
        self.get_list(TOPPINGS_PATH).await
    }

    async fn post_invoice(&self, invoice: &InvoiceRequest) -> Result<InvoiceReceipt, ApiError> {
        let url = self.endpoint(INVOICES_PATH)?;

        debug!(%url, lines = invoice.lines.len(), "POST");

        let response = self
            .http
            .post(url)
            .bearer_auth(self.token.expose())
            .json(invoice)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(rejection(status, &text))
}

/// Build the error for a non-success response, preferring the backend's
/// `{ "message": … }` over a generic status line.
fn rejection(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("el servidor respondió {status}"));

    warn!(%status, %message, "request rejected");

    ApiError::Rejected { status, message }
}

/// Decode a list endpoint body. Anything other than a JSON array is an empty
/// list.
fn decode_list<T: DeserializeOwned>(path: &str, body: Value) -> Result<Vec<T>, ApiError> {
    if body.is_array() {
        return Ok(serde_json::from_value(body)?);
    }

    warn!(path, "expected a JSON array, using an empty list");

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn client(base_url: &str) -> Result<ApiClient, ApiError> {
        ApiClient::new(base_url, BearerToken::new("secret")?)
    }

    #[test]
    fn endpoints_keep_base_path_prefix() -> TestResult {
        let api = client("https://pos.example.com/backend")?;

        assert_eq!(
            api.endpoint(PRODUCTS_PATH)?.as_str(),
            "https://pos.example.com/backend/api/productos"
        );

        let api = client("http://localhost:3000/")?;

        assert_eq!(
            api.endpoint(INVOICES_PATH)?.as_str(),
            "http://localhost:3000/api/facturas"
        );

        Ok(())
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(matches!(
            client("/api"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn non_array_body_is_an_empty_list() -> TestResult {
        let toppings: Vec<ToppingRecord> =
            decode_list(TOPPINGS_PATH, json!({ "error": "sin datos" }))?;

        assert!(toppings.is_empty());

        let toppings: Vec<ToppingRecord> = decode_list(TOPPINGS_PATH, Value::Null)?;

        assert!(toppings.is_empty());

        Ok(())
    }

    #[test]
    fn array_body_is_decoded() -> TestResult {
        let toppings: Vec<ToppingRecord> = decode_list(
            TOPPINGS_PATH,
            json!([{ "id_topping": 1, "nombre": "Chispas", "precio_adicional": 1200 }]),
        )?;

        assert_eq!(toppings.len(), 1);

        Ok(())
    }

    #[test]
    fn rejection_prefers_backend_message() {
        let error = rejection(
            StatusCode::BAD_REQUEST,
            r#"{ "message": "Stock insuficiente para Copa" }"#,
        );

        assert_eq!(error.to_string(), "Stock insuficiente para Copa");
    }

    #[test]
    fn rejection_without_message_names_the_status() {
        let error = rejection(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");

        assert!(
            matches!(
                &error,
                ApiError::Rejected { status, .. } if *status == StatusCode::INTERNAL_SERVER_ERROR
            ),
            "expected Rejected, got {error:?}"
        );
        assert_eq!(
            error.to_string(),
            "el servidor respondió 500 Internal Server Error"
        );
    }
}
