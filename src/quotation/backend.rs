//! The quotation backend seam and its HTTP implementation.

use crate::config::BackendConfig;
use crate::error::{QuoteError, Result};
use crate::model::{CartRequest, QuotationRequest};
use serde_json::Value;

/// Something that accepts quotation and cart requests.
///
/// Requests are sent once; implementations do not retry.
pub trait QuotationBackend {
    /// POST a JSON body to an endpoint path and return the decoded response.
    fn post_json(&self, path: &str, body: &Value) -> Result<Value>;

    /// Create a quotation of either kind.
    fn create_quotation(&self, request: &QuotationRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.post_json(request.endpoint(), &body)
    }

    /// Add a line to the cart.
    fn add_to_cart(&self, request: &CartRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.post_json("cart", &body)
    }
}

/// Blocking HTTP client for the storefront REST API.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl QuotationBackend for HttpBackend {
    fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(QuoteError::Backend {
                status: status.as_u16(),
                message: error_message(&text, path),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

/// Message to show for a failed request.
///
/// Prefers the backend's `message` field, then the raw body, then a
/// generic fallback naming the endpoint.
pub fn error_message(body: &str, path: &str) -> String {
    let trimmed = body.trim();

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        if let Some(Value::String(message)) = map.get("message") {
            if !message.is_empty() {
                return message.clone();
            }
        }
    }

    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!("Failed to POST {}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"message":"ProductPrice not found: 9","status":404}"#;
        assert_eq!(error_message(body, "cart"), "ProductPrice not found: 9");
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message("Quantity must be positive", "cart"), "Quantity must be positive");
        assert_eq!(error_message(r#"{"error":"x"}"#, "cart"), r#"{"error":"x"}"#);
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message("  ", "quotations/full-sheets"),
            "Failed to POST quotations/full-sheets"
        );
    }

    #[test]
    fn test_http_backend_keeps_config() {
        let backend = HttpBackend::new(BackendConfig::new("http://example.invalid/api")).unwrap();
        assert_eq!(
            backend.config().endpoint("cart"),
            "http://example.invalid/api/cart"
        );
    }
}
