//! Configuration constants and settings for the quotation engine.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Smallest quantity a quote can be derived for.
pub const MIN_QUANTITY: i64 = 1;

/// Machining cost applied when none is entered.
pub const DEFAULT_MACHINING_COST: f64 = 0.0;

/// Discount applied to cart requests when none is entered.
pub const DEFAULT_DISCOUNT: f64 = 0.0;

/// Backend base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable holding the backend base URL.
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";

/// Environment variable holding the bearer token.
pub const ENV_API_TOKEN: &str = "API_TOKEN";

/// Separator between length and breadth in a size label ("1220x2420").
pub const SIZE_SEPARATOR: char = 'x';

/// Suffix stripped from thickness labels ("3mm").
pub const THICKNESS_SUFFIX: &str = "mm";

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Optional bearer token sent as `Authorization`.
    pub token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl BackendConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_API_BASE_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self { base_url, token }
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a value is finite and strictly positive.
    #[inline]
    pub fn is_positive(a: f64) -> bool {
        a.is_finite() && a > 0.0
    }

    /// Check if a value is finite and not negative.
    #[inline]
    pub fn is_non_negative(a: f64) -> bool {
        a.is_finite() && a >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = BackendConfig::new("http://host/api/");
        assert_eq!(
            config.endpoint("/quotations/full-sheets"),
            "http://host/api/quotations/full-sheets"
        );
        assert_eq!(config.endpoint("cart"), "http://host/api/cart");
    }

    #[test]
    fn test_with_token() {
        let config = BackendConfig::default().with_token("abc");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_float_helpers() {
        assert!(float_cmp::approx_eq(0.1 + 0.2, 0.3));
        assert!(float_cmp::approx_zero(0.00001));
        assert!(float_cmp::is_positive(1.0));
        assert!(!float_cmp::is_positive(0.0));
        assert!(!float_cmp::is_positive(f64::NAN));
        assert!(float_cmp::is_non_negative(0.0));
        assert!(!float_cmp::is_non_negative(-0.5));
        assert!(!float_cmp::is_non_negative(f64::INFINITY));
    }
}
