//! API Configuration

use reqwest::Url;

use crate::error::ApiError;

/// Used when `STOREFRONT_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the REST services live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        Ok(Self { base_url: url })
    }

    /// Resolve from the compile-time `STOREFRONT_API_URL`
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments (percent-encoded) to the base URL
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let plain = ApiConfig::new("http://localhost:3000").unwrap();
        let slashed = ApiConfig::new("http://localhost:3000/").unwrap();

        assert_eq!(plain.endpoint(&["products"]).as_str(), "http://localhost:3000/products");
        assert_eq!(slashed.endpoint(&["products"]).as_str(), "http://localhost:3000/products");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_ids() {
        let config = ApiConfig::new("https://shop.example/api/").unwrap();
        let url = config.endpoint(&["products", "a b/c"]);
        assert_eq!(url.as_str(), "https://shop.example/api/products/a%20b%2Fc");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::new("not a url").unwrap_err();
        assert!(err.to_string().starts_with("invalid API base URL not a url"));

        assert!(ApiConfig::new("mailto:shop@example.com").is_err());
    }

    #[test]
    fn test_from_env_falls_back_to_default() {
        if option_env!("STOREFRONT_API_URL").is_none() {
            let config = ApiConfig::from_env().unwrap();
            assert_eq!(config.base_url().as_str(), "http://localhost:3000/");
        }
    }
}
