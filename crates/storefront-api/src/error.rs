//! API Errors

use thiserror::Error;

/// Errors talking to the REST services
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network failure, non-2xx status or an undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}

/// Errors from the arithmetic service, all shown to the user
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("invalid operand: {0}")]
    InvalidInput(f64),

    #[error(transparent)]
    Api(#[from] ApiError),
}
