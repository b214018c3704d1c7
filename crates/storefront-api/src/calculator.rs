//! Arithmetic Service Client
//!
//! `GET /{operation}?a=&b=` answers `{ "result": number }`.

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, CalculatorError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Minus,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Minus,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Endpoint path segment
    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Minus => "minus",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Key cap label
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Minus => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

#[derive(Deserialize)]
struct CalculationResult {
    result: f64,
}

#[derive(Clone, Debug)]
pub struct CalculatorApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl CalculatorApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Ask the service for `a <op> b`.
    ///
    /// Non-finite operands and division by zero are refused without a request.
    pub async fn calculate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if let Some(bad) = [a, b].into_iter().find(|v| !v.is_finite()) {
            return Err(CalculatorError::InvalidInput(bad));
        }
        if op == Operation::Divide && b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }

        let response = self.request(op, a, b).await?;
        tracing::debug!(op = op.path(), a, b, result = response.result, "calculated");
        Ok(response.result)
    }

    async fn request(&self, op: Operation, a: f64, b: f64) -> Result<CalculationResult, ApiError> {
        let url = self.config.endpoint(&[op.path()]);
        let response = self
            .client
            .get(url)
            .query(&[("a", a.to_string()), ("b", b.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}
