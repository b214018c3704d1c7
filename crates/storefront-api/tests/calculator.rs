//! Arithmetic Service Client Tests

use serde_json::json;
use storefront_api::{ApiConfig, CalculatorApi, CalculatorError, Operation};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, CalculatorApi) {
    let server = MockServer::start().await;
    let api = CalculatorApi::new(ApiConfig::new(&server.uri()).unwrap());
    (server, api)
}

#[tokio::test]
async fn test_each_operation_hits_its_endpoint() {
    let (server, api) = setup().await;
    for (op, result) in [
        (Operation::Add, 8.0),
        (Operation::Minus, 4.0),
        (Operation::Multiply, 12.0),
        (Operation::Divide, 3.0),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/{}", op.path())))
            .and(query_param("a", "6"))
            .and(query_param("b", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
            .expect(1)
            .mount(&server)
            .await;
    }

    for (op, expected) in Operation::ALL.into_iter().zip([8.0, 4.0, 12.0, 3.0]) {
        assert_eq!(api.calculate(op, 6.0, 2.0).await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_fractional_operands() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/add"))
        .and(query_param("a", "0.1"))
        .and(query_param("b", "2.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 2.6 })))
        .mount(&server)
        .await;

    assert_eq!(api.calculate(Operation::Add, 0.1, 2.5).await.unwrap(), 2.6);
}

#[tokio::test]
async fn test_division_by_zero_never_leaves_client() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 0 })))
        .expect(0)
        .mount(&server)
        .await;

    let err = api.calculate(Operation::Divide, 1.0, 0.0).await.unwrap_err();
    assert!(matches!(err, CalculatorError::DivisionByZero));

    let err = api.calculate(Operation::Add, f64::NAN, 1.0).await.unwrap_err();
    assert!(matches!(err, CalculatorError::InvalidInput(_)));
}

#[tokio::test]
async fn test_server_rejection_is_recoverable() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/multiply"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = api.calculate(Operation::Multiply, 2.0, 3.0).await.unwrap_err();
    match err {
        CalculatorError::Api(api_err) => assert_eq!(api_err.status(), Some(400)),
        other => panic!("unexpected error: {other}"),
    }
}
