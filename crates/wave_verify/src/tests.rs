use serde_json::json;
use wave_test::mock::{MockServer, POST};

use crate::{StartVerification, VerifyClient};

fn test_client(base_url: &str) -> VerifyClient {
    VerifyClient::new("test-token")
        .expect("client to build")
        .with_base_url(base_url.to_owned())
}

#[tokio::test]
async fn start_posts_number_and_brand() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/verify").json_body(json!({
                "number": "14155550100",
                "brand": "WaveCo",
                "code_length": 6
            }));
            then.status(200).json_body(json!({
                "request_id": "req-1",
                "status": "0"
            }));
        })
        .await;

    let request = StartVerification {
        number: "14155550100".to_owned(),
        brand: "WaveCo".to_owned(),
        code_length: Some(6),
    };

    let verification = test_client(&server.base_url())
        .start(&request)
        .await
        .expect("start verification");

    assert_eq!(verification.request_id, "req-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn check_posts_code_to_request_scoped_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/verify/req-1/check")
                .json_body(json!({"code": "123456"}));
            then.status(200).json_body(json!({
                "request_id": "req-1",
                "status": "0"
            }));
        })
        .await;

    let result = test_client(&server.base_url())
        .check("req-1", "123456")
        .await
        .expect("check code");

    assert_eq!(result.status, "0");
    mock.assert_async().await;
}
