use bazaar::{
    model::auth::{OtpSentDto, RequestOtpDto},
    server::controller::auth::request_otp,
};

use super::*;

fn request(phone: &str) -> Json<RequestOtpDto> {
    Json(RequestOtpDto {
        phone: phone.to_string(),
    })
}

/// Expect 200 with the normalized number after the gateway accepts the code
#[tokio::test]
async fn sends_code_to_normalized_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_tables()
        .with_sms_endpoint(200, 1)
        .build()
        .await?;

    let result = request_otp(State(test.into_app_state()), request("98765-43210")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let sent: OtpSentDto = json_body(resp).await;
    assert_eq!(sent.phone, TEST_PHONE);
    assert_eq!(sent.expires_in_secs, 300);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without contacting the gateway for malformed numbers
#[tokio::test]
async fn rejects_invalid_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_tables()
        .with_sms_endpoint(200, 0)
        .build()
        .await?;

    let result = request_otp(State(test.into_app_state()), request("12ab")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect 502 when the gateway refuses the message
#[tokio::test]
async fn returns_bad_gateway_when_sms_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_tables()
        .with_sms_endpoint(500, 1)
        .build()
        .await?;

    let result = request_otp(State(test.into_app_state()), request(TEST_PHONE)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}
