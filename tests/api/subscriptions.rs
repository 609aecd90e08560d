use wiremock::matchers::{
    body_json,
    header,
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::helpers::*;

#[actix_rt::test]
async fn capture_returns_a_200_and_forwards_the_subscription() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/v2/publications/pub_0000/subscriptions"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_json(serde_json::json!({
            "email": "ursula_le_guin@gmail.com",
            "utm_source": "newsletter",
            "utm_medium": "social",
            "utm_campaign": "",
            "referring_site": "https://blog.example.com/post?utm_source=newsletter&utm_medium=social",
            "send_welcome_email": true,
            "reactivate_existing": true,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.provider_server)
        .await;

    let body = String::from(
        "email=ursula_le_guin%40gmail.com&page_url=https%3A%2F%2Fblog.example.com%2Fpost%3Futm_source%3Dnewsletter%26utm_medium%3Dsocial",
    );
    let response = send_post_request(&format!("{}/subscriptions", test_app.address), body).await;

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn capture_without_a_page_url_sends_empty_tracking_fields() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/v2/publications/pub_0000/subscriptions"))
        .and(body_json(serde_json::json!({
            "email": "ursula_le_guin@gmail.com",
            "utm_source": "",
            "utm_medium": "",
            "utm_campaign": "",
            "referring_site": "",
            "send_welcome_email": true,
            "reactivate_existing": true,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.provider_server)
        .await;

    let body = String::from("email=ursula_le_guin%40gmail.com");
    let response = send_post_request(&format!("{}/subscriptions", test_app.address), body).await;

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn capture_returns_a_400_with_an_invalid_email_and_sends_nothing() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.provider_server)
        .await;

    let response = send_post_request(
        &format!("{}/subscriptions", test_app.address),
        String::from("email=not-an-email"),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
}

#[actix_rt::test]
async fn capture_returns_a_400_with_a_missing_email() {
    let test_app = spawn_app().await;

    let response = send_post_request(
        &format!("{}/subscriptions", test_app.address),
        String::from(""),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
}

#[actix_rt::test]
async fn capture_returns_a_400_with_a_malformed_page_url() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.provider_server)
        .await;

    let response = send_post_request(
        &format!("{}/subscriptions", test_app.address),
        String::from("email=ursula_le_guin%40gmail.com&page_url=not%20a%20url"),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
}

#[actix_rt::test]
async fn capture_reports_a_provider_rejection_as_a_502() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"message": "Email already subscribed"})),
        )
        .expect(1)
        .mount(&test_app.provider_server)
        .await;

    let response = send_post_request(
        &format!("{}/subscriptions", test_app.address),
        String::from("email=ursula_le_guin%40gmail.com"),
    )
    .await;

    assert_eq!(502, response.status().as_u16());
    let payload = response
        .json::<serde_json::Value>()
        .await
        .expect("Fail to parse response body");
    assert_eq!("Error 422: Email already subscribed", payload["error"]);
}

#[actix_rt::test]
async fn capture_reports_an_unreachable_provider_as_a_503() {
    let test_app = spawn_app().await;
    // shutting down the provider mock frees its port: connections are refused
    drop(test_app.provider_server);

    let response = send_post_request(
        &format!("{}/subscriptions", test_app.address),
        String::from("email=ursula_le_guin%40gmail.com"),
    )
    .await;

    assert_eq!(503, response.status().as_u16());
}
