//! HTTP-level integration tests for the lead endpoints.
//!
//! These run the real router against a wiremock CRM: token endpoint and
//! lead collection endpoint both mocked, everything else live.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use leadbridge_api::{build_router, AppContext};
use leadbridge_domain::Config;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(server: &MockServer, preset_token: Option<&str>) -> Router {
    let uri = server.uri();
    let preset = preset_token.map(str::to_string);
    let config = Config::from_lookup(move |key| match key {
        "SF_TOKEN_URL" => Some(format!("{uri}/services/oauth2/token")),
        "SF_CLIENT_ID" => Some("client-id".into()),
        "SF_CLIENT_SECRET" => Some("client-secret".into()),
        "SF_API_BASE" => Some(uri.clone()),
        "SF_ACCESS_TOKEN" => preset.clone(),
        _ => None,
    })
    .expect("config");

    build_router(Arc::new(AppContext::new(&config).expect("app context")))
}

fn general_lead_body() -> Value {
    json!({
        "email": "a@b.com",
        "phone": "1",
        "firstname": "A",
        "lastname": "B",
        "business_name": "C"
    })
}

fn dealer_lead_body() -> Value {
    json!({
        "email": "a@b.com",
        "phone": "1",
        "firstname": "A",
        "lastname": "B",
        "business_name": "C",
        "zip_code": "12345",
        "products_of_carrying": ["widgets"],
        "current_brands_carried": ["Acme", "Globex"],
        "state": "CA",
        "city": "Fresno",
        "address1": "1 Main St"
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn mount_created(server: &MockServer, record_id: &str) {
    Mock::given(method("POST"))
        .and(path("/sobjects/Lead"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": record_id, "success": true })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn health_check_is_always_200() {
    let server = MockServer::start().await;
    let router = router_for(&server, None);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/sf_api/health_check")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Salesforce Lead API is running!");
}

#[tokio::test]
async fn general_lead_end_to_end() {
    let server = MockServer::start().await;
    mount_created(&server, "00Q123").await;
    let router = router_for(&server, Some("seed-token"));

    let response =
        router.oneshot(post_json("/sf_api/lead", &general_lead_body())).await.expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["salesforceId"], "00Q123");
    assert_eq!(body["message"], "Lead created successfully in Salesforce");

    // Exactly one CRM call, carrying the preset bearer token.
    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers["authorization"], "Bearer seed-token");

    let sent: Value = requests[0].body_json().expect("lead payload");
    assert_eq!(sent["Email"], "a@b.com");
    assert_eq!(sent["Company"], "C");
    assert_eq!(sent["LeadSource"], "Website");
    assert_eq!(sent["RecordType"]["Name"], "Dealer Qualification");
    // The general form always carries its list field, even when empty.
    assert_eq!(sent["Interested_Products__c"], "");
}

#[tokio::test]
async fn products_of_interest_are_semicolon_joined() {
    let server = MockServer::start().await;
    mount_created(&server, "00Q124").await;
    let router = router_for(&server, Some("seed-token"));

    let mut body = general_lead_body();
    body["products_of_interest"] = json!(["a", "b", "c"]);
    let response = router.oneshot(post_json("/sf_api/lead", &body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let requests = server.received_requests().await.expect("requests");
    let sent: Value = requests[0].body_json().expect("lead payload");
    assert_eq!(sent["Interested_Products__c"], "a;b;c");
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_the_crm_is_called() {
    let server = MockServer::start().await;
    let router = router_for(&server, Some("seed-token"));

    let mut body = general_lead_body();
    body.as_object_mut().expect("object").remove("phone");
    let response = router.oneshot(post_json("/sf_api/lead", &body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required field: phone");

    let requests = server.received_requests().await.expect("requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn empty_list_field_is_rejected() {
    let server = MockServer::start().await;
    let router = router_for(&server, Some("seed-token"));

    let mut body = general_lead_body();
    body["products_of_interest"] = json!([]);
    let response = router.oneshot(post_json("/sf_api/lead", &body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Field 'products_of_interest' must be a non-empty list");
}

#[tokio::test]
async fn missing_body_is_rejected() {
    let server = MockServer::start().await;
    let router = router_for(&server, Some("seed-token"));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/sf_api/lead")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required request body");
}

#[tokio::test]
async fn expired_token_is_refreshed_and_the_retry_result_is_final() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh-token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();
    Mock::given(method("POST"))
        .and(path("/sobjects/Lead"))
        .respond_with(move |_req: &wiremock::Request| -> ResponseTemplate {
            if attempts_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(401)
                    .set_body_json(json!([{ "errorCode": "INVALID_SESSION_ID" }]))
            } else {
                ResponseTemplate::new(201).set_body_json(json!({ "id": "00Q456" }))
            }
        })
        .expect(2)
        .mount(&server)
        .await;

    let router = router_for(&server, Some("stale-token"));
    let response =
        router.oneshot(post_json("/sf_api/lead", &general_lead_body())).await.expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["salesforceId"], "00Q456");

    // The retried call used the freshly minted token.
    let requests = server.received_requests().await.expect("requests");
    let lead_calls: Vec<_> =
        requests.iter().filter(|r| r.url.path() == "/sobjects/Lead").collect();
    assert_eq!(lead_calls.len(), 2);
    assert_eq!(lead_calls[0].headers["authorization"], "Bearer stale-token");
    assert_eq!(lead_calls[1].headers["authorization"], "Bearer fresh-token");
}

#[tokio::test]
async fn crm_rejection_relays_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sobjects/Lead"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!([{ "message": "server unavailable" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server, Some("seed-token"));
    let response =
        router.oneshot(post_json("/sf_api/lead", &general_lead_body())).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"][0]["message"], "server unavailable");
}

#[tokio::test]
async fn dealer_lead_end_to_end() {
    let server = MockServer::start().await;
    mount_created(&server, "00Q789").await;
    let router = router_for(&server, Some("seed-token"));

    let response = router
        .oneshot(post_json("/sf_api/lead/become-a-dealer", &dealer_lead_body()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["salesforceId"], "00Q789");

    let requests = server.received_requests().await.expect("requests");
    let sent: Value = requests[0].body_json().expect("lead payload");
    assert_eq!(sent["Products_Interested_in_Carrying__c"], "widgets");
    assert_eq!(sent["Current_Brands_Carried__c"], "Acme;Globex");
    assert_eq!(sent["PostalCode"], "12345");
    assert_eq!(sent["Street"], "1 Main St");
    // The dealer form never sets the general form's list field.
    assert!(sent.get("Interested_Products__c").is_none());
}

#[tokio::test]
async fn dealer_form_requires_the_extended_field_set() {
    let server = MockServer::start().await;
    let router = router_for(&server, Some("seed-token"));

    // A body valid for the general form is not enough for the dealer form.
    let response = router
        .oneshot(post_json("/sf_api/lead/become-a-dealer", &general_lead_body()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required field: zip_code");
}
