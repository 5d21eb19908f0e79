use crate::schemas::HealthResponse;
use crate::test_utils::{setup_test_app, SEEDED_CUSTOMERS};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use common::{attach_drivers, ChurnDriver, Customer, ServiceError};

async fn server() -> TestServer {
    TestServer::new(setup_test_app(None).await).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = server().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.database, "connected");
}

#[tokio::test]
async fn test_customers_ordered_by_score_desc() {
    let server = server().await;

    let response = server
        .get("/rest/v1/customers")
        .add_query_param("select", "*")
        .add_query_param("order", "churn_score.desc")
        .await;

    response.assert_status(StatusCode::OK);
    let customers: Vec<Customer> = response.json();
    assert_eq!(customers.len(), SEEDED_CUSTOMERS);
    assert!(customers.windows(2).all(|w| w[0].churn_score >= w[1].churn_score));
}

#[tokio::test]
async fn test_drivers_ordered_by_priority_and_joinable() {
    let server = server().await;

    let customers: Vec<Customer> = server
        .get("/rest/v1/customers")
        .add_query_param("order", "churn_score.desc")
        .await
        .json();
    let drivers: Vec<ChurnDriver> = server
        .get("/rest/v1/churn_drivers")
        .add_query_param("order", "priority.asc")
        .await
        .json();

    assert!(drivers.windows(2).all(|w| w[0].priority <= w[1].priority));

    let joined = attach_drivers(customers, drivers);
    assert_eq!(joined.len(), SEEDED_CUSTOMERS);
    for customer in &joined {
        assert!(!customer.drivers.is_empty());
        assert!(customer.drivers.len() <= 3);
        assert!(customer.drivers.iter().all(|d| d.customer_id == customer.id));
        assert_eq!(customer.drivers[0].priority, 1);
    }
}

#[tokio::test]
async fn test_drivers_filtered_by_customer() {
    let server = server().await;

    let response = server
        .get("/rest/v1/churn_drivers")
        .add_query_param("customer_id", "eq.cus_0001")
        .add_query_param("order", "priority.asc")
        .await;

    response.assert_status(StatusCode::OK);
    let drivers: Vec<ChurnDriver> = response.json();
    assert!(!drivers.is_empty());
    assert!(drivers.iter().all(|d| d.customer_id == "cus_0001"));
}

#[tokio::test]
async fn test_limit_and_select() {
    let server = server().await;

    let response = server
        .get("/rest/v1/customers")
        .add_query_param("select", "id,churn_score")
        .add_query_param("order", "churn_score.asc")
        .add_query_param("limit", "3")
        .await;

    response.assert_status(StatusCode::OK);
    let rows: Vec<serde_json::Value> = response.json();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        let object = row.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("churn_score"));
    }
}

#[tokio::test]
async fn test_limit_out_of_range_is_rejected() {
    let server = server().await;

    let response = server.get("/rest/v1/customers").add_query_param("limit", "5000").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_table() {
    let server = server().await;

    let response = server.get("/rest/v1/invoices").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ServiceError = response.json();
    assert_eq!(body.code, "UNKNOWN_TABLE");
}

#[tokio::test]
async fn test_unknown_order_column() {
    let server = server().await;

    let response = server
        .get("/rest/v1/customers")
        .add_query_param("order", "mrr.desc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ServiceError = response.json();
    assert_eq!(body.code, "UNKNOWN_COLUMN");
}

#[tokio::test]
async fn test_malformed_order_direction() {
    let server = server().await;

    let response = server
        .get("/rest/v1/churn_drivers")
        .add_query_param("order", "priority.up")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ServiceError = response.json();
    assert_eq!(body.code, "BAD_ORDER");
}

#[tokio::test]
async fn test_customer_filter_not_allowed_on_customers() {
    let server = server().await;

    let response = server
        .get("/rest/v1/customers")
        .add_query_param("customer_id", "eq.cus_0001")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anon_key_required_when_configured() {
    let server = TestServer::new(setup_test_app(Some("secret")).await).unwrap();

    let missing = server.get("/rest/v1/customers").await;
    missing.assert_status(StatusCode::UNAUTHORIZED);

    let wrong = server
        .get("/rest/v1/customers")
        .add_header(HeaderName::from_static("apikey"), HeaderValue::from_static("nope"))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);

    let ok = server
        .get("/rest/v1/customers")
        .add_header(HeaderName::from_static("apikey"), HeaderValue::from_static("secret"))
        .add_header(HeaderName::from_static("authorization"), HeaderValue::from_static("Bearer secret"))
        .await;
    ok.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_read_served_consistently() {
    let server = server().await;

    let first: Vec<Customer> = server
        .get("/rest/v1/customers")
        .add_query_param("order", "churn_score.desc")
        .await
        .json();
    let second: Vec<Customer> = server
        .get("/rest/v1/customers")
        .add_query_param("order", "churn_score.desc")
        .await
        .json();

    assert_eq!(first, second);
}
