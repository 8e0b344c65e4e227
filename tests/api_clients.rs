mod common;

use newsdash::api::{
    ApiClient, IngestMetricsClient, IngestMetricsSource, MetricsQuery, OutletDirectory,
    OutletsClient, StatusClient, StatusSource,
};
use newsdash::Error;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base(&format!("{}/api", server.uri())).unwrap()
}

#[tokio::test]
async fn outlets_client_decodes_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/outlets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::outlets_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OutletsClient::new(api_for(&server).await);
    let res = client.outlets().await.unwrap();

    assert_eq!(res.countries.len(), 2);
    assert_eq!(res.countries[0].country, "Norway");
    assert_eq!(res.countries[0].outlets[0].feeds.len(), 2);
    assert_eq!(res.countries[1].outlets[0].kind, "public");
    assert_eq!(res.outlet_count(), 3);
}

#[tokio::test]
async fn metrics_client_sends_days_and_country() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ingest-metrics"))
        .and(query_param("days", "14"))
        .and(query_param("country", "Norway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days": ["2024-05-01"],
            "series": [{"country": "Norway", "outletId": "nrk", "counts": [3]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = IngestMetricsClient::new(api_for(&server).await);
    let res = client
        .ingest_metrics(&MetricsQuery::new(14, Some("Norway".into())))
        .await
        .unwrap();

    assert_eq!(res.days, vec!["2024-05-01"]);
    assert_eq!(res.series[0].counts, vec![3]);
}

#[tokio::test]
async fn metrics_client_defaults_to_seven_days_without_country() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ingest-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::metrics_body()))
        .mount(&server)
        .await;

    let client = IngestMetricsClient::new(api_for(&server).await);
    client.ingest_metrics(&MetricsQuery::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("days=7"));
}

#[tokio::test]
async fn server_error_surfaces_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/outlets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server).await;
    let client = OutletsClient::new(api.clone());
    let err = client.outlets().await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 500, .. }));
    assert!(err.is_transport());

    let stats = api.stats().snapshot();
    assert_eq!(stats.requests_total, 1);
    assert_eq!(stats.requests_failed, 1);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/outlets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = OutletsClient::new(api_for(&server).await)
        .outlets()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn misaligned_series_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ingest-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days": ["2024-05-01", "2024-05-02"],
            "series": [{"country": "Norway", "outletId": "nrk", "counts": [1]}]
        })))
        .mount(&server)
        .await;

    let err = IngestMetricsClient::new(api_for(&server).await)
        .ingest_metrics(&MetricsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Data(_)));
}

#[tokio::test]
async fn status_client_decodes_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::status_body()))
        .mount(&server)
        .await;

    let api = api_for(&server).await;
    let status = StatusClient::new(api.clone()).status().await.unwrap();

    assert_eq!(status.country_count, 2);
    assert_eq!(status.latest_ingest_date.as_deref(), Some("20240503"));
    assert_eq!(status.outlets_latest_run[1].outlet_id, "svt");
    assert_eq!(status.error, None);

    let stats = api.stats().snapshot();
    assert_eq!(stats.requests_success, 1);
    assert!(stats.bytes_received > 0);
}
