//! Integration tests using a mock HTTP server
//!
//! Exercise the full flow: configuration → client → typed calls →
//! multi-page traversal, against wiremock.

use futures::StreamExt;
use gke_cluster_manager::resources::ListUsableSubnetworksRequest;
use gke_cluster_manager::{ClientConfig, ClusterManager, Credentials, Error, PageState};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> ClusterManager {
    let mut config = ClientConfig::new(Credentials::Anonymous).with_endpoint(server.uri());
    config.http.quota = None;
    config.http.max_retries = 0;
    ClusterManager::new(config).unwrap()
}

// ============================================================================
// Pagination end-to-end
// ============================================================================

#[tokio::test]
async fn test_items_stream_across_three_pages() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [
                {"subnetwork": "s1", "ipCidrRange": "10.0.0.0/20"},
                {"subnetwork": "s2", "ipCidrRange": "10.0.16.0/20"}
            ],
            "nextPageToken": "page-2"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // An empty page in the middle must not end the traversal.
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [],
            "nextPageToken": "page-3"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("pageToken", "page-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s3", "ipCidrRange": "10.1.0.0/20"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pager = client
        .list_usable_subnetworks(ListUsableSubnetworksRequest::new("projects/p1"))
        .await
        .unwrap();

    let subnets: Vec<_> = pager
        .into_items()
        .map(|item| item.unwrap())
        .collect()
        .await;

    let names: Vec<&str> = subnets.iter().map(|s| s.subnetwork.as_str()).collect();
    assert_eq!(names, vec!["s1", "s2", "s3"]);
}

#[tokio::test]
async fn test_pages_stream_preserves_page_boundaries() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s1"}, {"subnetwork": "s2"}],
            "nextPageToken": "tail"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("pageToken", "tail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s3"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pager = client
        .list_usable_subnetworks(ListUsableSubnetworksRequest::new("projects/p1"))
        .await
        .unwrap();

    let pages: Vec<_> = pager.into_pages().map(|page| page.unwrap()).collect().await;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].subnetworks.len(), 2);
    assert_eq!(pages[0].next_page_token, "tail");
    assert_eq!(pages[1].subnetworks.len(), 1);
    assert_eq!(pages[1].next_page_token, "");
}

#[tokio::test]
async fn test_single_page_listing_makes_one_request() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "only"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client
        .list_usable_subnetworks(ListUsableSubnetworksRequest::new("projects/p1"))
        .await
        .unwrap();

    assert_eq!(pager.state(), PageState::Exhausted);
    let items = pager.all_items().await.unwrap();
    assert_eq!(items.len(), 1);

    // Exhausted pagers stay exhausted; no second traversal, no second
    // request (the mock's expect(1) verifies on drop).
    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.all_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_and_page_size_forwarded_on_every_fetch() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("filter", "networkProjectId=p2"))
        .and(query_param("pageSize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s1"}],
            "nextPageToken": "next"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("filter", "networkProjectId=p2"))
        .and(query_param("pageSize", "1"))
        .and(query_param("pageToken", "next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListUsableSubnetworksRequest::new("projects/p1")
        .filter("networkProjectId=p2")
        .page_size(1);
    let mut pager = client.list_usable_subnetworks(request).await.unwrap();

    let items = pager.all_items().await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_mid_stream_server_error_stops_at_page_boundary() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subnetworks": [{"subnetwork": "s1"}, {"subnetwork": "s2"}],
            "nextPageToken": "doomed"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/aggregated/usableSubnetworks"))
        .and(query_param("pageToken", "doomed"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client
        .list_usable_subnetworks(ListUsableSubnetworksRequest::new("projects/p1"))
        .await
        .unwrap();

    let mut yielded = Vec::new();
    let err = loop {
        match pager.next_item().await {
            Ok(Some(item)) => yielded.push(item.subnetwork),
            Ok(None) => panic!("expected the second page fetch to fail"),
            Err(err) => break err,
        }
    };

    assert_eq!(yielded, vec!["s1", "s2"]);
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

// ============================================================================
// Configuration to client wiring
// ============================================================================

#[tokio::test]
async fn test_yaml_config_drives_the_client() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/locations/-/clusters"))
        .and(header("Authorization", "Bearer ya29.file-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clusters": [{"name": "prod", "status": "RUNNING"}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("client.yaml");
    std::fs::write(
        &config_path,
        format!(
            "endpoint: {}\ncredentials:\n  type: token\n  token: ya29.file-token\nhttp:\n  quota: null\n",
            server.uri()
        ),
    )
    .unwrap();

    let config = ClientConfig::from_yaml_file(&config_path).unwrap();
    let client = ClusterManager::new(config).unwrap();

    let response = client.list_clusters("projects/p1/locations/-").await.unwrap();
    assert_eq!(response.clusters.len(), 1);
    assert_eq!(response.clusters[0].name, "prod");
}

#[tokio::test]
async fn test_not_found_surfaces_as_http_status() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/locations/us/clusters/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("cluster not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_cluster("projects/p1/locations/us/clusters/ghost")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}
