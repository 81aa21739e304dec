//! Record source integration tests against mock servers and temp files.

use std::io::Write as _;

use workers_business::{
    BusinessConfig, FileRecordSource, HttpRecordSource, ListViewEngine, RecordSource, SourceError,
    load_records,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_employees(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn source_for(server: &MockServer) -> HttpRecordSource {
    HttpRecordSource::new(&BusinessConfig::new(format!("{}/api", server.uri())))
}

#[tokio::test]
async fn test_http_source_loads_bare_array() {
    let server = MockServer::start().await;
    mock_employees(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "firstName": "Anna",
                "lastName": "Smith",
                "email": "anna@example.com",
                "city": "Oslo",
                "country": "Norway"
            },
            { "firstName": "Bob" }
        ])),
    )
    .await;

    let records = load_records(&source_for(&server)).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].city.as_deref(), Some("Oslo"));
    assert!(records[1].email.is_none());
}

#[tokio::test]
async fn test_http_source_loads_wrapped_payload() {
    let server = MockServer::start().await;
    mock_employees(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "employees": [{ "firstName": "Carl" }],
            "total": 1
        })),
    )
    .await;

    let records = source_for(&server).fetch().await.expect("fetch should succeed");
    assert_eq!(records[0].first_name.as_deref(), Some("Carl"));
}

#[tokio::test]
async fn test_http_error_status_is_reported_and_swallowed() {
    let server = MockServer::start().await;
    mock_employees(&server, ResponseTemplate::new(500)).await;

    let source = source_for(&server);
    assert!(matches!(
        source.fetch().await,
        Err(SourceError::Status { status: 500 })
    ));
    assert!(load_records(&source).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_loads_as_empty() {
    let server = MockServer::start().await;
    mock_employees(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let source = source_for(&server);
    assert!(matches!(source.fetch().await, Err(SourceError::Decode(_))));
    assert!(load_records(&source).await.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_loads_as_empty() {
    // Nothing listens on port 9 (discard) in the test environment.
    let source = HttpRecordSource::new(&BusinessConfig::new("http://127.0.0.1:9/api"));
    assert!(matches!(source.fetch().await, Err(SourceError::Http(_))));
    assert!(load_records(&source).await.is_empty());
}

#[tokio::test]
async fn test_failed_load_yields_empty_view() {
    let server = MockServer::start().await;
    mock_employees(&server, ResponseTemplate::new(404)).await;

    let engine = ListViewEngine::with_records(load_records(&source_for(&server)).await);
    let page = engine.compute_visible_page();

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.displayed_total_pages(), 1);
}

#[tokio::test]
async fn test_file_source_reads_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"data":[{{"firstName":"Dora","country":"Chile"}},{{"firstName":"Eve"}}]}}"#
    )
    .expect("write temp file");

    let source = FileRecordSource::new(file.path());
    let records = load_records(&source).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].country.as_deref(), Some("Chile"));
}
