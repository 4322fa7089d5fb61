use jobharvest_scrape::{FetchClient, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_html_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><div class=\"card\">hi</div></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let html = client
        .fetch_html(&format!("{}/jobs", mock_server.uri()))
        .await
        .unwrap();
    assert!(html.contains("card"));
}

#[tokio::test]
async fn fetch_html_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let err = client
        .fetch_html(&format!("{}/jobs", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn fetch_html_not_found() {
    let mock_server = MockServer::start().await;

    let client = FetchClient::new().unwrap();
    let err = client
        .fetch_html(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status } if status.as_u16() == 404));
}
