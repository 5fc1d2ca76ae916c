use std::time::Duration;

use sitegrab_engine::{FailureKind, FetchSettings, SiteFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_returns_body_and_preserves_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = SiteFetcher::new(FetchSettings::default());
    let url = format!("{}/doc", server.uri());

    let data = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(data.url, url);
    assert_eq!(data.body, "<html>ok</html>");
    assert_eq!(data.byte_len(), 15);
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = SiteFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.url, url);
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetch_rejects_malformed_url() {
    let fetcher = SiteFetcher::new(FetchSettings::default());

    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = SiteFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn blocking_fetch_returns_body_and_fails_on_status() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("hello", "text/plain; charset=utf-8"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        server
    });

    let fetcher = SiteFetcher::new(FetchSettings::default());

    let ok_url = format!("{}/doc", server.uri());
    let data = fetcher.fetch_blocking(&ok_url).expect("fetch ok");
    assert_eq!(data.url, ok_url);
    assert_eq!(data.body, "hello");

    let bad_url = format!("{}/broken", server.uri());
    let err = fetcher.fetch_blocking(&bad_url).unwrap_err();
    assert_eq!(err.url, bad_url);
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}
