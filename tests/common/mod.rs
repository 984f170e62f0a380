use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const RATES_PATH: &str = "/v6/latest/USD";

pub fn rates_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "result": "success",
        "base_code": "USD",
        "rates": { "USD": 1, "NGN": 1500, "EUR": 0.9 }
    }))
}

/// Starts a rates endpoint answering every GET with `response`, and
/// expecting exactly `calls` requests by the time it is dropped.
pub async fn rates_server(response: ResponseTemplate, calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RATES_PATH))
        .respond_with(response)
        .expect(calls)
        .mount(&server)
        .await;
    server
}

pub fn rates_url(server: &MockServer) -> String {
    format!("{}{RATES_PATH}", server.uri())
}

/// A URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{RATES_PATH}")
}
