//! Fetch-path behavior of the INSPIRE client, driven against a local
//! one-shot HTTP listener instead of the live API.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread;

use publist_inspire::{InspireClient, InspireError};

/// Answer exactly one connection with a canned HTTP response.
fn serve_once(response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // Read to the end of the request headers before answering.
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.ends_with(b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
    });
    addr
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn client_for(addr: SocketAddr) -> InspireClient {
    InspireClient::with_base_url(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn success_response_builds_the_lookup() {
    let body = r#"{"hits":{"hits":[{"id":"851937","metadata":{"citation_count":42}}]}}"#;
    let addr = serve_once(http_response("200 OK", body));

    let counts = client_for(addr).citation_counts("a Doe.1").await.unwrap();
    assert_eq!(counts.get("851937"), Some(&42));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let addr = serve_once(http_response("500 Internal Server Error", ""));

    let err = client_for(addr).citation_counts("a Doe.1").await.unwrap_err();
    assert!(matches!(err, InspireError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn unparsable_body_is_an_error() {
    let addr = serve_once(http_response("200 OK", "not json at all"));

    let err = client_for(addr).citation_counts("a Doe.1").await.unwrap_err();
    assert!(matches!(err, InspireError::Parse(_)));
}
