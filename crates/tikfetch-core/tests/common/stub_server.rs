//! Minimal HTTP/1.1 server that plays the extraction endpoint for
//! integration tests.
//!
//! Serves a canned status and body to every request and records what the
//! client sent (method, Content-Type, body) for assertions.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Handle to a running stub server.
pub struct StubServer {
    /// Endpoint URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering every request with
/// `status` and `body`. The server runs until the process exits.
pub fn start(status: u16, body: &str) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::default();
    let body = body.to_string();

    let captured = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, status, &body, &captured);
        }
    });

    StubServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &str,
    captured: &Mutex<Vec<CapturedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let raw = match read_request(&mut stream) {
        Some(raw) => raw,
        None => return,
    };
    if let Some(request) = parse_request(&raw) {
        captured.lock().unwrap().push(request);
    }

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads headers plus Content-Length bytes of body.
fn read_request(stream: &mut std::net::TcpStream) -> Option<String> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(header_end) = find_header_end(&raw) {
            let headers = String::from_utf8_lossy(&raw[..header_end]);
            let content_length = headers
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8(raw).ok()
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_request(raw: &str) -> Option<CapturedRequest> {
    let (headers, body) = raw.split_once("\r\n\r\n")?;
    let mut lines = headers.lines();
    let method = lines
        .next()?
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string();
    let content_type = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-type"))
        .map(|(_, v)| v.trim().to_string());
    Some(CapturedRequest {
        method,
        content_type,
        body: body.to_string(),
    })
}
