//! Minimal HTTP/1.1 server with scripted responses for integration tests.
//!
//! Each route maps a request path to a fixed status line, headers, and body.
//! Unknown paths get `404 Not Found`.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    /// Header lines written as-is, for bytes that are not valid UTF-8.
    pub raw_headers: Vec<Vec<u8>>,
    pub body: Vec<u8>,
    /// Pause between the head and the body.
    pub body_delay: Option<Duration>,
}

impl Route {
    pub fn new(path: &str, status: u16, reason: &str) -> Self {
        Self {
            path: path.to_string(),
            status,
            reason: reason.to_string(),
            headers: Vec::new(),
            raw_headers: Vec::new(),
            body: Vec::new(),
            body_delay: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }

    pub fn raw_header(mut self, line: &[u8]) -> Self {
        self.raw_headers.push(line.to_vec());
        self
    }

    pub fn body_delay(mut self, delay: Duration) -> Self {
        self.body_delay = Some(delay);
        self
    }
}

/// Starts a server in a background thread serving `routes`. Returns the base
/// URL without a trailing slash (e.g. "http://127.0.0.1:12345"). The server
/// runs until the process exits.
pub fn start(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Returns a URL on a local port that nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &[Route]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);

    let fallback = Route::new(path, 404, "Not Found");
    let route = routes.iter().find(|r| r.path == path).unwrap_or(&fallback);

    // Raw lines go right after the status line so named headers follow them.
    let mut response = format!("HTTP/1.1 {} {}\r\n", route.status, route.reason).into_bytes();
    for line in &route.raw_headers {
        response.extend_from_slice(line);
        response.extend_from_slice(b"\r\n");
    }
    let has_length = route
        .headers
        .iter()
        .any(|(n, _)| n.eq_ignore_ascii_case("content-length"));
    for (name, value) in &route.headers {
        response.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
    }
    if !has_length {
        response.extend_from_slice(format!("Content-Length: {}\r\n", route.body.len()).as_bytes());
    }
    response.extend_from_slice(b"Connection: close\r\n\r\n");
    let _ = stream.write_all(&response);
    if let Some(delay) = route.body_delay {
        let _ = stream.flush();
        thread::sleep(delay);
    }
    let _ = stream.write_all(&route.body);
}

/// Returns the request target of the first line ("GET /x HTTP/1.1" -> "/x").
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
