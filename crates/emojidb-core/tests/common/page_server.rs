//! Minimal HTTP/1.1 server that answers every GET with one fixed page.
//!
//! Can optionally redirect every other path to the page first.
//!
//! Records the request targets it saw so tests can assert on the URL the
//! client built.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct PageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    /// Request targets (path + query) received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone)]
pub struct PageServerOptions {
    /// Status sent with the page.
    pub status: u16,
    /// If set, any other request target gets `302 Found` pointing here.
    pub redirect_to: Option<String>,
}

impl Default for PageServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirect_to: None,
        }
    }
}

/// Serves `body` with `200 OK`.
pub fn start(body: &str) -> PageServer {
    start_with_options(body, PageServerOptions::default())
}

/// Serves `body` with the given status code.
pub fn start_with_status(status: u16, body: &str) -> PageServer {
    start_with_options(
        body,
        PageServerOptions {
            status,
            ..PageServerOptions::default()
        },
    )
}

/// Like `start` but allows customizing status and redirects. The server runs
/// until the process exits.
pub fn start_with_options(body: &str, opts: PageServerOptions) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.as_bytes().to_vec());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts, &body, &seen));
        }
    });
    PageServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Returns a base URL on which nothing is listening.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &PageServerOptions,
    body: &[u8],
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    seen.lock().unwrap().push(target.clone());

    if let Some(location) = opts.redirect_to.as_deref() {
        if target != location {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(response.as_bytes());
            return;
        }
    }

    let status = opts.status;
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
