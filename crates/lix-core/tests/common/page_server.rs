//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body with a configurable Content-Type, and can fail
//! the first N requests with a given status to exercise the retry path.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct PageServerOptions {
    /// Content-Type header value; None omits the header entirely.
    pub content_type: Option<String>,
    /// Status line for normal responses (e.g. "200 OK", "404 Not Found").
    pub status: &'static str,
    /// Fail this many requests with `fail_status` before serving normally.
    pub fail_first: u32,
    /// Status line used while failing (e.g. "503 Service Unavailable").
    pub fail_status: &'static str,
}

impl Default for PageServerOptions {
    fn default() -> Self {
        Self {
            content_type: Some("text/html; charset=utf-8".to_string()),
            status: "200 OK",
            fail_first: 0,
            fail_status: "503 Service Unavailable",
        }
    }
}

/// Handle to a running server: base URL plus a served-request counter.
pub struct PageServer {
    pub url: String,
    requests: Arc<AtomicU32>,
}

impl PageServer {
    pub fn request_count(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body`. Returns the handle;
/// the server runs until the process exits.
pub fn start(body: &str) -> PageServer {
    start_with_options(body, PageServerOptions::default())
}

pub fn start_with_options(body: &str, opts: PageServerOptions) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&requests);

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = opts.clone();
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &body, &opts, &counter));
        }
    });

    PageServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &str,
    opts: &PageServerOptions,
    counter: &AtomicU32,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Read the request; content is irrelevant, every path serves the page.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let served = counter.fetch_add(1, Ordering::SeqCst);
    if served < opts.fail_first {
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            opts.fail_status
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let content_type = opts
        .content_type
        .as_deref()
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        opts.status,
        body.len(),
        content_type,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
