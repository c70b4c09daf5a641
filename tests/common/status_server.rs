//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one fixed status line and body, and counts
//! how many requests it has seen.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct StatusServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StatusServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusServerOptions {
    /// If set, advertise this Content-Length instead of the real body length
    /// and close the connection after sending the body.
    pub declared_len: Option<usize>,
}

/// Starts a server in a background thread. `status` is the full status
/// line tail, e.g. "200 OK". The server runs until the process exits.
pub fn start(status: &'static str, body: Vec<u8>) -> StatusServer {
    start_with_options(status, body, StatusServerOptions::default())
}

/// Like `start` but lets the server lie about the body length.
pub fn start_with_options(
    status: &'static str,
    body: Vec<u8>,
    opts: StatusServerOptions,
) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let body = Arc::new(body);

    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, status, &body, &counter, opts));
        }
    });

    StatusServer {
        url: format!("http://127.0.0.1:{}/the-verdict.txt", port),
        hits,
    }
}

/// Returns a URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/the-verdict.txt", port)
}

fn handle(
    mut stream: TcpStream,
    status: &str,
    body: &[u8],
    hits: &AtomicUsize,
    opts: StatusServerOptions,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let mut seen = Vec::new();
    // Read until the end of the request head.
    loop {
        match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => {
                seen.extend_from_slice(&buf[..n]);
                if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n",
        status,
        opts.declared_len.unwrap_or(body.len())
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
    let _ = stream.shutdown(std::net::Shutdown::Both);
}
