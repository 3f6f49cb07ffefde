//! Minimal HTTP/1.1 server serving a redirect chain for integration tests.
//!
//! `/hop/N` (N > 0) responds 302 with a Location of `/hop/N-1`; `/hop/0`
//! and every other path respond 200 with a tiny body. Counts every request
//! it handles.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Starts the server on an ephemeral port. Returns the base URL (with a
/// trailing slash) and the request counter. The server runs until the
/// process exits.
pub fn start() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &hits));
        }
    });
    (format!("http://127.0.0.1:{}/", port), hits)
}

fn handle(mut stream: std::net::TcpStream, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    hits.fetch_add(1, Ordering::SeqCst);

    let path = request_path(request);
    if let Some(hop) = path
        .strip_prefix("/hop/")
        .and_then(|s| s.parse::<u32>().ok())
    {
        if hop > 0 {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: /hop/{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                hop - 1
            );
            let _ = stream.write_all(response.as_bytes());
            return;
        }
    }

    let body = b"landed";
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
