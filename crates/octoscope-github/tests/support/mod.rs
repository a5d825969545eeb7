//! Minimal HTTP/1.1 stub for exercising the client against real sockets.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub struct Stub {
    pub base_url: String,
    /// Request lines (`GET /users/octocat HTTP/1.1`) in arrival order.
    pub requests: Receiver<String>,
}

/// Serve `status` with `body` to the next connection, then stop.
pub fn serve_once(status: u16, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    let body = body.to_string();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }
        // Drain headers.
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) if line == "\r\n" || line == "\n" => break,
                Ok(_) => continue,
                Err(_) => return,
            }
        }
        let _ = tx.send(request_line.trim_end().to_string());

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    Stub {
        base_url: format!("http://{addr}/users"),
        requests: rx,
    }
}

/// A base URL on a port nothing is listening on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/users")
}

pub const OCTOCAT: &str = r#"{"login":"octocat","avatar_url":"u","created_at":"2011-01-25T18:44:36Z","public_repos":2,"followers":3,"following":1}"#;
