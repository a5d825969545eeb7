//! Helpers for driving the `octoscope` binary.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;

pub const OCTOCAT: &str = r#"{"login":"octocat","avatar_url":"u","created_at":"2011-01-25T18:44:36Z","public_repos":8,"followers":3938,"following":9}"#;

/// Answer one request with `status` and `body`; returns the users base URL.
pub fn serve_once(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) if line == "\r\n" || line == "\n" => break,
                Ok(_) => continue,
                Err(_) => return,
            }
        }
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{addr}/users")
}

/// Write a config.toml pointing the client at `base_url`.
pub fn write_config(dir: &Path, base_url: &str) {
    let content = format!(
        "[api]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n\n[theme]\nsystem_hint = \"light\"\n"
    );
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

/// Run `octoscope` with its state directory pointed at `dir`.
pub fn octoscope(dir: &Path, args: &[&str]) -> Output {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_octoscope")))
        .env("OCTOSCOPE_DIR", dir)
        .env_remove("COLORFGBG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run octoscope")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
