//! Fake agent serving canned JSON over a Unix socket.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct FakeAgentServer {
    _dir: TempDir,
    socket: PathBuf,
}

impl FakeAgentServer {
    /// Serve `routes` (request path to JSON body) until the test process exits.
    pub fn start(routes: &[(&str, serde_json::Value)]) -> Self {
        let routes: HashMap<String, String> =
            routes.iter().map(|(path, body)| (path.to_string(), body.to_string())).collect();
        let dir = TempDir::new().unwrap();
        let socket = dir.path().join("agent.sock");
        let listener = UnixListener::bind(&socket).unwrap();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { return };
                let mut reader = BufReader::new(stream);
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if line == "\r\n" => break,
                        Ok(_) => {}
                    }
                }
                let path = request_line.split_whitespace().nth(1).unwrap_or_default();
                let response = match routes.get(path) {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                        body.len(),
                        body
                    ),
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string(),
                };
                let _ = reader.get_mut().write_all(response.as_bytes());
            }
        });
        Self { _dir: dir, socket }
    }

    /// A healthy agent with the given state and endpoints.
    pub fn with_state(state: &str, endpoints: serde_json::Value) -> Self {
        Self::start(&[
            ("/v1/config", serde_json::json!({ "spec": { "options": { "Debug": "Disabled" } } })),
            ("/v1/healthz", serde_json::json!({ "cilium": { "state": state } })),
            ("/v1/endpoint", endpoints),
        ])
    }

    pub fn socket(&self) -> &Path {
        &self.socket
    }
}
