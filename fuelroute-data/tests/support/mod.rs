//! Minimal HTTP/1.1 stub standing in for an OSRM server.
//!
//! Each accepted connection receives the same scripted reply. Request lines are
//! recorded so tests can check the path the provider asked for.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the stub sends back.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with a JSON body and the given status.
    Json {
        /// HTTP status code.
        status: u16,
        /// Response body, sent with `Content-Type: application/json`.
        body: String,
    },
    /// Accept the connection and never answer.
    Silent,
}

impl Reply {
    /// A `200 OK` reply carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Json {
            status: 200,
            body: body.into(),
        }
    }

    /// A reply with an arbitrary status.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Json {
            status,
            body: body.into(),
        }
    }
}

/// Handle to a running stub server.
#[derive(Debug, Clone)]
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Bind to an ephemeral local port and serve `reply` on the current
    /// runtime.
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let address = listener.local_addr().expect("stub address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let reply = reply.clone();
                let recorded = Arc::clone(&recorded);
                tokio::spawn(serve(stream, reply, recorded));
            }
        });

        Self {
            base_url: format!("http://{address}"),
            requests,
        }
    }

    /// Base URL to hand to the provider.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines received so far, e.g. `GET /route/v1/... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let address = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{address}")
}

async fn serve(mut stream: TcpStream, reply: Reply, recorded: Arc<Mutex<Vec<String>>>) {
    let mut received = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !received.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(read) => received.extend_from_slice(&chunk[..read]),
        }
    }

    let head = String::from_utf8_lossy(&received);
    if let Some(line) = head.lines().next() {
        recorded.lock().expect("request log").push(line.to_owned());
    }

    match reply {
        Reply::Json { status, body } => {
            let response = format!(
                "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                reason(status),
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        Reply::Silent => {
            // Hold the connection open until the client gives up.
            while matches!(stream.read(&mut chunk).await, Ok(read) if read > 0) {}
        }
    }
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A successful OSRM response with the reference two-point geometry.
pub fn reference_body() -> String {
    serde_json::json!({
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [[-67.1, -17.9], [-67.2, -18.0]],
            },
            "legs": [{
                "steps": [
                    { "name": "Avenida Tacna", "maneuver": { "type": "depart" } },
                    { "name": "", "maneuver": { "type": "arrive" } },
                ],
            }],
            "duration": 900.0,
            "distance": 15000.0,
        }],
    })
    .to_string()
}
