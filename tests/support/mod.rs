// ABOUTME: Test support utilities.
// ABOUTME: Runs a canned-response HTTP engine stub on a Unix socket.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;

/// A canned route: request path, response status, response body.
pub type Route = (String, u16, String);

/// A stub engine speaking just enough HTTP/1.1 for the client.
///
/// Each accepted connection carries one request. The stub matches the
/// request path against its routes and answers 404 for anything else,
/// which mirrors the engine's behavior for unknown containers.
pub struct StubEngine {
    pub socket_path: PathBuf,
    handle: tokio::task::JoinHandle<()>,
}

impl StubEngine {
    /// Serve `routes` on a fresh socket inside `dir`.
    pub fn start(dir: &Path, routes: Vec<Route>) -> std::io::Result<StubEngine> {
        let socket_path = dir.join("engine.sock");
        let listener = UnixListener::bind(&socket_path)?;

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    answer(stream, &routes).await;
                });
            }
        });

        Ok(StubEngine {
            socket_path,
            handle,
        })
    }
}

impl Drop for StubEngine {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn answer(mut stream: tokio::net::UnixStream, routes: &[Route]) {
    let mut buf = vec![0u8; 4096];
    let n = match stream.read(&mut buf).await {
        Ok(n) => n,
        Err(_) => return,
    };

    let request = String::from_utf8_lossy(&buf[..n]).to_string();
    let path = request.split_whitespace().nth(1).unwrap_or("");

    let (status, body) = routes
        .iter()
        .find(|(route, _, _)| route.as_str() == path)
        .map(|(_, status, body)| (*status, body.clone()))
        .unwrap_or((404, String::new()));

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    };

    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
