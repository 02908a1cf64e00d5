//! Blocking `tiny_http` loop. One request is handled at a time.

use std::io::Read;

use crate::error::{ApiError, ErrorKind};
use crate::handler::{HttpResponse, handle};
use crate::request::HttpRequest;
use crate::state::AdminState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

/// Bind the configured address and serve until the process exits.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address cannot be bound.
pub fn serve(state: &AdminState) -> Result<(), ServerError> {
    let addr = state.config.server.addr();
    let server = tiny_http::Server::http(&addr).map_err(|e| ServerError::Bind {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;
    tracing::info!(%addr, root = %state.config.site.root, "admin API listening");
    if state.auth.is_none() {
        tracing::warn!("admin auth is not configured; protected routes will fail");
    }

    for request in server.incoming_requests() {
        respond(state, request);
    }
    Ok(())
}

/// Read, handle, and answer a single request.
pub fn respond(state: &AdminState, mut request: tiny_http::Request) {
    let started = std::time::Instant::now();
    let method = request.method().to_string();
    let target = request.url().to_string();

    let response = match read_request(&mut request, state.config.server.max_body_bytes) {
        Ok(http) => handle(state, &http),
        Err(error) => HttpResponse::error(&error),
    };

    tracing::info!(
        %method,
        path = %target.split('?').next().unwrap_or_default(),
        status = response.status,
        elapsed_ms = started.elapsed().as_millis(),
        "handled request"
    );

    let mut reply = tiny_http::Response::from_string(response.body)
        .with_status_code(response.status);
    if let Ok(header) =
        tiny_http::Header::from_bytes("Content-Type", "application/json; charset=utf-8")
    {
        reply = reply.with_header(header);
    }
    if let Err(error) = request.respond(reply) {
        tracing::warn!(%error, "failed to write response");
    }
}

fn read_request(request: &mut tiny_http::Request, max_body: usize) -> Result<HttpRequest, ApiError> {
    let authorization = request
        .headers()
        .iter()
        .find(|header| header.field.equiv("Authorization"))
        .map(|header| header.value.as_str().to_string());

    let too_large = || {
        ApiError::new(ErrorKind::PayloadTooLarge, "Request body too large")
            .with_details(format!("limit is {max_body} bytes"))
    };
    if request.body_length().is_some_and(|len| len > max_body) {
        return Err(too_large());
    }

    let mut body = Vec::new();
    let limit = u64::try_from(max_body).unwrap_or(u64::MAX).saturating_add(1);
    request
        .as_reader()
        .take(limit)
        .read_to_end(&mut body)
        .map_err(|e| {
            ApiError::new(ErrorKind::Io, "Failed to read request body").with_details(e.to_string())
        })?;
    if body.len() > max_body {
        return Err(too_large());
    }

    let mut http = HttpRequest::new(&request.method().to_string(), request.url()).with_body(body);
    http.authorization = authorization;
    Ok(http)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::TcpStream;

    use lex_config::LexConfig;

    use super::*;

    fn roundtrip(raw_request: String, max_body_bytes: usize) -> String {
        let mut config = LexConfig::default();
        config.server.max_body_bytes = max_body_bytes;
        let state = AdminState::new(config);

        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        let port = server.server_addr().to_ip().expect("ip addr").port();

        let client = std::thread::spawn(move || {
            let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connect");
            stream.write_all(raw_request.as_bytes()).expect("write");
            let mut response = String::new();
            stream.read_to_string(&mut response).expect("read");
            response
        });

        let request = server.recv().expect("recv");
        respond(&state, request);
        drop(server);
        client.join().expect("client thread")
    }

    #[test]
    fn serves_health_over_http() {
        let response = roundtrip(
            "GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n".into(),
            1024,
        );
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("application/json"));
        assert!(response.contains("\"status\":\"ok\""));
    }

    #[test]
    fn oversized_body_is_413() {
        let body = "x".repeat(64);
        let response = roundtrip(
            format!(
                "POST /api/admin/login HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{body}",
                body.len()
            ),
            16,
        );
        assert!(response.starts_with("HTTP/1.1 413"), "{response}");
    }
}
