//! `VizServer` — serves the canvas page and the JSON API over HTTP/1.1.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tiny_http::{Header, Request, Response, Server};
use tracing::{debug, info, warn};

use crate::router::{Reply, Router, SharedModel};
use crate::{ServerError, ServerResult};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8521";
pub const DEFAULT_TITLE: &str = "Schelling Segregation Model with Social Influencers";

/// Listening address and page layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port` to bind.  Port 0 picks a free port.
    pub addr:          String,
    pub title:         String,
    /// Canvas size in pixels.
    pub canvas_width:  u32,
    pub canvas_height: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr:          DEFAULT_ADDR.to_string(),
            title:         DEFAULT_TITLE.to_string(),
            canvas_width:  500,
            canvas_height: 500,
        }
    }
}

/// A bound visualization server.
///
/// Requests are handled one at a time on the calling thread; the model lock
/// is held only while a request touches it.
pub struct VizServer {
    http:   Server,
    router: Router,
}

impl VizServer {
    /// Bind `config.addr`.  A port conflict surfaces as [`ServerError::Bind`].
    pub fn bind(config: ServerConfig, model: SharedModel) -> ServerResult<Self> {
        let http = Server::http(config.addr.as_str()).map_err(|e| ServerError::Bind {
            addr:   config.addr.clone(),
            reason: e.to_string(),
        })?;
        let server = Self { http, router: Router::new(config, model) };
        info!(addr = ?server.local_addr(), "visualization server listening");
        Ok(server)
    }

    /// The bound socket address, if listening on IP.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Serve until the listener fails.
    pub fn serve_forever(&self) -> ServerResult<()> {
        loop {
            let request = self.http.recv()?;
            self.respond(request);
        }
    }

    /// Serve exactly `n` requests, then return.
    pub fn serve_requests(&self, n: usize) -> ServerResult<()> {
        for _ in 0..n {
            let request = self.http.recv()?;
            self.respond(request);
        }
        Ok(())
    }

    fn respond(&self, request: Request) {
        let reply = self.router.handle(request.method(), request.url());
        debug!(method = %request.method(), url = request.url(), status = reply.status, "request");
        if let Err(e) = request.respond(into_response(reply)) {
            warn!(error = %e, "failed to send response");
        }
    }
}

fn into_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let response = Response::from_string(reply.body).with_status_code(reply.status);
    match Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
