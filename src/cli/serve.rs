//! Serve command: the dashboard page over HTTP.
//!
//! Routes:
//! - `GET /` the HTML page
//! - `GET /api/dashboard` the JSON envelope
//! - `GET /healthz` plain `ok`
//!
//! Unknown paths get 404 and other methods 405. Every request rebuilds the
//! dashboard from the shared configuration.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{ALLOW, CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::cli::args::ServeArgs;
use crate::cli::dashboard_options;
use crate::core::dashboard::{DashboardOptions, build_dashboard};
use crate::core::models::RobotOutput;
use crate::core::provider::StaticDataProvider;
use crate::error::{DashboardError, Result};
use crate::render::html::render_page;
use crate::render::robot::render_json;
use crate::storage::config::{Config, ResolvedConfig};

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// Read-only state shared by every connection.
#[derive(Debug, Clone)]
pub struct ServerState {
    config: Config,
    options: DashboardOptions,
    pretty: bool,
}

impl ServerState {
    #[must_use]
    pub const fn new(config: Config, options: DashboardOptions, pretty: bool) -> Self {
        Self {
            config,
            options,
            pretty,
        }
    }

    /// Answer one request.
    #[must_use]
    pub fn respond(&self, method: &Method, path: &str) -> Response<Full<Bytes>> {
        if method != Method::GET {
            let mut response = plain(StatusCode::METHOD_NOT_ALLOWED, "method not allowed\n");
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET"));
            return response;
        }

        match path {
            "/" => {
                let dashboard = self.dashboard();
                match render_page(&dashboard) {
                    Ok(body) => respond_with(StatusCode::OK, HTML, body),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to render dashboard page");
                        plain(StatusCode::INTERNAL_SERVER_ERROR, "internal error\n")
                    }
                }
            }
            "/api/dashboard" => {
                let envelope = RobotOutput::dashboard(self.dashboard()).runtime("server");
                match render_json(&envelope, self.pretty) {
                    Ok(body) => respond_with(StatusCode::OK, JSON, body),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to serialize dashboard");
                        plain(StatusCode::INTERNAL_SERVER_ERROR, "internal error\n")
                    }
                }
            }
            "/healthz" => plain(StatusCode::OK, "ok"),
            _ => plain(StatusCode::NOT_FOUND, "not found\n"),
        }
    }

    fn dashboard(&self) -> crate::core::models::Dashboard {
        let provider = StaticDataProvider::from_config(&self.config);
        build_dashboard(&provider, &self.options)
    }
}

fn respond_with(
    status: StatusCode,
    content_type: &'static str,
    body: String,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn plain(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    respond_with(status, TEXT, body.to_string())
}

async fn handle(
    state: Arc<ServerState>,
    request: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    let response = state.respond(request.method(), request.uri().path());
    tracing::info!(
        method = %request.method(),
        path = request.uri().path(),
        status = response.status().as_u16(),
        "Handled request"
    );
    Ok(response)
}

/// Bind the listening socket.
///
/// # Errors
///
/// Returns [`DashboardError::Bind`] when the address is unavailable.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let addr = format!("{host}:{port}");
    TcpListener::bind(&addr)
        .await
        .map_err(|source| DashboardError::Bind { addr, source })
}

/// Accept connections until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    state: Arc<ServerState>,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        let state = Arc::clone(&state);
                        tokio::task::spawn(async move {
                            let io = TokioIo::new(stream);
                            let service =
                                service_fn(move |request| handle(Arc::clone(&state), request));
                            if let Err(err) =
                                http1::Builder::new().serve_connection(io, service).await
                            {
                                tracing::debug!(
                                    %peer,
                                    error = %err,
                                    "Connection closed with error"
                                );
                            }
                        });
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Failed to accept connection");
                    }
                }
            }
            () = &mut shutdown => {
                tracing::info!("Dashboard server stopped listening");
                break;
            }
        }
    }

    Ok(())
}

/// Execute the serve command.
pub async fn execute(args: &ServeArgs, resolved: &ResolvedConfig) -> Result<()> {
    let options = dashboard_options(&args.page)?;
    let state = Arc::new(ServerState::new(
        resolved.config.clone(),
        options,
        resolved.pretty,
    ));

    let listener = bind(&resolved.host, resolved.port).await?;
    let local: SocketAddr = listener.local_addr()?;
    tracing::info!(%local, "Dashboard server listening");
    println!("Serving dashboard at http://{local}/ (Ctrl+C to stop)");

    run(listener, state, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn state() -> ServerState {
        ServerState::new(Config::default(), DashboardOptions::default(), false)
    }

    async fn body_of(response: Response<Full<Bytes>>) -> String {
        use http_body_util::BodyExt;
        let collected = response.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_serves_html() {
        let response = state().respond(&Method::GET, "/");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], HTML);
        let body = body_of(response).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("字元額度總覽"));
    }

    #[tokio::test]
    async fn api_serves_envelope() {
        let response = state().respond(&Method::GET, "/api/dashboard");
        assert_eq!(response.headers()[CONTENT_TYPE], JSON);
        let value: serde_json::Value = serde_json::from_str(&body_of(response).await).unwrap();
        assert_eq!(value["meta"]["runtime"], "server");
        assert_eq!(value["data"]["cards"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn healthz_and_not_found() {
        let s = state();
        assert_eq!(body_of(s.respond(&Method::GET, "/healthz")).await, "ok");
        assert_eq!(
            s.respond(&Method::GET, "/nope").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn non_get_is_rejected() {
        let response = state().respond(&Method::POST, "/");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET");
    }

    #[tokio::test]
    async fn serves_over_tcp_until_shutdown() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(run(listener, Arc::new(state()), async {
            let _ = rx.await;
        }));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.ends_with("ok"));

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let first = bind("127.0.0.1", 0).await.unwrap();
        let port = first.local_addr().unwrap().port();
        let err = bind("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, DashboardError::Bind { .. }));
        assert_eq!(err.error_code(), "CHB-S001");
    }
}
