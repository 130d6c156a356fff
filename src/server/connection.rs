// Connection handling module
// Accepts a single TCP connection and serves it over HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection, enforcing the connection limit.
///
/// Returns `false` when the connection was rejected and dropped.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state, owns the active connection counter
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) -> bool {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return false;
        }
    }

    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state));
    true
}

/// Serve one connection on its own task.
///
/// When `performance.read_timeout` is non-zero it bounds how long the
/// client may take to send each request's headers, including the wait for
/// the next request on a kept-alive connection. Response bodies are never
/// cut short by it. The active connection counter is decremented when the
/// task finishes, however it finishes.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let performance = &state.config.performance;

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive);
        if performance.read_timeout > 0 {
            builder
                .timer(TokioTimer::new())
                .header_read_timeout(Duration::from_secs(performance.read_timeout));
        }

        let service_state = Arc::clone(&state);
        let result = builder
            .serve_connection(
                io,
                service_fn(move |req| {
                    handler::handle_request(req, Arc::clone(&service_state), peer_addr)
                }),
            )
            .await;

        match result {
            Ok(()) => {}
            Err(err) if err.is_timeout() => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} closed: no request headers within {} seconds",
                    performance.read_timeout
                ));
            }
            Err(err) => logger::log_connection_error(&err),
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}
