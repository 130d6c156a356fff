//! Static asset server
//!
//! Serves the files under a fixed root directory over HTTP/1.1.
//! Each request path is resolved against the root, the file's metadata is
//! looked up, and the contents are streamed back framed by `content-length`.
//! Missing files answer 404, any other filesystem failure answers 500.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
