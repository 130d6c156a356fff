//! HTTP protocol layer module
//!
//! Response bodies, response builders and MIME detection, kept apart from
//! the path resolution logic in `handler`.

pub mod body;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use body::RespBody;
pub use response::{build_empty_response, build_file_response};
