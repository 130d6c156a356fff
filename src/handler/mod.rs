//! Request handler module
//!
//! Resolves request paths under the asset root and serves the files found
//! there.

pub mod request;
pub mod resolve;
pub mod static_files;

// Re-export main entry point
pub use request::handle_request;
pub use resolve::ResolvedPath;
pub use static_files::StaticResponder;
