//! Static file serving module
//!
//! Resolves a request path under the asset root, looks up the file's
//! metadata, and streams it back. Failures collapse into two kinds:
//! not found (404) and everything else (500).

use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs::{self, File};

use crate::config::AssetsConfig;
use crate::error::LookupError;
use crate::handler::resolve::ResolvedPath;
use crate::http::{self, mime, RespBody};
use crate::logger;

/// A file ready to be streamed
#[derive(Debug)]
pub struct OpenedAsset {
    pub file: File,
    /// Byte size observed by the metadata lookup
    pub size: u64,
    pub content_type: Option<&'static str>,
}

/// Serves files from a fixed root directory
#[derive(Debug, Clone)]
pub struct StaticResponder {
    assets: AssetsConfig,
}

impl StaticResponder {
    pub const fn new(assets: AssetsConfig) -> Self {
        Self { assets }
    }

    /// Answer a request for `pathname`
    pub async fn respond(&self, pathname: &str) -> Response<RespBody> {
        let resolved = ResolvedPath::new(pathname, &self.assets);

        match self.open(&resolved).await {
            Ok(asset) => http::build_file_response(asset.file, asset.size, asset.content_type),
            Err(e) => {
                // File not found is common (404), no need to log it
                if !e.is_not_found() {
                    logger::log_error(&format!(
                        "Failed to serve '{}' from '{}': {e}",
                        resolved.pathname,
                        resolved.resolved_file_path.display()
                    ));
                }
                http::build_empty_response(e.status())
            }
        }
    }

    /// Look up and open the file a resolved path points to
    pub async fn open(&self, resolved: &ResolvedPath) -> Result<OpenedAsset, LookupError> {
        if self.assets.block_traversal && resolved.escapes_root() {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {}",
                resolved.pathname
            ));
            return Err(LookupError::NotFound);
        }

        let path = resolved.resolved_file_path.as_path();
        let size = file_size(path).await?;
        let file = File::open(path).await?;

        let content_type = if self.assets.detect_content_type {
            mime::content_type_for(path)
        } else {
            None
        };

        Ok(OpenedAsset {
            file,
            size,
            content_type,
        })
    }
}

/// Size of the regular file at `path`
async fn file_size(path: &Path) -> Result<u64, LookupError> {
    let metadata = fs::metadata(path).await?;
    if metadata.is_dir() {
        return Err(LookupError::Other(io::Error::other(format!(
            "'{}' is a directory",
            path.display()
        ))));
    }
    Ok(metadata.len())
}
