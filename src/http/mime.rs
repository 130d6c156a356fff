//! MIME type detection module
//!
//! Maps a served file's extension to a `Content-Type` value.

use std::path::Path;

/// Get the MIME `Content-Type` for a file path
///
/// Unknown or missing extensions yield `None` and the response carries no
/// `Content-Type` header.
///
/// # Examples
/// ```
/// use asset_server::http::mime::content_type_for;
/// use std::path::Path;
/// assert_eq!(content_type_for(Path::new("public/index.html")), Some("text/html; charset=utf-8"));
/// assert_eq!(content_type_for(Path::new("public/canvas_bg.wasm")), Some("application/wasm"));
/// assert_eq!(content_type_for(Path::new("public/LICENSE")), None);
/// ```
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let content_type = match extension.as_str() {
        // Documents and styles
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "txt" | "md" => "text/plain; charset=utf-8",
        "xml" => "application/xml",

        // Scripts and modules
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Media
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",

        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(content_type)
}
