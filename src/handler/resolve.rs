//! Request path resolution
//!
//! Turns a request pathname into the candidate file path under the asset
//! root. Resolution is computed fresh for every request.

use std::path::PathBuf;

use crate::config::AssetsConfig;

/// A request pathname and the file it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Pathname after default-document substitution, always starts with `/`
    pub pathname: String,
    /// Root directory concatenated with `pathname`
    pub resolved_file_path: PathBuf,
}

impl ResolvedPath {
    /// Resolve `pathname` against the configured root
    ///
    /// `/` is rewritten to `/<default_document>`. Nothing else is rewritten:
    /// the pathname is appended to the root verbatim.
    pub fn new(pathname: &str, assets: &AssetsConfig) -> Self {
        let pathname = if pathname == "/" {
            format!("/{}", assets.default_document.trim_start_matches('/'))
        } else if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };

        let resolved_file_path = PathBuf::from(format!("{}{pathname}", assets.root));

        Self {
            pathname,
            resolved_file_path,
        }
    }

    /// Whether the pathname's `..` segments climb above the root
    pub fn escapes_root(&self) -> bool {
        let mut depth: usize = 0;
        for segment in self.pathname.split('/') {
            match segment {
                "" | "." => {}
                ".." => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return true,
                },
                _ => depth += 1,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> AssetsConfig {
        AssetsConfig::new("./public")
    }

    #[test]
    fn test_root_uses_default_document() {
        let resolved = ResolvedPath::new("/", &assets());
        assert_eq!(resolved.pathname, "/index.html");
        assert_eq!(
            resolved.resolved_file_path,
            PathBuf::from("./public/index.html")
        );
        assert_eq!(resolved, ResolvedPath::new("/index.html", &assets()));
    }

    #[test]
    fn test_custom_default_document() {
        let mut assets = assets();
        assets.default_document = "home.htm".to_string();
        let resolved = ResolvedPath::new("/", &assets);
        assert_eq!(resolved.pathname, "/home.htm");
    }

    #[test]
    fn test_nested_path_is_appended_verbatim() {
        let resolved = ResolvedPath::new("/islands/Canvas.js", &assets());
        assert_eq!(
            resolved.resolved_file_path,
            PathBuf::from("./public/islands/Canvas.js")
        );

        // only the exact root path is rewritten
        let resolved = ResolvedPath::new("/islands/", &assets());
        assert_eq!(resolved.pathname, "/islands/");
    }

    #[test]
    fn test_escapes_root() {
        let escapes = |p: &str| ResolvedPath::new(p, &assets()).escapes_root();
        assert!(escapes("/../secret.txt"));
        assert!(escapes("/a/../../etc/passwd"));
        assert!(escapes("/./.."));
        assert!(!escapes("/a/../b.css"));
        assert!(!escapes("/a/b/../../index.html"));
        assert!(!escapes("/..hidden/file"));
        assert!(!escapes("/"));
    }
}
