use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Map a request path onto a file under `root`.
///
/// Percent-escapes are decoded; `..` segments are rejected. Directory
/// requests resolve to their `index.html`.
pub(super) fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode(request_path)?;
    let mut path = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => path.push(s),
        }
    }
    if decoded.ends_with('/') || path == root || path.is_dir() {
        path.push("index.html");
    }
    Some(path)
}

/// Decode `%XX` escapes. Invalid escapes or non-UTF-8 results yield `None`.
pub(super) fn percent_decode(s: &str) -> Option<String> {
    // percent_decode_str passes malformed escapes through verbatim.
    let bytes = s.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%' || bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }
    percent_decode_str(s).decode_utf8().ok().map(|decoded| decoded.into_owned())
}

pub(super) fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "wasm" => "application/wasm",
        "svg" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "woff" => "font/woff",
        "mp4" => "video/mp4",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_escapes() {
        assert_eq!(percent_decode("/img/Phil%C3%A9mon%20A.jpg").as_deref(), Some("/img/Philémon A.jpg"));
        assert_eq!(percent_decode("/a%2"), None);
        assert_eq!(percent_decode("/a%zz"), None);
        assert_eq!(percent_decode("/a%C3"), None);
    }

    #[test]
    fn signed_escapes_rejected() {
        assert_eq!(percent_decode("/a%+1b"), None);
        assert_eq!(percent_decode("/a%-1b"), None);
        assert_eq!(resolve_path(Path::new("/srv/site"), "/img/%+1.jpg"), None);
    }

    #[test]
    fn traversal_rejected() {
        let root = Path::new("/srv/site");
        assert_eq!(resolve_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_path(root, "/img/%2e%2e/%2e%2e/secret"), None);
    }

    #[test]
    fn maps_into_root() {
        let root = Path::new("/srv/site");
        assert_eq!(resolve_path(root, "/"), Some(root.join("index.html")));
        assert_eq!(
            resolve_path(root, "/data/projects.json"),
            Some(root.join("data").join("projects.json"))
        );
        assert_eq!(resolve_path(root, "/films/"), Some(root.join("films").join("index.html")));
    }

    #[test]
    fn types_by_extension() {
        assert_eq!(content_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type(Path::new("folio_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
    }
}
