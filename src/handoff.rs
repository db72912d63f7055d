//! Handoff to the external re-encode tool.
//!
//! Re-encoding is done by a separate tool with its own web UI; our only job
//! is to format the URL that opens the file there. Fire-and-forget: nothing
//! here depends on a response.

use std::path::Path;

/// Build the URL that opens `path` in the external re-encode tool.
///
/// The endpoint comes from configuration and is used as-is apart from
/// trailing-slash trimming; the file path is percent-encoded as a query
/// value.
pub fn reencode_url(endpoint: &str, path: &Path) -> String {
    format!(
        "{}/?source={}",
        endpoint.trim_end_matches('/'),
        urlencoded(&path.display().to_string())
    )
}

/// Minimal percent-encoding for query parameter values.
fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0f) as usize]));
            }
        }
    }
    out
}

const HEX: [u8; 16] = *b"0123456789ABCDEF";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reencode_url() {
        assert_eq!(
            reencode_url("http://localhost:8080", Path::new("/movies/Dune.mkv")),
            "http://localhost:8080/?source=/movies/Dune.mkv"
        );
    }

    #[test]
    fn test_reencode_url_trims_trailing_slash() {
        assert_eq!(
            reencode_url("http://localhost:8080/", Path::new("/movies/Dune.mkv")),
            "http://localhost:8080/?source=/movies/Dune.mkv"
        );
    }

    #[test]
    fn test_path_is_percent_encoded() {
        assert_eq!(
            reencode_url(
                "http://localhost:8080",
                Path::new("/movies/Old Movie (1995).avi")
            ),
            "http://localhost:8080/?source=/movies/Old%20Movie%20%281995%29.avi"
        );
    }
}
