//! Data URL encoding for recipe images.
//!
//! Images are stored inline in the recipe as `data:<mime>;base64,<payload>`,
//! the same form the browser's `FileReader::readAsDataURL` produces.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME type guessed from a file extension.
///
/// Unknown extensions fall back to `application/octet-stream`, which is what
/// browsers report for files they cannot classify.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a base64 data URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type and approximate decoded size of a base64 data URL.
///
/// Returns `None` when `url` is not a base64 data URL.
pub fn describe(url: &str) -> Option<(&str, usize)> {
    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
    let size = (payload.len() / 4 * 3).saturating_sub(padding);
    Some((mime, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("cake.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("dir/soup.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("soup.jpg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn test_data_url_embeds_mime() {
        let url = to_data_url("image/gif", b"GIF89a");
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_describe_reports_size() {
        let url = to_data_url("image/png", &[0u8; 10]);
        assert_eq!(describe(&url), Some(("image/png", 10)));
        assert_eq!(describe("https://example.com/cake.png"), None);
    }
}
