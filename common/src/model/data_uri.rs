//! Displayable `data:` URIs for staged image previews.
//!
//! The preview is what an `<img src=...>` consumes directly: the raw file
//! bytes, base64-encoded, prefixed with their media type. No decoding or
//! re-encoding of the image itself happens here.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};

/// Media type used when neither the browser nor the file name tells us one.
/// Matches what `FileReader.readAsDataURL` emits for untyped blobs.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    uri: String,
}

impl DataUri {
    /// Wraps `bytes` as a base64 data URI of type `mime`.
    ///
    /// An empty `mime` is replaced by [`FALLBACK_MIME`]. Empty input still
    /// produces a valid URI with an empty payload.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let mime = if mime.trim().is_empty() {
            FALLBACK_MIME
        } else {
            mime.trim()
        };
        let payload = general_purpose::STANDARD.encode(bytes);
        Self {
            uri: format!("data:{};base64,{}", mime, payload),
        }
    }

    /// Picks the media type for a selected file.
    ///
    /// The type reported by the browser wins. Files the browser could not
    /// classify report an empty type, in which case the extension of
    /// `file_name` is consulted before giving up with [`FALLBACK_MIME`].
    pub fn resolve_mime(reported: &str, file_name: &str) -> String {
        if !reported.trim().is_empty() {
            return reported.trim().to_string();
        }
        mime_guess::from_path(file_name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string()
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_png_bytes() {
        let uri = DataUri::encode("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(uri.as_str(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_encode_empty_mime_uses_fallback() {
        let uri = DataUri::encode("", b"hi");
        assert_eq!(uri.as_str(), "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn test_encode_empty_file() {
        let uri = DataUri::encode("image/gif", &[]);
        assert_eq!(uri.as_str(), "data:image/gif;base64,");
    }

    #[test]
    fn test_encode_trims_mime() {
        let uri = DataUri::encode(" image/png ", b"x");
        assert_eq!(uri.as_str(), "data:image/png;base64,eA==");
    }

    #[test]
    fn test_resolve_mime_prefers_reported_type() {
        assert_eq!(DataUri::resolve_mime("image/webp", "photo.png"), "image/webp");
    }

    #[test]
    fn test_resolve_mime_guesses_from_extension() {
        assert_eq!(DataUri::resolve_mime("", "holiday.JPG"), "image/jpeg");
        assert_eq!(DataUri::resolve_mime("  ", "scan.png"), "image/png");
    }

    #[test]
    fn test_resolve_mime_unknown_extension() {
        assert_eq!(DataUri::resolve_mime("", "blob"), FALLBACK_MIME);
        assert_eq!(DataUri::resolve_mime("", "notes.zzzunknown"), FALLBACK_MIME);
    }

    #[test]
    fn test_display_matches_as_str() {
        let uri = DataUri::encode("image/png", b"x");
        assert_eq!(uri.to_string(), uri.as_str());
    }
}
