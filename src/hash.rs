//! Content digests backing the `[hash]` template placeholder.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    Hex,
    Base64,
}

impl DigestEncoding {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hex" => Some(DigestEncoding::Hex),
            "base64" => Some(DigestEncoding::Base64),
            _ => None,
        }
    }
}

/// SHA-256 digest of a module's source content, renderable in either
/// encoding at any truncation length.
#[derive(Debug, Clone)]
pub struct ContentDigest {
    raw: Vec<u8>,
}

impl ContentDigest {
    pub fn of(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self {
            raw: hasher.finalize().to_vec(),
        }
    }

    pub fn encoded(&self, encoding: DigestEncoding) -> String {
        match encoding {
            DigestEncoding::Hex => {
                let mut out = String::with_capacity(self.raw.len() * 2);
                for byte in &self.raw {
                    out.push_str(&format!("{:02x}", byte));
                }
                out
            }
            // URL-safe alphabet keeps the digest free of `+` and `/`, which
            // are not valid in CSS idents.
            DigestEncoding::Base64 => URL_SAFE_NO_PAD.encode(&self.raw),
        }
    }

    /// Truncated rendering. A digest that starts with an ASCII digit gets a
    /// `_` prefix so the result stays a valid CSS ident start.
    pub fn rendered(&self, encoding: DigestEncoding, length: usize) -> String {
        let encoded = self.encoded(encoding);
        let len = encoded.len().min(length.max(1));
        let slice = &encoded[..len];
        if slice.as_bytes()[0].is_ascii_digit() {
            format!("_{slice}")
        } else {
            slice.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = ContentDigest::of(b".btn { color: red }");
        let b = ContentDigest::of(b".btn { color: red }");
        assert_eq!(
            a.encoded(DigestEncoding::Base64),
            b.encoded(DigestEncoding::Base64)
        );
        assert_ne!(
            a.encoded(DigestEncoding::Hex),
            ContentDigest::of(b"other").encoded(DigestEncoding::Hex)
        );
    }

    #[test]
    fn test_rendered_truncates_and_guards_digit_start() {
        let digest = ContentDigest::of(b"content");
        let rendered = digest.rendered(DigestEncoding::Hex, 6);
        let body = rendered.strip_prefix('_').unwrap_or(&rendered);
        assert_eq!(body.len(), 6);
        assert!(!rendered.as_bytes()[0].is_ascii_digit());
    }
}
