//! Ordered decoder strategies for stored drafts.
//!
//! Each strategy recognises one storage format that has ever been written.
//! The chain is tried front to back; a new format goes at the front and
//! existing entries are never removed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::compression::Compressor;
use super::StoredBlob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// base64 → inflate → UTF-8 → JSON
    Compressed,
    /// JSON written without compression
    PlainJson,
    /// Bare content from before history was stored
    LegacyText,
}

impl DecodeStrategy {
    /// The decode chain, in the order it is attempted.
    pub const CHAIN: [DecodeStrategy; 3] = [
        DecodeStrategy::Compressed,
        DecodeStrategy::PlainJson,
        DecodeStrategy::LegacyText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecodeStrategy::Compressed => "compressed",
            DecodeStrategy::PlainJson => "plain-json",
            DecodeStrategy::LegacyText => "legacy-text",
        }
    }

    /// Try to interpret `stored` in this strategy's format
    pub fn decode(self, stored: &str, compressor: &dyn Compressor) -> Option<StoredBlob> {
        match self {
            DecodeStrategy::Compressed => decode_compressed(stored, compressor),
            DecodeStrategy::PlainJson => decode_plain(stored),
            DecodeStrategy::LegacyText => decode_legacy(stored),
        }
    }
}

fn decode_compressed(stored: &str, compressor: &dyn Compressor) -> Option<StoredBlob> {
    let packed = STANDARD.decode(stored.trim()).ok()?;
    let inflated = compressor.decompress(&packed).ok()?;
    let text = String::from_utf8(inflated).ok()?;
    serde_json::from_str(&text).ok()
}

fn decode_plain(stored: &str) -> Option<StoredBlob> {
    serde_json::from_str(stored).ok()
}

fn decode_legacy(stored: &str) -> Option<StoredBlob> {
    if stored.is_empty() || !looks_like_text(stored) {
        return None;
    }
    Some(StoredBlob::from_content(stored))
}

// Binary garbage carries C0 control bytes that typed text does not. Tab,
// newline, carriage return, form feed and escape are allowed; NUL and the
// remaining U+0000..=U+001F are not. DEL, C1 controls and U+FFFD pass.
fn looks_like_text(s: &str) -> bool {
    !s.chars().any(|c| {
        c <= '\u{1f}' && !matches!(c, '\t' | '\n' | '\r' | '\u{c}' | '\u{1b}')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::compression::ZlibCompressor;

    fn blob(content: &str) -> StoredBlob {
        StoredBlob {
            content: content.to_string(),
            history: vec!["".to_string(), content.to_string()],
            history_index: 1,
        }
    }

    fn compressed(json: &str) -> String {
        let packed = ZlibCompressor::new().compress(json.as_bytes()).unwrap();
        STANDARD.encode(packed)
    }

    #[test]
    fn test_compressed_accepts_encoded_json() {
        let json = serde_json::to_string(&blob("hi")).unwrap();
        let decoded = DecodeStrategy::Compressed.decode(&compressed(&json), &ZlibCompressor::new());
        assert_eq!(decoded, Some(blob("hi")));
    }

    #[test]
    fn test_compressed_rejects_plain_json() {
        let json = serde_json::to_string(&blob("hi")).unwrap();
        assert!(DecodeStrategy::Compressed
            .decode(&json, &ZlibCompressor::new())
            .is_none());
    }

    #[test]
    fn test_compressed_requires_content_field() {
        let stored = compressed(r#"{"history":["a"],"historyIndex":0}"#);
        assert!(DecodeStrategy::Compressed
            .decode(&stored, &ZlibCompressor::new())
            .is_none());
    }

    #[test]
    fn test_compressed_rejects_valid_base64_of_garbage() {
        let stored = STANDARD.encode(b"not deflated at all");
        assert!(DecodeStrategy::Compressed
            .decode(&stored, &ZlibCompressor::new())
            .is_none());
    }

    #[test]
    fn test_plain_json_accepts_content_only() {
        let decoded = DecodeStrategy::PlainJson
            .decode(r#"{"content":"old"}"#, &ZlibCompressor::new())
            .unwrap();
        assert_eq!(decoded.content, "old");
        assert!(decoded.history.is_empty());
        assert_eq!(decoded.history_index, 0);
    }

    #[test]
    fn test_plain_json_rejects_text() {
        assert!(DecodeStrategy::PlainJson
            .decode("hello world", &ZlibCompressor::new())
            .is_none());
    }

    #[test]
    fn test_legacy_wraps_text() {
        let decoded = DecodeStrategy::LegacyText
            .decode("hello\nworld", &ZlibCompressor::new())
            .unwrap();
        assert_eq!(decoded, StoredBlob::from_content("hello\nworld"));
    }

    #[test]
    fn test_legacy_rejects_empty_and_binary() {
        let compressor = ZlibCompressor::new();
        assert!(DecodeStrategy::LegacyText.decode("", &compressor).is_none());
        assert!(DecodeStrategy::LegacyText
            .decode("ab\u{0}cd", &compressor)
            .is_none());
        assert!(DecodeStrategy::LegacyText
            .decode("ab\u{7}cd", &compressor)
            .is_none());
    }

    #[test]
    fn test_legacy_accepts_page_breaks_and_escapes() {
        let compressor = ZlibCompressor::new();
        for text in [
            "page one\u{c}page two",
            "\u{1b}[1mbold\u{1b}[0m",
            "mangled \u{FFFD} byte",
            "tab\tand\r\nnewline",
        ] {
            assert_eq!(
                DecodeStrategy::LegacyText.decode(text, &compressor),
                Some(StoredBlob::from_content(text))
            );
        }
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(
            DecodeStrategy::CHAIN.map(DecodeStrategy::name),
            ["compressed", "plain-json", "legacy-text"]
        );
    }
}
