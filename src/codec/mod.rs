//! Persistence codec for editor drafts
//!
//! A draft is stored as base64 of zlib-compressed JSON:
//!
//! ```text
//! {"content":"...","history":["...","..."],"historyIndex":1}
//! ```
//!
//! Decoding is format-sniffing. See [`DecodeStrategy`] for the chain.

mod compression;
mod strategy;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

pub use compression::{Compressor, ZlibCompressor, MAX_INFLATED_BYTES};
pub use strategy::DecodeStrategy;

/// Storage key the draft is written under
pub const DRAFT_KEY: &str = "editor-content";

/// The persisted subset of an editor snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBlob {
    pub content: String,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub history_index: usize,
}

impl StoredBlob {
    /// A blob with a single history entry
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            history: vec![content.clone()],
            content,
            history_index: 0,
        }
    }
}

/// Encodes and decodes [`StoredBlob`]s to storage strings.
#[derive(Debug, Clone, Default)]
pub struct PersistenceCodec<C: Compressor = ZlibCompressor> {
    compressor: C,
}

impl PersistenceCodec {
    pub fn new() -> Self {
        Self::with_compressor(ZlibCompressor::new())
    }
}

impl<C: Compressor> PersistenceCodec<C> {
    pub fn with_compressor(compressor: C) -> Self {
        Self { compressor }
    }

    /// Serialize, compress and base64 `blob`.
    ///
    /// Falls back to plain JSON if compression fails or the JSON is larger
    /// than the compressor will inflate, and to the bare content if
    /// serialization fails. Every fallback is readable by
    /// [`decode`](Self::decode).
    pub fn encode(&self, blob: &StoredBlob) -> String {
        let json = match serde_json::to_string(blob) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize draft, storing bare content: {}", e);
                return blob.content.clone();
            }
        };

        let limit = self.compressor.max_decompressed_len();
        if json.len() as u64 > limit {
            tracing::warn!(
                "Draft is {} bytes, over the {} byte inflate limit; storing uncompressed",
                json.len(),
                limit
            );
            return json;
        }

        match self.compressor.compress(json.as_bytes()) {
            Ok(packed) => STANDARD.encode(packed),
            Err(e) => {
                tracing::warn!(
                    "{} compression failed, storing uncompressed draft: {}",
                    self.compressor.name(),
                    e
                );
                json
            }
        }
    }

    /// Decode a stored string, or `None` if no strategy recognises it
    pub fn decode(&self, stored: &str) -> Option<StoredBlob> {
        for strategy in DecodeStrategy::CHAIN {
            if let Some(blob) = strategy.decode(stored, &self.compressor) {
                tracing::debug!("Decoded draft using {} strategy", strategy.name());
                return Some(blob);
            }
        }
        if !stored.is_empty() {
            tracing::warn!("Stored draft is unreadable ({} bytes), ignoring", stored.len());
        }
        None
    }

    /// Decode raw bytes; invalid UTF-8 is treated as unreadable
    pub fn decode_bytes(&self, bytes: &[u8]) -> Option<StoredBlob> {
        let stored = std::str::from_utf8(bytes).ok()?;
        self.decode(stored)
    }
}
