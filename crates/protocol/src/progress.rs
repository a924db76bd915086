//! Sentinel-prefixed wire format for video-snapshot progress payloads.
//!
//! Tool invocations report progress over a channel typed as free text
//! ("Downloading...", "Extracting audio..."). The video-snapshot tool rides
//! that same channel with structured data: it serializes a
//! [`SnapshotProgress`] as JSON and prepends a fixed sentinel literal that
//! never occurs in natural status text. The chat client recognizes the
//! sentinel, decodes the payload, and renders the frame instead of the raw
//! string.
//!
//! Decoding is a best-effort recognizer, not a strict parser: every failure
//! mode (free text, truncated JSON, out-of-range fields) is reported
//! uniformly as absence. Encode and decode are pure functions with no I/O.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Sentinel
// ---------------------------------------------------------------------------

/// Literal prefix marking a progress message as an encoded
/// [`SnapshotProgress`] rather than human-readable status text.
///
/// Everything after the sentinel must be a single JSON object.
pub const SNAPSHOT_PROGRESS_SENTINEL: &str = "[[snapshot-progress]]";

/// True if the message begins with [`SNAPSHOT_PROGRESS_SENTINEL`].
///
/// Prefix check only; the payload may still fail to decode. Renderers use
/// this to suppress raw display of encoded payloads without paying for a
/// JSON parse.
pub fn is_snapshot_message(message: &str) -> bool {
    message.starts_with(SNAPSHOT_PROGRESS_SENTINEL)
}

// ---------------------------------------------------------------------------
// Wire type
// ---------------------------------------------------------------------------

/// One frame captured from a video, as reported mid-run by the
/// video-snapshot tool.
///
/// Exists only in transit: constructed by the tool at encode time,
/// reconstructed by the client at decode time, never persisted. Field names
/// serialize in camelCase to match the chat client's JSON.
///
/// A value is valid when `screenshot_base64` is non-empty, `at_seconds` is
/// finite and non-negative, and `total >= 1`. `index < total` is *not*
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SnapshotProgress {
    /// Base64-encoded image bytes of the captured frame.
    pub screenshot_base64: String,

    /// Offset into the source video, in seconds. Fractional offsets are
    /// legal.
    pub at_seconds: f64,

    /// Zero-based position of this snapshot within the batch.
    pub index: u32,

    /// Number of snapshots the batch will produce.
    pub total: u32,

    /// Origin URL of the video, when the tool knows it. Omitted from the
    /// JSON entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub source_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a progress message is not a usable snapshot payload.
///
/// [`SnapshotProgress::decode`] collapses all of these to `None`;
/// [`SnapshotProgress::try_decode`] surfaces them for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotPayloadError {
    #[error("progress message is empty")]
    Empty,

    #[error("progress message does not begin with the snapshot sentinel")]
    MissingSentinel,

    #[error("malformed JSON after the snapshot sentinel: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("invalid snapshot payload: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

impl SnapshotProgress {
    /// Check the wire invariants on this record.
    ///
    /// Producers call this before [`encode`](Self::encode); decoding applies
    /// it to every parsed payload so a caller never sees a half-valid
    /// record. `index` needs no check: the unsigned type already excludes
    /// negatives.
    pub fn validate(&self) -> Result<(), SnapshotPayloadError> {
        if self.screenshot_base64.is_empty() {
            return Err(SnapshotPayloadError::Invalid(
                "screenshotBase64 must be non-empty".to_string(),
            ));
        }
        if !self.at_seconds.is_finite() {
            return Err(SnapshotPayloadError::Invalid(format!(
                "atSeconds must be a finite number, got {}",
                self.at_seconds
            )));
        }
        if self.at_seconds < 0.0 {
            return Err(SnapshotPayloadError::Invalid(format!(
                "atSeconds must be >= 0, got {}",
                self.at_seconds
            )));
        }
        if self.total < 1 {
            return Err(SnapshotPayloadError::Invalid(
                "total must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Encode for the free-text progress channel: the sentinel followed by
    /// the JSON payload on one line.
    ///
    /// Always succeeds. The record is not validated here; feeding encode a
    /// record that violates the wire invariants produces a payload the
    /// decoder will reject.
    pub fn encode(&self) -> String {
        let mut payload = serde_json::json!({
            "screenshotBase64": self.screenshot_base64,
            "atSeconds": self.at_seconds,
            "index": self.index,
            "total": self.total,
        });
        if let Some(url) = &self.source_url {
            payload["sourceUrl"] = serde_json::Value::String(url.clone());
        }
        format!("{SNAPSHOT_PROGRESS_SENTINEL}{payload}")
    }

    /// Decode a progress message, reporting why it was rejected.
    ///
    /// Most callers want [`decode`](Self::decode); this variant exists for
    /// call sites that log rejected payloads (a message carrying the
    /// sentinel but failing to decode usually means truncation upstream).
    pub fn try_decode(message: &str) -> Result<Self, SnapshotPayloadError> {
        if message.is_empty() {
            return Err(SnapshotPayloadError::Empty);
        }
        let Some(json) = message.strip_prefix(SNAPSHOT_PROGRESS_SENTINEL) else {
            return Err(SnapshotPayloadError::MissingSentinel);
        };
        let progress: Self = serde_json::from_str(json)?;
        progress.validate()?;
        Ok(progress)
    }

    /// Decode a progress message, or `None` if it is not a valid snapshot
    /// payload.
    ///
    /// Empty input, ordinary free text, malformed JSON after the sentinel,
    /// and invariant violations all answer `None`; the common case is plain
    /// status text that simply lacks the sentinel. Never panics.
    pub fn decode(message: &str) -> Option<Self> {
        Self::try_decode(message).ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
