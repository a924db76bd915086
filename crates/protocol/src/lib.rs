//! Snapshot progress protocol shared by the Loupe agent backend and web
//! chat client.
//!
//! Tool progress flows through a channel typed as free-form text. The
//! video-snapshot tool opportunistically carries structured frames over
//! that channel by sentinel-prefixing a JSON payload; this crate owns both
//! directions of that contract:
//!
//! - [`SnapshotProgress`] — the wire payload, its sentinel codec
//!   (`encode`/`decode`/`try_decode`), and its validation.
//! - [`ToolStep`] and the transcript scans ([`snapshot_steps`],
//!   [`collect_snapshots`], [`latest_snapshot`]) — how the client finds
//!   payloads inside a conversation.
//!
//! The TypeScript bindings for the web client are generated from these
//! types via `ts-rs` (`cargo test` writes `bindings/*.ts`).

pub mod progress;
pub mod transcript;

pub use progress::{
    is_snapshot_message, SnapshotPayloadError, SnapshotProgress, SNAPSHOT_PROGRESS_SENTINEL,
};
pub use transcript::{
    collect_snapshots, latest_snapshot, snapshot_steps, ToolStep, VIDEO_SNAPSHOT_TOOL,
};
