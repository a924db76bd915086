//! Chat-transcript helpers for locating snapshot payloads.
//!
//! The chat client receives a conversation as an ordered array of tool
//! steps and renders each step's progress message. These helpers pick out
//! the video-snapshot steps and the payloads hidden in their progress
//! messages, so the rendering layer never inspects sentinel text itself.
//!
//! Everything here is a pure scan over a borrowed slice; the only side
//! effect is a debug log when a sentinel-prefixed message turns out to be
//! undecodable, which points at truncation upstream rather than ordinary
//! free text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::progress::{SnapshotPayloadError, SnapshotProgress};

/// Tool name the agent backend registers for video snapshot extraction.
///
/// Steps carrying encoded snapshot payloads normally come from this tool.
/// Recognition itself keys on the sentinel, not the tool name, so payloads
/// are still found if the backend renames the tool.
pub const VIDEO_SNAPSHOT_TOOL: &str = "video_snapshot";

/// The slice of a chat step this crate cares about.
///
/// The chat API's step objects carry more (status, timestamps, call
/// arguments); only the fields the snapshot helpers read are modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToolStep {
    /// Backend tool that produced this step.
    pub tool_name: String,

    /// Latest progress message for the step: free text, an encoded snapshot
    /// payload, or absent when the tool has not reported yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub progress: Option<String>,
}

impl ToolStep {
    /// Decode this step's progress message as a snapshot payload.
    ///
    /// `None` when the step has no progress message yet, the message is
    /// ordinary free text, or a sentinel-prefixed payload fails to decode.
    pub fn snapshot(&self) -> Option<SnapshotProgress> {
        let message = self.progress.as_deref()?;
        match SnapshotProgress::try_decode(message) {
            Ok(progress) => Some(progress),
            Err(SnapshotPayloadError::Empty | SnapshotPayloadError::MissingSentinel) => None,
            Err(err) => {
                // Sentinel present but the payload would not decode.
                tracing::debug!(
                    tool_name = %self.tool_name,
                    error = %err,
                    "Ignoring undecodable snapshot payload"
                );
                None
            }
        }
    }
}

/// Steps produced by the video-snapshot tool, in transcript order.
///
/// This is the step-level lookup the snapshot strip renders from; steps
/// that have not reported a payload yet are included.
pub fn snapshot_steps(steps: &[ToolStep]) -> Vec<&ToolStep> {
    steps
        .iter()
        .filter(|step| step.tool_name == VIDEO_SNAPSHOT_TOOL)
        .collect()
}

/// Every decodable snapshot payload in the transcript, in order.
pub fn collect_snapshots(steps: &[ToolStep]) -> Vec<SnapshotProgress> {
    steps.iter().filter_map(|step| step.snapshot()).collect()
}

/// The most recent decodable snapshot payload, scanning from the end.
pub fn latest_snapshot(steps: &[ToolStep]) -> Option<SnapshotProgress> {
    steps.iter().rev().find_map(|step| step.snapshot())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
