//! Wire types for the backend's session metrics.
//!
//! The backend tracks one record per WebSocket connection and keeps it around
//! after disconnect, stamping `disconnectedAt`. A record without that stamp is
//! an active session.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One WebSocket session record as served by `GET /api/metrics/sessions`.
///
/// Timestamps are zone-less ISO-8601 local datetimes, matching the backend's
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetric {
    pub session_id: String,
    pub bus_number: String,
    pub direction: String,
    pub connected_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disconnected_at: Option<NaiveDateTime>,
}

impl SessionMetric {
    /// A session is active until the server stamps its disconnect time.
    pub fn is_active(&self) -> bool {
        self.disconnected_at.is_none()
    }

    /// Abbreviated id for display, `8f14e45f...` style.
    pub fn short_id(&self) -> String {
        let prefix: String = self.session_id.chars().take(8).collect();
        format!("{prefix}...")
    }

    /// Whole seconds this session has been connected as of `now`.
    pub fn connected_duration(&self, now: NaiveDateTime) -> i64 {
        (now - self.connected_at).num_seconds().max(0)
    }
}

/// Filter down to active sessions, preserving server order.
pub fn active_sessions(sessions: &[SessionMetric]) -> Vec<&SessionMetric> {
    sessions.iter().filter(|s| s.is_active()).collect()
}

/// Response body of the backend's manual cleanup probe
/// (`POST /api/metrics/cleanup-sessions`). The probe only reports; it does
/// not force-close anything.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupReport {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub active_sessions: u64,
}
