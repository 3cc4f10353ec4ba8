use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed marker value written into every probe document
///
/// The read-back step filters on this value, so it doubles as the probe's
/// signature inside the scratch collection.
pub const PROBE_MARKER: &str = "connectivity-probe";

/// The single throwaway record written and read back to confirm write/read
/// capability.
///
/// It exists only within the scratch collection's lifetime: the cleanup step
/// drops the collection (and database) before the process exits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeDocument {
    /// Fixed marker value ([`PROBE_MARKER`])
    pub marker: String,

    /// When this probe run created the document
    pub created_at: DateTime<Utc>,
}

impl ProbeDocument {
    pub fn new() -> Self {
        Self {
            marker: PROBE_MARKER.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Default for ProbeDocument {
    fn default() -> Self {
        Self::new()
    }
}
