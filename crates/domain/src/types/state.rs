//! Remote API-key state and synchronization outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the API key is currently usable on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteState {
    Enabled,
    Disabled,
}

impl RemoteState {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for RemoteState {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Display for RemoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("enabled"),
            Self::Disabled => f.write_str("disabled"),
        }
    }
}

/// Result of a single `synchronize_client` call.
///
/// Failures of the transition call are not errors; they are reported here so
/// the caller can decide whether to synchronize again later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Remote state already matched; nothing was sent.
    Unchanged { state: RemoteState },
    /// The transition call was accepted.
    Applied { state: RemoteState },
    /// The service answered the transition call with a status above 204.
    Rejected { target: RemoteState, status: u16 },
    /// The transition call could not be executed.
    Failed { target: RemoteState, reason: String },
}

impl SyncOutcome {
    /// Remote state is known to match the desired state.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Unchanged { .. } | Self::Applied { .. })
    }

    /// Whether a transition call was sent (or attempted).
    pub fn attempted_transition(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}
