//! Per-call conference state.
//!
//! A [`LocalConferenceDescription`] is owned by the call session object for
//! the lifetime of one group call. The relay server pushes
//! `{transport, ssrcs}` payloads on join/leave/transport changes; transport
//! info is replaced wholesale while the SSRC list is folded in
//! incrementally so `m=` line positions stay stable (see
//! [`super::merge::merge_ssrcs`]).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::generate_conference_sdp;
use super::merge::merge_ssrcs;
use crate::error::Result;
use crate::types::sdp::{Fingerprint, IceCandidate};

/// One participant's audio stream slot in a group call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceSsrcEntry {
    /// RTP synchronization source id
    pub ssrc: u32,
    /// Whether this is the local/primary stream
    #[serde(default)]
    pub is_main: bool,
    /// Tombstone flag; retained for `m=` line position stability, never
    /// cleared once set
    #[serde(default)]
    pub is_removed: bool,
    /// Display label, used only for logging
    #[serde(default)]
    pub name: String,
}

impl ConferenceSsrcEntry {
    /// Bundle media id: `0` for the designated main entry, the audio SSRC
    /// otherwise.
    pub fn mid(&self) -> String {
        if self.is_main {
            "0".to_string()
        } else {
            self.ssrc.to_string()
        }
    }
}

/// Transport parameters pushed by the relay server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceTransport {
    /// ICE username fragment
    pub ufrag: String,
    /// ICE password
    pub pwd: String,
    /// DTLS fingerprints
    #[serde(default)]
    pub fingerprints: Vec<Fingerprint>,
    /// Server candidates (the relay is ICE-lite, so these are complete)
    #[serde(default)]
    pub candidates: Vec<IceCandidate>,
}

/// One `{transport, ssrcs}` push payload from the relay server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerUpdate {
    /// Replacement transport parameters, when they changed
    #[serde(default)]
    pub transport: Option<ConferenceTransport>,
    /// Full participant SSRC snapshot
    #[serde(default)]
    pub ssrcs: Vec<ConferenceSsrcEntry>,
}

impl ServerUpdate {
    /// Deserializes a relay push payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Aggregate signaling state for one group call.
#[derive(Debug, Clone)]
pub struct LocalConferenceDescription {
    session_id: i64,
    transport: Option<ConferenceTransport>,
    ssrcs: Vec<ConferenceSsrcEntry>,
}

impl LocalConferenceDescription {
    /// Creates the state for a new call. The session id is minted once from
    /// the wall clock and never changes for the lifetime of the call.
    pub fn new() -> Self {
        Self {
            session_id: chrono::Utc::now().timestamp_millis(),
            transport: None,
            ssrcs: Vec::new(),
        }
    }

    /// Pins the session id (renegotiation tests need a stable origin line).
    pub fn with_session_id(mut self, session_id: i64) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    pub fn transport(&self) -> Option<&ConferenceTransport> {
        self.transport.as_ref()
    }

    pub fn ssrcs(&self) -> &[ConferenceSsrcEntry] {
        &self.ssrcs
    }

    /// Applies one relay push payload: transport info is replaced wholesale,
    /// the SSRC snapshot is merged in place.
    ///
    /// Returns `true` when the call's description changed and the SDP must
    /// be regenerated and re-sent.
    pub fn update_from_server(&mut self, update: ServerUpdate) -> bool {
        let mut changed = false;
        if let Some(transport) = update.transport {
            debug!(ufrag = %transport.ufrag, "conference transport replaced");
            self.transport = Some(transport);
            changed = true;
        }
        changed |= merge_ssrcs(&mut self.ssrcs, &update.ssrcs);
        changed
    }

    /// Renders the current state as an offer toward the relay.
    pub fn generate_sdp(&self) -> String {
        generate_conference_sdp(self, false)
    }

    /// Renders an answer: only the first main entry is acknowledged, remote
    /// participants are never echoed back.
    pub fn generate_answer(&self) -> String {
        generate_conference_sdp(self, true)
    }
}

impl Default for LocalConferenceDescription {
    fn default() -> Self {
        Self::new()
    }
}
