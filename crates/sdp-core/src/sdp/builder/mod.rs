//! Engine-dialect SDP builders and the dispatching facade.
//!
//! Browser WebRTC stacks disagree on which SDP shape they accept; the three
//! dialect modules reproduce those expectations exactly. [`P2pSdpBuilder`]
//! is the single entry point: it is constructed once per call session with
//! the engine already decided, so every offer/answer/candidate for that
//! session renders consistently.

pub(crate) mod common;
mod firefox;
mod generic;
mod safari;

use serde::{Deserialize, Serialize};

use crate::types::sdp::{IceCandidate, SessionDescription};

/// The browser engine dialect to render for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserEngine {
    /// Chrome-family engines; also the fallback for unknown runtimes
    Generic,
    Firefox,
    Safari,
}

impl BrowserEngine {
    /// Picks the dialect from a user-agent string.
    ///
    /// This is a substring heuristic, not a capability probe; the client
    /// only ever runs on a known small set of engines. Note that
    /// Chrome-family user agents also contain "safari", so the Safari match
    /// requires "chrome" to be absent.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("firefox") {
            BrowserEngine::Firefox
        } else if ua.contains("safari") && !ua.contains("chrome") {
            BrowserEngine::Safari
        } else {
            BrowserEngine::Generic
        }
    }
}

/// A candidate ready to hand to the transport's `addIceCandidate`-style
/// surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceCandidateInit {
    /// Candidate attribute value (`candidate:...`)
    pub candidate: String,
    /// Index of the `m=` section the candidate belongs to
    pub sdp_m_line_index: u16,
    /// Media id of that section
    pub sdp_mid: String,
}

/// Renders offers, answers and candidates for one call session.
///
/// The engine tag and candidate strategy are fixed at construction; the
/// session id is minted once so that successive renegotiations keep the
/// same origin line.
#[derive(Debug, Clone)]
pub struct P2pSdpBuilder {
    engine: BrowserEngine,
    prefer_raw_candidate: bool,
    session_id: u64,
}

impl P2pSdpBuilder {
    /// Creates a builder for the given engine with a fresh session id.
    ///
    /// Raw candidate passthrough is enabled by default: re-encoding a
    /// candidate can perturb engines that are sensitive to byte-level
    /// differences, so the verbatim line is preferred whenever one exists.
    pub fn new(engine: BrowserEngine) -> Self {
        Self {
            engine,
            prefer_raw_candidate: true,
            session_id: rand::random::<u32>() as u64,
        }
    }

    /// Overrides the candidate strategy chosen at construction.
    pub fn with_prefer_raw_candidate(mut self, prefer_raw_candidate: bool) -> Self {
        self.prefer_raw_candidate = prefer_raw_candidate;
        self
    }

    /// Pins the session id; renegotiation and tests need a stable origin.
    pub fn with_session_id(mut self, session_id: u64) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn engine(&self) -> BrowserEngine {
        self.engine
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Renders an offer in the session's engine dialect.
    pub fn generate_offer(&self, info: &SessionDescription) -> String {
        match self.engine {
            BrowserEngine::Generic => generic::generate_offer(info, self.session_id),
            BrowserEngine::Firefox => firefox::generate_offer(info, self.session_id),
            BrowserEngine::Safari => safari::generate_offer(info, self.session_id),
        }
    }

    /// Renders an answer in the session's engine dialect.
    pub fn generate_answer(&self, info: &SessionDescription) -> String {
        match self.engine {
            BrowserEngine::Generic => generic::generate_answer(info, self.session_id),
            BrowserEngine::Firefox => firefox::generate_answer(info, self.session_id),
            BrowserEngine::Safari => safari::generate_answer(info, self.session_id),
        }
    }

    /// Packages a candidate for the transport.
    ///
    /// With raw passthrough enabled the verbatim parsed line is forwarded
    /// unchanged; otherwise the candidate is re-serialized field by field in
    /// the fixed attribute order (see [`IceCandidate`]'s `Display`).
    pub fn generate_candidate(
        &self,
        candidate: &IceCandidate,
        sdp_m_line_index: u16,
        sdp_mid: &str,
    ) -> IceCandidateInit {
        let rendered = if self.prefer_raw_candidate && !candidate.sdp_string.is_empty() {
            candidate.sdp_string.clone()
        } else {
            candidate.to_string()
        };
        IceCandidateInit {
            candidate: rendered,
            sdp_m_line_index,
            sdp_mid: sdp_mid.to_string(),
        }
    }
}
