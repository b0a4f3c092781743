//! Group-call (conference) signaling state and SDP dialect.
//!
//! A group call is mediated by a relay server rather than negotiated peer
//! to peer: the server pushes `{transport, ssrcs}` payloads, the client
//! folds them into a [`LocalConferenceDescription`] and renders the relay's
//! SDP dialect back. See [`merge::merge_ssrcs`] for the reconciliation
//! rules and [`builder`] for the dialect itself.

mod builder;
mod description;
mod merge;

pub use description::{
    ConferenceSsrcEntry, ConferenceTransport, LocalConferenceDescription, ServerUpdate,
};
pub use merge::{merge_ssrcs, merge_ssrcs_detailed, SsrcDelta};
