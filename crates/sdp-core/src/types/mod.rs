//! Core data model for call signaling.

pub mod sdp;

pub use sdp::{
    Fingerprint, IceCandidate, MediaDescription, MediaKind, PayloadType, RtcpFeedback,
    RtpExtension, SessionDescription, SsrcGroup, TransportAddress,
};
