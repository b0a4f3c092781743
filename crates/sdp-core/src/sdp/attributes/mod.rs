//! SDP attribute parsers
//!
//! One module per attribute grammar, covering the attribute set exchanged
//! during call negotiation (RFC 8866 plus the WebRTC extension RFCs noted in
//! each module).

// Media attribute modules
pub mod direction;
pub mod fmtp;
pub mod rtcp;
pub mod rtpmap;

// Transport modules
pub mod candidate;
pub mod dtls;

// Identification modules
pub mod extmap;
pub mod ssrc;

// Common utilities
pub mod common;

pub use candidate::parse_candidate;
pub use direction::MediaDirection;
pub use dtls::DtlsSetup;
