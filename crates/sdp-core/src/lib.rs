//! # webcall-sdp-core
//!
//! SDP parsing and generation for the webcall signaling stack: the
//! text-protocol core that turns call state into the Session Description
//! Protocol documents browsers and the conference relay expect, and turns
//! their documents back into structured state.
//!
//! The crate covers:
//!
//! - **Parsing** ([`parse_sdp`], [`parse_candidate`]): lenient, structured
//!   parsing of offer/answer bodies and ICE candidate lines.
//! - **Two-party builders** ([`P2pSdpBuilder`]): offers/answers/candidates
//!   rendered per browser engine dialect ([`BrowserEngine`]) — the engines
//!   disagree on fingerprint handling, transport placement, directions and
//!   data-channel sections, and reject descriptions shaped for a different
//!   engine.
//! - **Conference signaling** ([`LocalConferenceDescription`],
//!   [`merge_ssrcs`]): the group-call dialect spoken to the ICE-lite relay
//!   server, with in-place SSRC reconciliation across server pushes.
//!
//! Everything here is synchronous, pure string/structure transformation;
//! transports, timers and I/O belong to the call-session layer above.
//!
//! # Example
//!
//! ```
//! use webcall_sdp_core::{parse_sdp, BrowserEngine, P2pSdpBuilder};
//!
//! let remote = "v=0\r\n\
//!     o=- 1 2 IN IP4 0.0.0.0\r\n\
//!     s=-\r\n\
//!     t=0 0\r\n\
//!     a=ice-ufrag:abcd\r\n\
//!     a=ice-pwd:1234pwd\r\n\
//!     m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
//!     a=rtpmap:111 opus/48000/2\r\n\
//!     a=ssrc:555 cname:stream555\r\n";
//!
//! let info = parse_sdp(remote);
//! assert_eq!(info.audio.as_ref().unwrap().ssrc, Some(555));
//!
//! let builder = P2pSdpBuilder::new(BrowserEngine::Generic);
//! let answer = builder.generate_answer(&info);
//! assert!(answer.contains("a=rtpmap:111 opus/48000/2"));
//! ```

pub mod conference;
pub mod error;
pub mod sdp;
pub mod types;

pub use conference::{
    ConferenceSsrcEntry, ConferenceTransport, LocalConferenceDescription, ServerUpdate, SsrcDelta,
    merge_ssrcs, merge_ssrcs_detailed,
};
pub use error::{Error, Result};
pub use sdp::attributes::{DtlsSetup, MediaDirection};
pub use sdp::{parse_candidate, parse_sdp, BrowserEngine, IceCandidateInit, P2pSdpBuilder};
pub use types::sdp::{
    Fingerprint, IceCandidate, MediaDescription, MediaKind, PayloadType, RtcpFeedback,
    RtpExtension, SessionDescription, SsrcGroup, TransportAddress,
};
