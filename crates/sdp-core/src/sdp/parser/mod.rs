//! SDP document parser.
//!
//! [`parse_sdp`] turns an offer/answer body into a structured
//! [`SessionDescription`]. The parser is deliberately lenient: negotiation
//! descriptions pass through several legal intermediate states (no
//! credentials yet, media without SSRCs, unknown media kinds), so misses
//! degrade the result instead of failing it. Whether a degraded description
//! is usable is decided by the transport that consumes it, not here.

mod lines;
mod media;
mod session;

pub(crate) use lines::SdpLines;

use crate::types::sdp::{MediaKind, SessionDescription};

/// Parses an SDP document into a [`SessionDescription`].
///
/// The output depends only on the input text: identical input yields a
/// structurally identical record, with every list preserving source line
/// order.
///
/// # Examples
///
/// ```
/// use webcall_sdp_core::parse_sdp;
///
/// let sdp = "v=0\r\n\
///     o=- 1 2 IN IP4 0.0.0.0\r\n\
///     s=-\r\n\
///     t=0 0\r\n\
///     a=ice-ufrag:abcd\r\n\
///     a=ice-pwd:1234pwd\r\n\
///     m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
///     a=rtpmap:111 opus/48000/2\r\n";
///
/// let info = parse_sdp(sdp);
/// assert_eq!(info.ufrag.as_deref(), Some("abcd"));
/// assert_eq!(info.audio.unwrap().payload_types[0].name, "opus");
/// ```
pub fn parse_sdp(sdp_text: &str) -> SessionDescription {
    let lines = SdpLines::new(sdp_text);

    // A description with no ICE credentials anywhere has no negotiable
    // transport yet: a legal intermediate state, reported as an empty record
    let pwd = lines.lookup("a=ice-pwd:", false, 0, None);
    let ufrag = lines.lookup("a=ice-ufrag:", false, 0, None);
    if pwd.is_none() && ufrag.is_none() {
        return SessionDescription::default();
    }

    let media_indexes = lines.find_all("m=");
    let session_end = media_indexes.first().copied().unwrap_or_else(|| lines.len());

    let mut info = SessionDescription::default();
    session::parse_session_section(&lines, session_end, &mut info);

    for (i, &start) in media_indexes.iter().enumerate() {
        let end = media_indexes
            .get(i + 1)
            .copied()
            .unwrap_or_else(|| lines.len());
        if let Some(parsed) = media::parse_media_block(&lines, start, end) {
            match parsed.kind {
                MediaKind::Audio => info.audio = Some(parsed),
                MediaKind::Video => info.video = Some(parsed),
            }
        }
    }

    info
}
