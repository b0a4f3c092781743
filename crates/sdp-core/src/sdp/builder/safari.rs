//! Safari/WebKit SDP builder.
//!
//! The most defensive dialect: every fingerprint is rendered (WebKit
//! verifies against the full set), `a=extmap-allow-mixed` and explicit
//! `a=rtcp:9 IN IP4 0.0.0.0` lines are required, the direction is pinned to
//! `sendrecv`, and a `webrtc-datachannel` section is always appended —
//! WebKit negotiates more reliably with a declared data channel present
//! even when none was requested.

use crate::sdp::builder::common::{
    add_extmap, add_header, add_payload_types, add_ssrc, media_with_mids, payload_ids,
    zero_media_skeleton, SdpLineBuffer, SdpType,
};
use crate::types::sdp::{MediaKind, SessionDescription};

/// Bundle mid of the synthesized data-channel section.
const DATA_MID: &str = "data";

pub(crate) fn generate_offer(info: &SessionDescription, session_id: u64) -> String {
    render(info, session_id, SdpType::Offer)
}

pub(crate) fn generate_answer(info: &SessionDescription, session_id: u64) -> String {
    render(info, session_id, SdpType::Answer)
}

fn render(info: &SessionDescription, session_id: u64, sdp_type: SdpType) -> String {
    if !info.has_media() {
        return zero_media_skeleton(session_id);
    }

    let media = media_with_mids(info);
    let mut sdp = SdpLineBuffer::new();
    add_header(&mut sdp, session_id);

    for fingerprint in &info.fingerprints {
        sdp.add(format!(
            "a=fingerprint:{} {}",
            fingerprint.hash, fingerprint.fingerprint
        ));
    }
    let setup = info
        .fingerprints
        .first()
        .and_then(|f| f.setup)
        .unwrap_or_else(|| sdp_type.default_setup());
    sdp.add(format!("a=setup:{setup}"));

    let mut mids: Vec<&str> = media.iter().map(|(_, mid)| mid.as_str()).collect();
    mids.push(DATA_MID);
    sdp.add(format!("a=group:BUNDLE {}", mids.join(" ")));
    sdp.add("a=ice-options:trickle");
    sdp.add("a=msid-semantic:WMS *");
    sdp.add("a=extmap-allow-mixed");

    for (medium, mid) in &media {
        sdp.add(format!(
            "m={} 9 UDP/TLS/RTP/SAVPF {}",
            medium.kind,
            payload_ids(medium)
        ));
        sdp.add("c=IN IP4 0.0.0.0");
        sdp.add("a=rtcp:9 IN IP4 0.0.0.0");
        if let Some(ufrag) = medium.ufrag.as_deref().or(info.ufrag.as_deref()) {
            sdp.add(format!("a=ice-ufrag:{ufrag}"));
        }
        if let Some(pwd) = medium.pwd.as_deref().or(info.pwd.as_deref()) {
            sdp.add(format!("a=ice-pwd:{pwd}"));
        }
        sdp.add(format!("a=mid:{mid}"));
        // WebKit renegotiates poorly with narrowed directions; always offer
        // the full duplex and let the media layer mute tracks instead
        sdp.add("a=sendrecv");
        add_extmap(&mut sdp, &medium.rtp_extensions);
        sdp.add("a=rtcp-mux");
        if medium.kind == MediaKind::Video {
            sdp.add("a=rtcp-rsize");
        }
        add_payload_types(&mut sdp, &medium.payload_types);
        add_ssrc(&mut sdp, medium);
    }

    add_data_channel(&mut sdp, info);

    sdp.finish()
}

/// Appends the synthetic `application` section. The data channel rides the
/// same bundled transport as the media sections, so it reuses their
/// credentials.
fn add_data_channel(sdp: &mut SdpLineBuffer, info: &SessionDescription) {
    let ufrag = info
        .ufrag
        .as_deref()
        .or_else(|| info.media_sections().find_map(|m| m.ufrag.as_deref()));
    let pwd = info
        .pwd
        .as_deref()
        .or_else(|| info.media_sections().find_map(|m| m.pwd.as_deref()));

    sdp.add("m=application 9 UDP/DTLS/SCTP webrtc-datachannel");
    sdp.add("c=IN IP4 0.0.0.0");
    if let Some(ufrag) = ufrag {
        sdp.add(format!("a=ice-ufrag:{ufrag}"));
    }
    if let Some(pwd) = pwd {
        sdp.add(format!("a=ice-pwd:{pwd}"));
    }
    sdp.add(format!("a=mid:{DATA_MID}"));
    sdp.add("a=sctp-port:5000");
    sdp.add("a=max-message-size:262144");
}
