//! Chrome-family SDP builder.
//!
//! The baseline dialect: one session-level fingerprint, session or
//! media-level ICE credentials, no per-medium `a=rtcp:` lines.

use crate::sdp::builder::common::{
    add_extmap, add_header, add_payload_types, add_ssrc, media_with_mids, payload_ids,
    zero_media_skeleton, SdpLineBuffer, SdpType,
};
use crate::types::sdp::{MediaKind, SessionDescription};

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

    if let Some(fingerprint) = info.fingerprints.first() {
        sdp.add(format!(
            "a=fingerprint:{} {}",
            fingerprint.hash, fingerprint.fingerprint
        ));
        sdp.add(format!(
            "a=setup:{}",
            fingerprint.setup.unwrap_or_else(|| sdp_type.default_setup())
        ));
    }

    let mids: Vec<&str> = media.iter().map(|(_, mid)| mid.as_str()).collect();
    sdp.add(format!("a=group:BUNDLE {}", mids.join(" ")));
    sdp.add("a=ice-options:trickle");
    sdp.add("a=msid-semantic:WMS *");

    for (medium, mid) in &media {
        sdp.add(format!(
            "m={} 9 UDP/TLS/RTP/SAVPF {}",
            medium.kind,
            payload_ids(medium)
        ));
        sdp.add("c=IN IP4 0.0.0.0");
        if let Some(ufrag) = medium.ufrag.as_deref().or(info.ufrag.as_deref()) {
            sdp.add(format!("a=ice-ufrag:{ufrag}"));
        }
        if let Some(pwd) = medium.pwd.as_deref().or(info.pwd.as_deref()) {
            sdp.add(format!("a=ice-pwd:{pwd}"));
        }
        sdp.add(format!("a=mid:{mid}"));
        sdp.add(format!(
            "a={}",
            medium
                .dir
                .map(|dir| dir.as_str())
                .unwrap_or("sendrecv")
        ));
        add_extmap(&mut sdp, &medium.rtp_extensions);
        sdp.add("a=rtcp-mux");
        if medium.kind == MediaKind::Video {
            sdp.add("a=rtcp-rsize");
        }
        add_payload_types(&mut sdp, &medium.payload_types);
        add_ssrc(&mut sdp, medium);
    }

    sdp.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sdp::{Fingerprint, MediaDescription, PayloadType};

    fn audio_info() -> SessionDescription {
        let mut media = MediaDescription::new(MediaKind::Audio);
        media.ssrc = Some(555);
        media.payload_types.push(PayloadType {
            id: 111,
            name: "opus".to_string(),
            clockrate: 48000,
            channels: 2,
            feedback_types: Vec::new(),
            parameters: Vec::new(),
        });
        SessionDescription {
            ufrag: Some("abcd".to_string()),
            pwd: Some("1234pwd".to_string()),
            fingerprints: vec![Fingerprint {
                hash: "sha-256".to_string(),
                fingerprint: "AA:BB:CC:DD".to_string(),
                setup: None,
            }],
            audio: Some(media),
            video: None,
        }
    }

    #[test]
    fn test_basic_audio_offer() {
        let offer = generate_offer(&audio_info(), 1);
        assert!(offer.contains("a=ice-ufrag:abcd"));
        assert!(offer.contains("a=ice-pwd:1234pwd"));
        assert!(offer.contains("a=rtpmap:111 opus/48000/2"));
        assert!(offer.contains("a=ssrc:555 cname:stream555"));
        assert!(offer.contains("a=group:BUNDLE 0"));
        // No per-medium rtcp line in this dialect
        assert!(!offer.contains("a=rtcp:"));
    }

    #[test]
    fn test_setup_role_defaults() {
        let info = audio_info();
        assert!(generate_offer(&info, 1).contains("a=setup:actpass"));
        assert!(generate_answer(&info, 1).contains("a=setup:active"));
    }

    #[test]
    fn test_video_gets_rtcp_rsize() {
        let mut info = audio_info();
        let mut video = MediaDescription::new(MediaKind::Video);
        video.payload_types.push(PayloadType {
            id: 96,
            name: "VP8".to_string(),
            clockrate: 90000,
            channels: 0,
            feedback_types: Vec::new(),
            parameters: Vec::new(),
        });
        info.video = Some(video);

        let offer = generate_offer(&info, 1);
        assert!(offer.contains("a=group:BUNDLE 0 1"));
        let video_block = offer.split("m=video").nth(1).unwrap();
        assert!(video_block.contains("a=rtcp-rsize"));
        let audio_block = offer.split("m=audio").nth(1).unwrap();
        let audio_block = audio_block.split("m=video").next().unwrap();
        assert!(!audio_block.contains("a=rtcp-rsize"));
    }

    #[test]
    fn test_zero_media_skeleton() {
        let info = SessionDescription::default();
        let offer = generate_offer(&info, 7);
        assert!(!offer.contains("m="));
        assert!(offer.contains("o=- 7 2 IN IP4 0.0.0.0"));
    }
}
