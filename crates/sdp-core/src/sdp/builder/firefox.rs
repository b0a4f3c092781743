//! Firefox SDP builder.
//!
//! Gecko expects transport parameters inside each media block rather than a
//! shared session-level transport: ICE credentials and the DTLS role are
//! rendered per medium, and the direction attribute is only emitted when
//! the medium actually declares one. The single fingerprint stays at
//! session level.

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
        sdp.add(format!(
            "a=setup:{}",
            medium.setup.unwrap_or_else(|| sdp_type.default_setup())
        ));
        sdp.add(format!("a=mid:{mid}"));
        if let Some(dir) = medium.dir {
            sdp.add(format!("a={dir}"));
        }
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
    use crate::sdp::attributes::direction::MediaDirection;
    use crate::sdp::attributes::dtls::DtlsSetup;
    use crate::types::sdp::{Fingerprint, MediaDescription, PayloadType};

    fn info_with_media_credentials() -> SessionDescription {
        let mut media = MediaDescription::new(MediaKind::Audio);
        media.ufrag = Some("mf".to_string());
        media.pwd = Some("mediapwd".to_string());
        media.setup = Some(DtlsSetup::Passive);
        media.payload_types.push(PayloadType {
            id: 109,
            name: "opus".to_string(),
            clockrate: 48000,
            channels: 2,
            feedback_types: Vec::new(),
            parameters: Vec::new(),
        });
        SessionDescription {
            ufrag: None,
            pwd: None,
            fingerprints: vec![Fingerprint {
                hash: "sha-256".to_string(),
                fingerprint: "AA:BB:CC:DD".to_string(),
                setup: Some(DtlsSetup::Actpass),
            }],
            audio: Some(media),
            video: None,
        }
    }

    #[test]
    fn test_media_block_carries_transport() {
        let offer = generate_offer(&info_with_media_credentials(), 1);
        let block = offer.split("m=audio").nth(1).unwrap();
        assert!(block.contains("a=ice-ufrag:mf"));
        assert!(block.contains("a=ice-pwd:mediapwd"));
        assert!(block.contains("a=setup:passive"));
        assert!(block.contains("a=mid:0"));
    }

    #[test]
    fn test_direction_only_when_declared() {
        let mut info = info_with_media_credentials();
        let offer = generate_offer(&info, 1);
        assert!(!offer.contains("a=sendrecv"));

        info.audio.as_mut().unwrap().dir = Some(MediaDirection::SendOnly);
        let offer = generate_offer(&info, 1);
        assert!(offer.contains("a=sendonly"));
    }

    #[test]
    fn test_single_session_level_fingerprint() {
        let mut info = info_with_media_credentials();
        info.fingerprints.push(Fingerprint {
            hash: "sha-1".to_string(),
            fingerprint: "11:22".to_string(),
            setup: None,
        });
        let offer = generate_offer(&info, 1);
        // Only the first fingerprint is rendered in this dialect
        assert_eq!(offer.matches("a=fingerprint:").count(), 1);
        assert!(offer.contains("a=fingerprint:sha-256"));
    }
}
