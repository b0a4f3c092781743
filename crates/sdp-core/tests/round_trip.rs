//! Round-trip stability across the parser and the engine builders.
//!
//! A description parsed from a previously-generated offer must survive
//! regeneration: payload type lists, extmap lists and SSRC fields have to
//! match element for element, in order. Candidates must carry the same
//! fields through a render/parse cycle.

use proptest::prelude::*;

use webcall_sdp_core::{
    parse_candidate, parse_sdp, BrowserEngine, Fingerprint, IceCandidate, MediaDescription,
    MediaKind, P2pSdpBuilder, PayloadType, RtcpFeedback, RtpExtension, SessionDescription,
    SsrcGroup, TransportAddress,
};

fn rich_info() -> SessionDescription {
    let mut audio = MediaDescription::new(MediaKind::Audio);
    audio.ssrc = Some(555);
    audio.rtp_extensions.push(RtpExtension {
        id: 1,
        uri: "urn:ietf:params:rtp-hdrext:ssrc-audio-level".to_string(),
    });
    audio.payload_types.push(PayloadType {
        id: 111,
        name: "opus".to_string(),
        clockrate: 48000,
        channels: 2,
        feedback_types: vec![RtcpFeedback {
            kind: "transport-cc".to_string(),
            subtype: None,
        }],
        parameters: vec![
            ("minptime".to_string(), "10".to_string()),
            ("useinbandfec".to_string(), "1".to_string()),
        ],
    });
    audio.payload_types.push(PayloadType {
        id: 126,
        name: "telephone-event".to_string(),
        clockrate: 8000,
        channels: 0,
        feedback_types: Vec::new(),
        parameters: Vec::new(),
    });

    let mut video = MediaDescription::new(MediaKind::Video);
    video.ssrc = Some(100);
    video.ssrc_groups.push(SsrcGroup {
        semantics: "FID".to_string(),
        ssrcs: vec![100, 101],
    });
    video.rtp_extensions.push(RtpExtension {
        id: 2,
        uri: "http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time".to_string(),
    });
    video.payload_types.push(PayloadType {
        id: 96,
        name: "VP8".to_string(),
        clockrate: 90000,
        channels: 0,
        feedback_types: vec![
            RtcpFeedback {
                kind: "nack".to_string(),
                subtype: None,
            },
            RtcpFeedback {
                kind: "nack".to_string(),
                subtype: Some("pli".to_string()),
            },
        ],
        parameters: Vec::new(),
    });
    video.payload_types.push(PayloadType {
        id: 97,
        name: "rtx".to_string(),
        clockrate: 90000,
        channels: 0,
        feedback_types: Vec::new(),
        parameters: vec![("apt".to_string(), "96".to_string())],
    });

    SessionDescription {
        ufrag: Some("abcd".to_string()),
        pwd: Some("1234pwd".to_string()),
        fingerprints: vec![Fingerprint {
            hash: "sha-256".to_string(),
            fingerprint: "AA:BB:CC:DD:EE:FF".to_string(),
            setup: None,
        }],
        audio: Some(audio),
        video: Some(video),
    }
}

fn assert_media_equivalent(left: &MediaDescription, right: &MediaDescription) {
    assert_eq!(left.kind, right.kind);
    assert_eq!(left.payload_types, right.payload_types);
    assert_eq!(left.rtp_extensions, right.rtp_extensions);
    assert_eq!(left.ssrc, right.ssrc);
    assert_eq!(left.ssrc_groups, right.ssrc_groups);
}

fn assert_round_trip_stable(engine: BrowserEngine) {
    let info = rich_info();
    let builder = P2pSdpBuilder::new(engine).with_session_id(12345);

    let offer = builder.generate_offer(&info);
    let parsed = parse_sdp(&offer);

    assert_media_equivalent(info.audio.as_ref().unwrap(), parsed.audio.as_ref().unwrap());
    assert_media_equivalent(info.video.as_ref().unwrap(), parsed.video.as_ref().unwrap());
    assert_eq!(info.fingerprints[0].hash, parsed.fingerprints[0].hash);
    assert_eq!(
        info.fingerprints[0].fingerprint,
        parsed.fingerprints[0].fingerprint
    );

    // Regenerating from the parsed record reaches a fixed point
    let reoffer = builder.generate_offer(&parsed);
    let reparsed = parse_sdp(&reoffer);
    assert_eq!(parsed, reparsed);
}

#[test]
fn generic_offer_round_trip_is_stable() {
    assert_round_trip_stable(BrowserEngine::Generic);
}

#[test]
fn firefox_offer_round_trip_is_stable() {
    assert_round_trip_stable(BrowserEngine::Firefox);
}

#[test]
fn safari_offer_round_trip_is_stable() {
    assert_round_trip_stable(BrowserEngine::Safari);
}

#[test]
fn generation_is_deterministic() {
    let info = rich_info();
    for engine in [
        BrowserEngine::Generic,
        BrowserEngine::Firefox,
        BrowserEngine::Safari,
    ] {
        let a = P2pSdpBuilder::new(engine).with_session_id(7).generate_offer(&info);
        let b = P2pSdpBuilder::new(engine).with_session_id(7).generate_offer(&info);
        assert_eq!(a, b);
    }
}

#[test]
fn answer_round_trip_is_stable() {
    let info = rich_info();
    let builder = P2pSdpBuilder::new(BrowserEngine::Generic).with_session_id(9);
    let answer = builder.generate_answer(&info);
    let parsed = parse_sdp(&answer);
    assert_media_equivalent(info.audio.as_ref().unwrap(), parsed.audio.as_ref().unwrap());
    assert_eq!(parsed, parse_sdp(&builder.generate_answer(&parsed)));
}

proptest! {
    // Rendering a structured candidate and parsing the result carries every
    // field through unchanged, for any combination of optional attributes.
    #[test]
    fn candidate_render_parse_round_trip(
        foundation in "[a-zA-Z0-9]{1,8}",
        component in "[1-2]",
        protocol in prop::sample::select(vec!["udp", "tcp"]),
        priority in "[1-9][0-9]{0,8}",
        ip in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        port in 1u16..,
        candidate_type in prop::option::of(prop::sample::select(vec![
            "host", "srflx", "prflx", "relay",
        ])),
        rel in prop::option::of(("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}", 1u16..)),
        generation in prop::option::of(0u32..10),
        tcp_type in prop::option::of(prop::sample::select(vec!["active", "passive", "so"])),
        username in prop::option::of("[a-zA-Z0-9]{4,8}"),
    ) {
        let candidate = IceCandidate {
            foundation,
            component,
            protocol: protocol.to_string(),
            priority,
            address: TransportAddress { ip, port },
            candidate_type: candidate_type.map(str::to_string),
            rel_address: rel.map(|(ip, port)| TransportAddress { ip, port }),
            generation: generation.map(|g| g.to_string()),
            tcp_type: tcp_type.map(str::to_string),
            network_id: None,
            network_cost: None,
            username,
            sdp_string: String::new(),
        };

        let rendered = candidate.to_string();
        let parsed = parse_candidate(&rendered).unwrap().unwrap();

        prop_assert_eq!(&parsed.foundation, &candidate.foundation);
        prop_assert_eq!(&parsed.component, &candidate.component);
        prop_assert_eq!(&parsed.protocol, &candidate.protocol);
        prop_assert_eq!(&parsed.priority, &candidate.priority);
        prop_assert_eq!(&parsed.address, &candidate.address);
        prop_assert_eq!(&parsed.candidate_type, &candidate.candidate_type);
        prop_assert_eq!(&parsed.rel_address, &candidate.rel_address);
        prop_assert_eq!(&parsed.generation, &candidate.generation);
        prop_assert_eq!(&parsed.tcp_type, &candidate.tcp_type);
        prop_assert_eq!(&parsed.username, &candidate.username);

        // And the rendering itself is a fixed point
        prop_assert_eq!(parsed.to_string(), rendered);
    }
}
