//! Relay-dialect SDP builder for group calls.
//!
//! The conference relay speaks a convention layered on SDP syntax, not a
//! real two-party negotiation: a bundle of one `m=audio` section per
//! participant SSRC against an ICE-lite server, with a fixed Opus +
//! telephone-event codec set. The `m=` port is a priority marker (`1` for
//! the designated main entry, `0` otherwise), not a network parameter, and
//! a leaver's section collapses to a bare `a=inactive` so the bundle never
//! renumbers.

use crate::sdp::attributes::dtls::DtlsSetup;
use crate::sdp::builder::common::{add_header, SdpLineBuffer};

use super::description::{ConferenceSsrcEntry, ConferenceTransport, LocalConferenceDescription};

pub(crate) fn generate_conference_sdp(
    desc: &LocalConferenceDescription,
    is_answer: bool,
) -> String {
    // An answer only ever acknowledges the local/primary stream
    let entries: Vec<&ConferenceSsrcEntry> = if is_answer {
        desc.ssrcs().iter().filter(|e| e.is_main).take(1).collect()
    } else {
        desc.ssrcs().iter().collect()
    };

    let mut sdp = SdpLineBuffer::new();
    // The session id here fits in i64 (a millisecond timestamp); reuse the
    // common header shape
    add_header(&mut sdp, desc.session_id() as u64);

    let mids: Vec<String> = entries.iter().map(|e| e.mid()).collect();
    sdp.add(format!("a=group:BUNDLE {}", mids.join(" ")));
    sdp.add("a=ice-lite");

    for entry in &entries {
        add_entry(&mut sdp, desc.transport(), entry);
    }

    sdp.finish()
}

fn add_entry(
    sdp: &mut SdpLineBuffer,
    transport: Option<&ConferenceTransport>,
    entry: &ConferenceSsrcEntry,
) {
    // Port 1 marks the designated entry; 0 marks bundle-only members
    let port = if entry.is_main { 1 } else { 0 };
    sdp.add(format!("m=audio {port} RTP/SAVPF 111 126"));
    sdp.add(format!("a=mid:{}", entry.mid()));

    // A leaver keeps its slot but describes nothing
    if entry.is_removed {
        sdp.add("a=inactive");
        return;
    }

    sdp.add("c=IN IP4 0.0.0.0");
    if let Some(transport) = transport {
        add_transport(sdp, transport);
    }
    sdp.add("a=rtcp-mux");

    sdp.add("a=rtpmap:111 opus/48000/2");
    sdp.add("a=rtpmap:126 telephone-event/8000");
    sdp.add("a=fmtp:111 minptime=10;useinbandfec=1;usedtx=1");
    sdp.add("a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level");

    if entry.is_main {
        sdp.add("a=sendrecv");
    } else {
        sdp.add("a=sendonly");
        sdp.add("a=bundle-only");
    }

    let ssrc = entry.ssrc;
    sdp.add(format!("a=ssrc:{ssrc} cname:stream{ssrc}"));
    sdp.add(format!("a=ssrc:{ssrc} msid:stream{ssrc} audio{ssrc}"));
    sdp.add(format!("a=ssrc:{ssrc} mslabel:audio{ssrc}"));
    sdp.add(format!("a=ssrc:{ssrc} label:audio{ssrc}"));
}

fn add_transport(sdp: &mut SdpLineBuffer, transport: &ConferenceTransport) {
    sdp.add(format!("a=ice-ufrag:{}", transport.ufrag));
    sdp.add(format!("a=ice-pwd:{}", transport.pwd));
    for fingerprint in &transport.fingerprints {
        sdp.add(format!(
            "a=fingerprint:{} {}",
            fingerprint.hash, fingerprint.fingerprint
        ));
        // The ICE-lite relay always awaits the handshake
        sdp.add(format!(
            "a=setup:{}",
            fingerprint.setup.unwrap_or(DtlsSetup::Passive)
        ));
    }
    for candidate in &transport.candidates {
        sdp.add(format!("a={candidate}"));
    }
}
