//! Shared line-buffer and rendering helpers for the SDP builders.
//!
//! Consuming WebRTC engines are sensitive to attribute order even though the
//! SDP grammar is not, so everything here renders through an append-only
//! line buffer and the helpers are called in a fixed sequence by each
//! dialect builder.

use crate::sdp::attributes::dtls::DtlsSetup;
use crate::types::sdp::{MediaDescription, PayloadType, RtpExtension, SessionDescription};

/// Whether the rendered description is an offer or an answer. Only the
/// default DTLS role differs: an offer leaves the choice open (`actpass`),
/// an answer takes the initiating side (`active`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SdpType {
    Offer,
    Answer,
}

impl SdpType {
    pub fn default_setup(&self) -> DtlsSetup {
        match self {
            SdpType::Offer => DtlsSetup::Actpass,
            SdpType::Answer => DtlsSetup::Active,
        }
    }
}

/// Append-only CRLF line buffer.
pub(crate) struct SdpLineBuffer {
    lines: Vec<String>,
}

impl SdpLineBuffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn finish(self) -> String {
        let mut out = self.lines.join("\r\n");
        out.push_str("\r\n");
        out
    }
}

/// The common preamble: version, origin (carrying the session id), session
/// name and timing lines.
pub(crate) fn add_header(sdp: &mut SdpLineBuffer, session_id: u64) {
    sdp.add("v=0");
    sdp.add(format!("o=- {session_id} 2 IN IP4 0.0.0.0"));
    sdp.add("s=-");
    sdp.add("t=0 0");
}

/// The minimal valid description rendered when there is no media to
/// describe at all; engines reject a bundle of empty `m=` blocks.
pub(crate) fn zero_media_skeleton(session_id: u64) -> String {
    let mut sdp = SdpLineBuffer::new();
    add_header(&mut sdp, session_id);
    sdp.add("a=msid-semantic:WMS *");
    sdp.finish()
}

/// Media sections in bundle order, paired with their effective mid (the
/// declared `a=mid`, or the bundle position when the source had none).
pub(crate) fn media_with_mids(info: &SessionDescription) -> Vec<(&MediaDescription, String)> {
    info.media_sections()
        .enumerate()
        .map(|(index, media)| {
            let mid = media.mid.clone().unwrap_or_else(|| index.to_string());
            (media, mid)
        })
        .collect()
}

/// Space-joined payload ids for the `m=` line, in declaration order.
pub(crate) fn payload_ids(media: &MediaDescription) -> String {
    media
        .payload_types
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders one `a=extmap` line per negotiated header extension, in order.
pub(crate) fn add_extmap(sdp: &mut SdpLineBuffer, extensions: &[RtpExtension]) {
    for extension in extensions {
        sdp.add(format!("a=extmap:{} {}", extension.id, extension.uri));
    }
}

/// Renders `rtpmap`/`rtcp-fb`/`fmtp` lines per payload, in the same order
/// the payloads arrived; that order is the codec preference.
pub(crate) fn add_payload_types(sdp: &mut SdpLineBuffer, payload_types: &[PayloadType]) {
    for payload_type in payload_types {
        if payload_type.channels > 0 {
            sdp.add(format!(
                "a=rtpmap:{} {}/{}/{}",
                payload_type.id, payload_type.name, payload_type.clockrate, payload_type.channels
            ));
        } else {
            sdp.add(format!(
                "a=rtpmap:{} {}/{}",
                payload_type.id, payload_type.name, payload_type.clockrate
            ));
        }

        for feedback in &payload_type.feedback_types {
            match &feedback.subtype {
                Some(subtype) => sdp.add(format!(
                    "a=rtcp-fb:{} {} {}",
                    payload_type.id, feedback.kind, subtype
                )),
                None => sdp.add(format!("a=rtcp-fb:{} {}", payload_type.id, feedback.kind)),
            }
        }

        if !payload_type.parameters.is_empty() {
            let parameters = payload_type
                .parameters
                .iter()
                .map(|(key, value)| {
                    if value.is_empty() {
                        key.clone()
                    } else {
                        format!("{key}={value}")
                    }
                })
                .collect::<Vec<_>>()
                .join(";");
            sdp.add(format!("a=fmtp:{} {}", payload_type.id, parameters));
        }
    }
}

/// Renders the medium's `ssrc-group` line (when grouped) and the four
/// `ssrc:` attribute lines (`cname`, `msid`, `mslabel`, `label`) per SSRC.
///
/// The stream name concatenates every SSRC the medium sends on with
/// underscores (`stream100_101`); the track label is the media kind plus
/// the first SSRC (`video100`).
pub(crate) fn add_ssrc(sdp: &mut SdpLineBuffer, media: &MediaDescription) {
    let ssrcs = media.send_ssrcs();
    let Some(&first) = ssrcs.first() else { return };

    let stream_name = format!(
        "stream{}",
        ssrcs
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("_")
    );
    let track_name = format!("{}{}", media.kind, first);

    for group in &media.ssrc_groups {
        let members = group
            .ssrcs
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        sdp.add(format!("a=ssrc-group:{} {}", group.semantics, members));
    }

    for &ssrc in &ssrcs {
        sdp.add(format!("a=ssrc:{ssrc} cname:{stream_name}"));
        sdp.add(format!("a=ssrc:{ssrc} msid:{stream_name} {track_name}"));
        sdp.add(format!("a=ssrc:{ssrc} mslabel:{track_name}"));
        sdp.add(format!("a=ssrc:{ssrc} label:{track_name}"));
    }
}
