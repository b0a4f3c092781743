//! Per-media pass of the SDP parser.
//!
//! Walks one `m=` block (from its `m=` line up to the next `m=` line or the
//! end of the document) and assembles a [`MediaDescription`]. Attribute
//! parse failures degrade the description instead of aborting it: the line
//! is logged and skipped, and negotiation proceeds on whatever survived.

use tracing::{debug, error};

use crate::sdp::attributes::{dtls, extmap, fmtp, rtcp, rtpmap, ssrc};
use crate::sdp::parser::lines::SdpLines;
use crate::types::sdp::{MediaDescription, MediaKind, RtcpFeedback};

pub(crate) fn parse_media_block(
    lines: &SdpLines<'_>,
    start: usize,
    end: usize,
) -> Option<MediaDescription> {
    let m_line = lines.get(start)?.strip_prefix("m=")?;
    let kind_token = m_line.split_whitespace().next().unwrap_or("");
    let kind: MediaKind = match kind_token.parse() {
        Ok(kind) => kind,
        Err(_) => {
            // e.g. an application/data-channel section; scanned but not part
            // of the negotiation state
            debug!(media = kind_token, "skipping non-negotiated media section");
            return None;
        }
    };

    let mut media = MediaDescription::new(kind);
    let mut fmtp_by_id: Vec<(u32, Vec<(String, String)>)> = Vec::new();
    let mut feedback_by_id: Vec<(u32, RtcpFeedback)> = Vec::new();

    for index in start + 1..end {
        let Some(line) = lines.get(index) else { break };

        if let Some(value) = line.strip_prefix("a=extmap:") {
            match extmap::parse_extmap(value) {
                Ok(extension) => media.rtp_extensions.push(extension),
                Err(err) => error!(%err, line, "skipping extmap line"),
            }
        } else if let Some(value) = line.strip_prefix("a=fmtp:") {
            match fmtp::parse_fmtp(value) {
                Ok((id, parameters)) => fmtp_by_id.push((id, parameters)),
                Err(err) => error!(%err, line, "skipping fmtp line"),
            }
        } else if let Some(value) = line.strip_prefix("a=rtcp-fb:") {
            match rtcp::parse_rtcp_fb(value) {
                Ok((id, feedback)) => feedback_by_id.push((id, feedback)),
                Err(err) => error!(%err, line, "skipping rtcp-fb line"),
            }
        } else if let Some(value) = line.strip_prefix("a=rtpmap:") {
            match rtpmap::parse_rtpmap(value) {
                Ok(payload_type) => {
                    // Payload ids are unique within one media section; a
                    // duplicate declaration never displaces the first one
                    if media.payload_type(payload_type.id).is_some() {
                        debug!(id = payload_type.id, "duplicate payload id ignored");
                    } else {
                        media.payload_types.push(payload_type);
                    }
                }
                Err(err) => error!(%err, line, "skipping rtpmap line"),
            }
        } else if let Some(value) = line.strip_prefix("a=ssrc-group:") {
            if media.ssrc_groups.is_empty() {
                match ssrc::parse_ssrc_group(value) {
                    Ok(group) => media.ssrc_groups.push(group),
                    Err(err) => error!(%err, line, "skipping ssrc-group line"),
                }
            }
        } else if let Some(value) = line.strip_prefix("a=ssrc:") {
            if media.ssrc.is_none() {
                match ssrc::parse_ssrc_line(value) {
                    Ok(id) => media.ssrc = Some(id),
                    Err(err) => error!(%err, line, "skipping ssrc line"),
                }
            }
        } else if let Some(value) = line.strip_prefix("a=mid:") {
            media.mid = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("a=ice-ufrag:") {
            media.ufrag = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("a=ice-pwd:") {
            media.pwd = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("a=setup:") {
            match dtls::parse_setup(value) {
                Ok(setup) => media.setup = Some(setup),
                Err(err) => error!(%err, line, "skipping setup line"),
            }
        } else if let Some(flag) = line.strip_prefix("a=") {
            if let Ok(direction) = flag.parse() {
                media.dir = Some(direction);
            }
        }
    }

    // fmtp/rtcp-fb lines may precede the rtpmap they refer to; attach after
    // the full block walk
    for (id, parameters) in fmtp_by_id {
        match media.payload_type_mut(id) {
            Some(payload_type) => payload_type.parameters = parameters,
            None => debug!(id, "fmtp for undeclared payload type"),
        }
    }
    for (id, feedback) in feedback_by_id {
        match media.payload_type_mut(id) {
            Some(payload_type) => payload_type.feedback_types.push(feedback),
            None => debug!(id, "rtcp-fb for undeclared payload type"),
        }
    }

    Some(media)
}
