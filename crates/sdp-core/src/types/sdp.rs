//! SDP data model for two-party call negotiation.
//!
//! These types are the structured form of the subset of SDP (RFC 4566/8866)
//! exchanged during call setup: ICE credentials and candidates (RFC 8839),
//! DTLS fingerprints (RFC 8842), payload types, RTP header extensions
//! (RFC 8285) and SSRC assignments (RFC 5576).
//!
//! A [`SessionDescription`] is rebuilt wholesale from every remote SDP
//! received and is never patched in place; partial mutation of a negotiated
//! description risks an inconsistent offer/answer pairing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sdp::attributes::direction::MediaDirection;
use crate::sdp::attributes::dtls::DtlsSetup;

/// An IP/port pair carried on an ICE candidate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAddress {
    /// IP address (v4 or v6 literal, or an mDNS hostname)
    pub ip: String,
    /// Port number
    pub port: u16,
}

/// One parsed ICE candidate (RFC 8839).
///
/// The numeric positional fields (`foundation`, `component`, `protocol`,
/// `priority`) are kept as the strings they were parsed from so that
/// re-serialization cannot alter the wire form the remote peer produced.
/// `sdp_string` retains the verbatim input line for runtimes that prefer
/// passing the raw candidate payload through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceCandidate {
    /// Candidate foundation (groups candidates from the same base)
    pub foundation: String,
    /// Component id ("1" for RTP, "2" for RTCP)
    pub component: String,
    /// Transport protocol (e.g. "udp", "tcp")
    pub protocol: String,
    /// Candidate priority
    pub priority: String,
    /// Connection address
    pub address: TransportAddress,
    /// Candidate type (host, srflx, prflx, relay)
    #[serde(default)]
    pub candidate_type: Option<String>,
    /// Related address for reflexive/relay candidates
    #[serde(default)]
    pub rel_address: Option<TransportAddress>,
    /// ICE restart generation counter
    #[serde(default)]
    pub generation: Option<String>,
    /// TCP candidate type (active, passive, so)
    #[serde(default)]
    pub tcp_type: Option<String>,
    /// Network interface id the candidate was gathered on
    #[serde(default)]
    pub network_id: Option<String>,
    /// Relative network cost hint
    #[serde(default)]
    pub network_cost: Option<String>,
    /// ICE username fragment echoed on the candidate line
    #[serde(default)]
    pub username: Option<String>,
    /// The verbatim candidate line this record was parsed from
    #[serde(default)]
    pub sdp_string: String,
}

impl fmt::Display for IceCandidate {
    /// Renders the candidate in the fixed wire attribute order:
    /// `candidate:<foundation> <component> <protocol> <priority> <ip> <port>`
    /// followed by `typ`, `raddr`, `rport`, `tcptype`, `generation`, `ufrag`,
    /// `network-id`, `network-cost` for whichever optional fields are set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "candidate:{} {} {} {} {} {}",
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            self.address.ip,
            self.address.port
        )?;

        if let Some(typ) = &self.candidate_type {
            write!(f, " typ {typ}")?;
        }
        if let Some(rel) = &self.rel_address {
            write!(f, " raddr {} rport {}", rel.ip, rel.port)?;
        }
        if let Some(tcp_type) = &self.tcp_type {
            write!(f, " tcptype {tcp_type}")?;
        }
        if let Some(generation) = &self.generation {
            write!(f, " generation {generation}")?;
        }
        if let Some(username) = &self.username {
            write!(f, " ufrag {username}")?;
        }
        if let Some(network_id) = &self.network_id {
            write!(f, " network-id {network_id}")?;
        }
        if let Some(network_cost) = &self.network_cost {
            write!(f, " network-cost {network_cost}")?;
        }

        Ok(())
    }
}

/// A DTLS certificate fingerprint binding (RFC 8842).
///
/// `hash` and `fingerprint` are only meaningful together; a description
/// carrying one without the other is invalid and is discarded at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Hash algorithm name, e.g. "sha-256"
    pub hash: String,
    /// Colon-separated hex digest
    pub fingerprint: String,
    /// DTLS connection role
    #[serde(default)]
    pub setup: Option<DtlsSetup>,
}

/// One RTCP feedback mechanism declared for a payload type (`a=rtcp-fb`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpFeedback {
    /// Feedback type, e.g. "nack", "ccm", "transport-cc"
    pub kind: String,
    /// Feedback subtype, e.g. "pli" or "fir"
    #[serde(default)]
    pub subtype: Option<String>,
}

/// One RTP payload type declaration (`a=rtpmap` plus its associated
/// `a=rtcp-fb` and `a=fmtp` lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadType {
    /// RTP payload type id
    pub id: u32,
    /// Encoding name, e.g. "opus", "VP8"
    pub name: String,
    /// Clock rate in Hertz
    pub clockrate: u32,
    /// Channel count; 0 when the rtpmap line carried no channel parameter
    #[serde(default)]
    pub channels: u32,
    /// RTCP feedback mechanisms, in line order
    #[serde(default)]
    pub feedback_types: Vec<RtcpFeedback>,
    /// Format parameters as ordered key/value pairs, in declaration order
    #[serde(default)]
    pub parameters: Vec<(String, String)>,
}

/// One negotiated RTP header extension (`a=extmap`, RFC 8285).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpExtension {
    /// Extension id (1-255)
    pub id: u16,
    /// Extension URI
    pub uri: String,
}

/// An SSRC grouping (`a=ssrc-group`, RFC 5576), e.g. FID pairing a media
/// SSRC with its retransmission SSRC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrcGroup {
    /// Grouping semantics, e.g. "FID", "SIM"
    pub semantics: String,
    /// Member SSRCs, in declaration order
    pub ssrcs: Vec<u32>,
}

/// Media section kind. Only audio and video participate in negotiation
/// state; other kinds (e.g. `application`) are recognized by the parser but
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "audio" => Ok(MediaKind::Audio),
            "video" => Ok(MediaKind::Video),
            other => Err(crate::error::Error::SdpParse(format!(
                "unsupported media kind: {other}"
            ))),
        }
    }
}

/// One parsed `m=` section (audio or video).
///
/// `payload_types` preserves source ordering, which determines codec
/// preference on negotiation; payload ids are unique within one description.
/// `ufrag`/`pwd` are only set when the medium carries its own ICE
/// credentials instead of the session-level pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescription {
    /// Media kind this section describes
    pub kind: MediaKind,
    /// Bundle media id (`a=mid`)
    #[serde(default)]
    pub mid: Option<String>,
    /// Primary SSRC; absent for inactive media
    #[serde(default)]
    pub ssrc: Option<u32>,
    /// SSRC groupings, in declaration order
    #[serde(default)]
    pub ssrc_groups: Vec<SsrcGroup>,
    /// Payload type declarations, in declaration order
    #[serde(default)]
    pub payload_types: Vec<PayloadType>,
    /// RTP header extensions, in declaration order
    #[serde(default)]
    pub rtp_extensions: Vec<RtpExtension>,
    /// Media-level ICE username fragment
    #[serde(default)]
    pub ufrag: Option<String>,
    /// Media-level ICE password
    #[serde(default)]
    pub pwd: Option<String>,
    /// Media-level DTLS role
    #[serde(default)]
    pub setup: Option<DtlsSetup>,
    /// Media direction
    #[serde(default)]
    pub dir: Option<MediaDirection>,
}

impl MediaDescription {
    /// Creates an empty description for the given media kind.
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            mid: None,
            ssrc: None,
            ssrc_groups: Vec::new(),
            payload_types: Vec::new(),
            rtp_extensions: Vec::new(),
            ufrag: None,
            pwd: None,
            setup: None,
            dir: None,
        }
    }

    /// Finds the payload type declared with the given id.
    pub fn payload_type(&self, id: u32) -> Option<&PayloadType> {
        self.payload_types.iter().find(|p| p.id == id)
    }

    pub(crate) fn payload_type_mut(&mut self, id: u32) -> Option<&mut PayloadType> {
        self.payload_types.iter_mut().find(|p| p.id == id)
    }

    /// All SSRCs this medium sends on: the members of the first SSRC group
    /// when one is declared, the primary SSRC otherwise.
    pub fn send_ssrcs(&self) -> Vec<u32> {
        if let Some(group) = self.ssrc_groups.first() {
            group.ssrcs.clone()
        } else {
            self.ssrc.into_iter().collect()
        }
    }
}

/// The structured form of one parsed SDP document.
///
/// `ufrag`/`pwd` hold the session-level ICE credentials and stay empty when
/// every medium carries its own pair. Only the first session-level
/// fingerprint is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    /// Session-level ICE username fragment
    #[serde(default)]
    pub ufrag: Option<String>,
    /// Session-level ICE password
    #[serde(default)]
    pub pwd: Option<String>,
    /// DTLS fingerprints, session level first
    #[serde(default)]
    pub fingerprints: Vec<Fingerprint>,
    /// Audio media section
    #[serde(default)]
    pub audio: Option<MediaDescription>,
    /// Video media section
    #[serde(default)]
    pub video: Option<MediaDescription>,
}

impl SessionDescription {
    /// The media section of the given kind, if present.
    pub fn media(&self, kind: MediaKind) -> Option<&MediaDescription> {
        match kind {
            MediaKind::Audio => self.audio.as_ref(),
            MediaKind::Video => self.video.as_ref(),
        }
    }

    /// Whether the description carries any negotiable media at all.
    pub fn has_media(&self) -> bool {
        self.audio.is_some() || self.video.is_some()
    }

    /// Media sections in bundle order (audio before video).
    pub fn media_sections(&self) -> impl Iterator<Item = &MediaDescription> {
        self.audio.iter().chain(self.video.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_display_host() {
        let candidate = IceCandidate {
            foundation: "1".to_string(),
            component: "1".to_string(),
            protocol: "udp".to_string(),
            priority: "2130706431".to_string(),
            address: TransportAddress {
                ip: "10.0.1.1".to_string(),
                port: 8998,
            },
            candidate_type: Some("host".to_string()),
            rel_address: None,
            generation: Some("0".to_string()),
            tcp_type: None,
            network_id: None,
            network_cost: None,
            username: None,
            sdp_string: String::new(),
        };

        assert_eq!(
            candidate.to_string(),
            "candidate:1 1 udp 2130706431 10.0.1.1 8998 typ host generation 0"
        );
    }

    #[test]
    fn test_candidate_display_full_attribute_order() {
        // Every optional attribute set: the rendering order is fixed
        // regardless of how the source line ordered them.
        let candidate = IceCandidate {
            foundation: "aL2X".to_string(),
            component: "2".to_string(),
            protocol: "udp".to_string(),
            priority: "1694498815".to_string(),
            address: TransportAddress {
                ip: "192.0.2.5".to_string(),
                port: 12200,
            },
            candidate_type: Some("srflx".to_string()),
            rel_address: Some(TransportAddress {
                ip: "10.0.1.5".to_string(),
                port: 36082,
            }),
            generation: Some("0".to_string()),
            tcp_type: None,
            network_id: Some("1".to_string()),
            network_cost: Some("50".to_string()),
            username: Some("01Ab".to_string()),
            sdp_string: String::new(),
        };

        assert_eq!(
            candidate.to_string(),
            "candidate:aL2X 2 udp 1694498815 192.0.2.5 12200 typ srflx \
             raddr 10.0.1.5 rport 36082 generation 0 ufrag 01Ab network-id 1 network-cost 50"
        );
    }

    #[test]
    fn test_send_ssrcs_prefers_group() {
        let mut media = MediaDescription::new(MediaKind::Video);
        media.ssrc = Some(100);
        media.ssrc_groups.push(SsrcGroup {
            semantics: "FID".to_string(),
            ssrcs: vec![100, 101],
        });
        assert_eq!(media.send_ssrcs(), vec![100, 101]);

        let mut plain = MediaDescription::new(MediaKind::Audio);
        plain.ssrc = Some(555);
        assert_eq!(plain.send_ssrcs(), vec![555]);

        let inactive = MediaDescription::new(MediaKind::Audio);
        assert!(inactive.send_ssrcs().is_empty());
    }
}
