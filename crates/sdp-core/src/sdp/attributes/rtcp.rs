//! RTCP feedback attribute parser (RFC 4585).
//!
//! Format: `a=rtcp-fb:<payload type> <feedback type> [<subtype>]`

use crate::error::{Error, Result};
use crate::types::sdp::RtcpFeedback;

/// Parses the attribute value of an `a=rtcp-fb:` line into the payload id
/// and one feedback record. Everything after the feedback type is kept as
/// the subtype (e.g. `ccm fir`).
pub fn parse_rtcp_fb(value: &str) -> Result<(u32, RtcpFeedback)> {
    let parts: Vec<&str> = value.split_whitespace().collect();

    let id = parts
        .first()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| Error::SdpParse(format!("invalid rtcp-fb payload id: {value}")))?;

    let kind = parts
        .get(1)
        .ok_or_else(|| Error::SdpParse(format!("rtcp-fb without feedback type: {value}")))?
        .to_string();

    let subtype = if parts.len() > 2 {
        Some(parts[2..].join(" "))
    } else {
        None
    };

    Ok((id, RtcpFeedback { kind, subtype }))
}
