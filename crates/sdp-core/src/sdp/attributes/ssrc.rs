//! SSRC attribute parsers (RFC 5576).
//!
//! Covers `a=ssrc:<ssrc> <attribute>[:<value>]` (only the SSRC id itself is
//! retained for negotiation state) and
//! `a=ssrc-group:<semantics> <ssrc> [<ssrc>...]`.

use crate::error::{Error, Result};
use crate::types::sdp::SsrcGroup;

/// Parses the SSRC id from the attribute value of an `a=ssrc:` line.
pub fn parse_ssrc_line(value: &str) -> Result<u32> {
    value
        .trim()
        .split_whitespace()
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| Error::SdpParse(format!("invalid ssrc: {value}")))
}

/// Parses the attribute value of an `a=ssrc-group:` line.
pub fn parse_ssrc_group(value: &str) -> Result<SsrcGroup> {
    let mut parts = value.trim().split_whitespace();

    let semantics = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::SdpParse(format!("ssrc-group without semantics: {value}")))?
        .to_string();

    let mut ssrcs = Vec::new();
    for part in parts {
        let ssrc = part
            .parse::<u32>()
            .map_err(|_| Error::SdpParse(format!("invalid ssrc in group: {part}")))?;
        ssrcs.push(ssrc);
    }

    if ssrcs.is_empty() {
        return Err(Error::SdpParse(format!("ssrc-group without ssrcs: {value}")));
    }

    Ok(SsrcGroup { semantics, ssrcs })
}
