//! RTP map attribute parser (RFC 8866 §6.6).
//!
//! Format: `a=rtpmap:<payload type> <encoding name>/<clock rate>[/<channels>]`

use nom::{
    character::complete::{char, space1},
    combinator::{map, opt},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{Error, Result};
use crate::sdp::attributes::common::{positive_integer, token};
use crate::types::sdp::PayloadType;

fn rtpmap_parser(input: &str) -> IResult<&str, PayloadType> {
    map(
        tuple((
            positive_integer,
            preceded(space1, token),
            preceded(char('/'), positive_integer),
            opt(preceded(char('/'), positive_integer)),
        )),
        |(id, name, clockrate, channels)| PayloadType {
            id,
            name: name.to_string(),
            clockrate,
            // 0 marks an rtpmap line that carried no channel parameter
            channels: channels.unwrap_or(0),
            feedback_types: Vec::new(),
            parameters: Vec::new(),
        },
    )(input)
}

/// Parses the attribute value of an `a=rtpmap:` line into a payload type
/// record with empty feedback/parameter lists (those arrive on separate
/// `a=rtcp-fb:`/`a=fmtp:` lines).
pub fn parse_rtpmap(value: &str) -> Result<PayloadType> {
    match rtpmap_parser(value.trim()) {
        Ok((_, payload_type)) => Ok(payload_type),
        Err(_) => Err(Error::SdpParse(format!("invalid rtpmap: {value}"))),
    }
}
