//! RTP header extension map attribute parser (RFC 8285).
//!
//! Format: `a=extmap:<id>[/<direction>] <uri>`
//!
//! A direction suffix on the id is accepted and discarded; negotiation here
//! only tracks the id/URI binding.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space1},
    combinator::{map, opt, verify},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{Error, Result};
use crate::sdp::attributes::common::{positive_integer, token};
use crate::types::sdp::RtpExtension;

/// Parser for extension ID (1-14 for one-byte headers, 15-255 for two-byte)
fn extension_id_parser(input: &str) -> IResult<&str, u16> {
    verify(map(positive_integer, |n| n as u16), |&id| {
        (1..=255).contains(&id)
    })(input)
}

fn uri_parser(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_ascii_whitespace())(input)
}

fn extmap_parser(input: &str) -> IResult<&str, RtpExtension> {
    map(
        tuple((
            extension_id_parser,
            opt(preceded(char('/'), token)),
            preceded(space1, uri_parser),
        )),
        |(id, _direction, uri)| RtpExtension {
            id,
            uri: uri.to_string(),
        },
    )(input)
}

/// Parses the attribute value of an `a=extmap:` line.
pub fn parse_extmap(value: &str) -> Result<RtpExtension> {
    match extmap_parser(value.trim()) {
        Ok((_, extension)) => Ok(extension),
        Err(_) => Err(Error::SdpParse(format!("invalid extmap: {value}"))),
    }
}
