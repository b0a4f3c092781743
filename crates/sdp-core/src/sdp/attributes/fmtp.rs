//! Format parameters attribute parser (RFC 8866 §6.6).
//!
//! Format: `a=fmtp:<payload type> <key=value>[;<key=value>...]`

use nom::{character::complete::space1, sequence::terminated, IResult};

use crate::error::{Error, Result};
use crate::sdp::attributes::common::positive_integer;

fn fmtp_id_parser(input: &str) -> IResult<&str, u32> {
    terminated(positive_integer, space1)(input)
}

/// Parses the attribute value of an `a=fmtp:` line into the payload id and
/// its parameter list. Parameter order is preserved; a bare token without
/// `=` is kept as a key with an empty value.
pub fn parse_fmtp(value: &str) -> Result<(u32, Vec<(String, String)>)> {
    let value = value.trim();
    let (rest, id) = fmtp_id_parser(value)
        .map_err(|_| Error::SdpParse(format!("invalid fmtp: {value}")))?;

    let mut parameters = Vec::new();
    for part in rest.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once('=') {
            Some((key, val)) => parameters.push((key.to_string(), val.to_string())),
            None => parameters.push((part.to_string(), String::new())),
        }
    }

    if parameters.is_empty() {
        return Err(Error::SdpParse(format!("fmtp without parameters: {value}")));
    }

    Ok((id, parameters))
}
