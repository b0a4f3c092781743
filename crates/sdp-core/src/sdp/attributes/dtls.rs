//! DTLS attribute parsers (RFC 8842).
//!
//! Covers `a=fingerprint:<hash-function> <digest>` and `a=setup:<role>`,
//! which together bind the DTLS-SRTP handshake to the signaled session.

use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{char, hex_digit1, space1},
    combinator::{map, verify},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sdp::attributes::common::token;

/// Valid hash functions for DTLS fingerprints
static VALID_HASH_FUNCTIONS: [&str; 5] = ["sha-1", "sha-256", "sha-384", "sha-512", "md5"];

/// DTLS connection role (`a=setup`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtlsSetup {
    /// Willing to take either role; the answerer picks
    Actpass,
    /// Initiates the DTLS handshake
    Active,
    /// Awaits the DTLS handshake
    Passive,
}

impl DtlsSetup {
    pub fn as_str(&self) -> &'static str {
        match self {
            DtlsSetup::Actpass => "actpass",
            DtlsSetup::Active => "active",
            DtlsSetup::Passive => "passive",
        }
    }
}

impl fmt::Display for DtlsSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DtlsSetup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "actpass" => Ok(DtlsSetup::Actpass),
            "active" => Ok(DtlsSetup::Active),
            "passive" => Ok(DtlsSetup::Passive),
            other => Err(Error::SdpParse(format!("invalid setup role: {other}"))),
        }
    }
}

/// Parser for hash function part of fingerprint
fn hash_function_parser(input: &str) -> IResult<&str, &str> {
    verify(token, |hash: &str| {
        VALID_HASH_FUNCTIONS.contains(&hash.to_lowercase().as_str())
    })(input)
}

/// Parser for fingerprint value (colon-separated hex octets)
fn fingerprint_value_parser(input: &str) -> IResult<&str, String> {
    map(
        separated_list1(char(':'), verify(hex_digit1, |hex: &str| hex.len() <= 2)),
        |segments| segments.join(":"),
    )(input)
}

fn fingerprint_parser(input: &str) -> IResult<&str, (String, String)> {
    map(
        separated_pair(hash_function_parser, space1, fingerprint_value_parser),
        |(hash, fingerprint)| (hash.to_lowercase(), fingerprint),
    )(input)
}

/// Parses fingerprint attribute: `<hash-function> <fingerprint>`
pub fn parse_fingerprint(value: &str) -> Result<(String, String)> {
    let value = value.trim();
    match fingerprint_parser(value) {
        Ok((rest, (hash, fingerprint))) if rest.is_empty() => Ok((hash, fingerprint)),
        Ok(_) => Err(Error::SdpParse(format!(
            "invalid fingerprint, trailing content: {value}"
        ))),
        Err(_) => Err(Error::SdpParse(format!("invalid fingerprint: {value}"))),
    }
}

/// Parses setup attribute: `<role>`
pub fn parse_setup(value: &str) -> Result<DtlsSetup> {
    value.trim().parse()
}
