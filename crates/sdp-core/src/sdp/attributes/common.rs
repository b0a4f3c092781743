//! Common parsing utilities shared among the attribute parsers.

use nom::{
    bytes::complete::take_while1,
    character::complete::digit1,
    combinator::map_res,
    IResult,
};

/// Parses a token: alphanumeric characters plus the punctuation that shows
/// up in encoding names and grouping semantics (e.g. "telephone-event",
/// "H264", "FID").
pub fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'))(input)
}

/// Parses a positive integer
pub fn positive_integer(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}
