//! Session-level pass of the SDP parser.
//!
//! Scans the lines before the first `m=` section for the session-level ICE
//! credential pair and the first DTLS fingerprint/setup pair. Only the first
//! fingerprint is kept at this level; negotiation state here never needs
//! more than one.

use tracing::error;

use crate::sdp::attributes::dtls;
use crate::sdp::parser::lines::SdpLines;
use crate::types::sdp::{Fingerprint, SessionDescription};

pub(crate) fn parse_session_section(
    lines: &SdpLines<'_>,
    session_end: usize,
    info: &mut SessionDescription,
) {
    info.ufrag = lines
        .lookup("a=ice-ufrag:", false, 0, Some(session_end))
        .map(str::to_string);
    info.pwd = lines
        .lookup("a=ice-pwd:", false, 0, Some(session_end))
        .map(str::to_string);
    if info.ufrag.is_some() != info.pwd.is_some() {
        error!("session-level ICE credentials are incomplete");
    }

    if let Some(value) = lines.lookup("a=fingerprint:", false, 0, Some(session_end)) {
        match dtls::parse_fingerprint(value) {
            Ok((hash, fingerprint)) => {
                // A fingerprint with no DTLS role cannot negotiate; the setup
                // line is expected whenever a fingerprint is present.
                let setup = lines
                    .lookup("a=setup:", true, 0, Some(session_end))
                    .and_then(|v| match dtls::parse_setup(v) {
                        Ok(setup) => Some(setup),
                        Err(err) => {
                            error!(%err, "discarding malformed setup role");
                            None
                        }
                    });
                info.fingerprints.push(Fingerprint {
                    hash,
                    fingerprint,
                    setup,
                });
            }
            Err(err) => error!(%err, "discarding malformed fingerprint"),
        }
    }
}
