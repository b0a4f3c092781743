//! ICE candidate line parser (RFC 8839).
//!
//! Format: `candidate:<foundation> <component> <transport> <priority>
//! <conn-addr> <port> [typ <type>] [raddr <addr>] [rport <port>]
//! *(extensions)`
//!
//! Callers may pass the bare attribute value (`candidate:...`) or the full
//! SDP line (`a=candidate:...`); both forms are accepted.

use crate::error::{Error, Result};
use crate::types::sdp::{IceCandidate, TransportAddress};

/// Parses one ICE candidate line.
///
/// Returns `Ok(None)` when the input does not start with the candidate
/// marker (the line is something else entirely, not a malformed candidate).
/// A marker line with missing positional fields is a parse error; optional
/// trailing keys are parsed as alternating key/value pairs and unrecognized
/// keys are skipped, which keeps the parser forward compatible with new
/// candidate extensions.
pub fn parse_candidate(line: &str) -> Result<Option<IceCandidate>> {
    let trimmed = line.trim();
    let bare = trimmed.strip_prefix("a=").unwrap_or(trimmed);
    let value = match bare.strip_prefix("candidate:") {
        Some(value) => value,
        None => return Ok(None),
    };

    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() < 6 {
        return Err(Error::CandidateParse(format!(
            "insufficient positional fields: {trimmed}"
        )));
    }

    let port = parts[5]
        .parse::<u16>()
        .map_err(|_| Error::CandidateParse(format!("invalid port in candidate: {}", parts[5])))?;

    let mut candidate = IceCandidate {
        foundation: parts[0].to_string(),
        component: parts[1].to_string(),
        protocol: parts[2].to_string(),
        priority: parts[3].to_string(),
        address: TransportAddress {
            ip: parts[4].to_string(),
            port,
        },
        candidate_type: None,
        rel_address: None,
        generation: None,
        tcp_type: None,
        network_id: None,
        network_cost: None,
        username: None,
        sdp_string: bare.to_string(),
    };

    let mut rel_ip: Option<String> = None;
    let mut rel_port: Option<u16> = None;

    let mut idx = 6;
    while idx + 1 < parts.len() {
        let key = parts[idx];
        let val = parts[idx + 1];
        match key {
            "typ" => candidate.candidate_type = Some(val.to_string()),
            "raddr" => rel_ip = Some(val.to_string()),
            "rport" => {
                rel_port = Some(val.parse::<u16>().map_err(|_| {
                    Error::CandidateParse(format!("invalid rport in candidate: {val}"))
                })?);
            }
            "generation" => candidate.generation = Some(val.to_string()),
            "tcptype" => candidate.tcp_type = Some(val.to_string()),
            "network-id" => candidate.network_id = Some(val.to_string()),
            "network-cost" => candidate.network_cost = Some(val.to_string()),
            "ufrag" => candidate.username = Some(val.to_string()),
            _ => {}
        }
        idx += 2;
    }

    candidate.rel_address = match (rel_ip, rel_port) {
        (Some(ip), Some(port)) => Some(TransportAddress { ip, port }),
        (None, None) => None,
        _ => {
            return Err(Error::CandidateParse(format!(
                "raddr/rport must appear together: {trimmed}"
            )))
        }
    };

    Ok(Some(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_candidate() {
        let line = "candidate:1 1 udp 2130706431 10.0.1.1 8998 typ host";
        let candidate = parse_candidate(line).unwrap().unwrap();
        assert_eq!(candidate.foundation, "1");
        assert_eq!(candidate.component, "1");
        assert_eq!(candidate.protocol, "udp");
        assert_eq!(candidate.priority, "2130706431");
        assert_eq!(candidate.address.ip, "10.0.1.1");
        assert_eq!(candidate.address.port, 8998);
        assert_eq!(candidate.candidate_type.as_deref(), Some("host"));
        assert_eq!(candidate.rel_address, None);
        assert_eq!(candidate.sdp_string, line);
    }

    #[test]
    fn test_parse_full_sdp_line_form() {
        // The a= prefix is stripped; sdp_string keeps the attribute-value form
        let candidate = parse_candidate("a=candidate:1 1 udp 2130706431 10.0.1.1 8998 typ host")
            .unwrap()
            .unwrap();
        assert_eq!(candidate.foundation, "1");
        assert!(candidate.sdp_string.starts_with("candidate:"));
    }

    #[test]
    fn test_parse_srflx_candidate_with_extensions() {
        let line = "candidate:aL2X 2 udp 1694498815 192.0.2.5 12200 typ srflx \
                    raddr 10.0.1.5 rport 36082 generation 0 ufrag 01Ab network-id 1 network-cost 50";
        let candidate = parse_candidate(line).unwrap().unwrap();
        assert_eq!(candidate.candidate_type.as_deref(), Some("srflx"));
        let rel = candidate.rel_address.unwrap();
        assert_eq!(rel.ip, "10.0.1.5");
        assert_eq!(rel.port, 36082);
        assert_eq!(candidate.generation.as_deref(), Some("0"));
        assert_eq!(candidate.username.as_deref(), Some("01Ab"));
        assert_eq!(candidate.network_id.as_deref(), Some("1"));
        assert_eq!(candidate.network_cost.as_deref(), Some("50"));
    }

    #[test]
    fn test_parse_tcp_candidate() {
        let candidate =
            parse_candidate("candidate:4 1 tcp 2128609279 192.168.2.1 9 typ host tcptype active")
                .unwrap()
                .unwrap();
        assert_eq!(candidate.protocol, "tcp");
        assert_eq!(candidate.tcp_type.as_deref(), Some("active"));
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let candidate = parse_candidate(
            "candidate:1 1 udp 2130706431 10.0.1.1 8998 typ host future-key future-value",
        )
        .unwrap()
        .unwrap();
        assert_eq!(candidate.candidate_type.as_deref(), Some("host"));
    }

    #[test]
    fn test_non_candidate_line_returns_none() {
        assert!(parse_candidate("a=ice-ufrag:abcd").unwrap().is_none());
        assert!(parse_candidate("v=0").unwrap().is_none());
        assert!(parse_candidate("").unwrap().is_none());
    }

    #[test]
    fn test_malformed_candidates() {
        // Missing positional fields
        assert!(parse_candidate("candidate:1 1 udp 2130706431 10.0.1.1").is_err());
        assert!(parse_candidate("candidate:1 1 udp").is_err());
        // Invalid port
        assert!(parse_candidate("candidate:1 1 udp 2130706431 10.0.1.1 70000 typ host").is_err());
        // raddr without rport
        assert!(
            parse_candidate("candidate:1 1 udp 1694498815 192.0.2.5 12200 typ srflx raddr 10.0.1.5")
                .is_err()
        );
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let line = "candidate:aL2X 2 udp 1694498815 192.0.2.5 12200 typ srflx \
                    raddr 10.0.1.5 rport 36082 generation 0 ufrag 01Ab";
        let candidate = parse_candidate(line).unwrap().unwrap();
        let rendered = candidate.to_string();
        let reparsed = parse_candidate(&rendered).unwrap().unwrap();
        assert_eq!(reparsed.foundation, candidate.foundation);
        assert_eq!(reparsed.component, candidate.component);
        assert_eq!(reparsed.protocol, candidate.protocol);
        assert_eq!(reparsed.priority, candidate.priority);
        assert_eq!(reparsed.address, candidate.address);
        assert_eq!(reparsed.candidate_type, candidate.candidate_type);
        assert_eq!(reparsed.generation, candidate.generation);
        assert_eq!(reparsed.username, candidate.username);
    }
}
