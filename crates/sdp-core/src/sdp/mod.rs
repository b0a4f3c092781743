//! Session Description Protocol support for two-party calls.
//!
//! This module pairs a lenient [`parser`] with three engine-dialect
//! [`builder`]s behind one facade:
//!
//! - **Parser**: [`parser::parse_sdp`] turns an offer/answer body into a
//!   structured [`crate::types::sdp::SessionDescription`]; misses degrade
//!   the record instead of failing it.
//! - **Builders**: [`builder::P2pSdpBuilder`] renders offers, answers and
//!   candidates in the dialect of the engine the call session runs on.
//! - **Attributes**: [`attributes`] holds the per-attribute grammars shared
//!   by both sides.
//!
//! The group-call dialect spoken to the conference relay lives separately
//! in [`crate::conference`]; it shares SDP syntax but is not a real
//! two-party negotiation and deliberately does not go through these
//! builders.

pub mod attributes;
pub mod builder;
pub mod parser;

pub use attributes::candidate::parse_candidate;
pub use builder::{BrowserEngine, IceCandidateInit, P2pSdpBuilder};
pub use parser::parse_sdp;
