//! SSRC reconciliation for group calls.
//!
//! The relay server pushes the full participant SSRC list on every update;
//! [`merge_ssrcs`] folds that snapshot into the call's authoritative list in
//! place. Entries are never spliced out — a leaver is tombstoned with
//! `is_removed` so that every surviving entry keeps its `m=` line position
//! across renegotiations — and the pass order (remove, add mains, add the
//! rest) pins the bundle ordering for new entries.

use tracing::debug;

use super::description::ConferenceSsrcEntry;

/// Explicit change list produced by one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsrcDelta {
    /// SSRCs appended by this merge, in append order
    pub added: Vec<u32>,
    /// SSRCs tombstoned by this merge
    pub removed: Vec<u32>,
}

impl SsrcDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Folds a server snapshot into `current` in place.
///
/// Returns `true` iff anything changed; callers skip regenerating and
/// re-sending SDP when it did not.
pub fn merge_ssrcs(current: &mut Vec<ConferenceSsrcEntry>, incoming: &[ConferenceSsrcEntry]) -> bool {
    !merge_ssrcs_detailed(current, incoming).is_empty()
}

/// Like [`merge_ssrcs`], returning the explicit add/remove lists.
///
/// Presence is judged by `ssrc` value alone: an entry already known under
/// the same SSRC is never replaced or resurrected, whatever its other
/// fields say. A participant rejoining therefore needs a fresh SSRC, or
/// arrives as a new main entry.
pub fn merge_ssrcs_detailed(
    current: &mut Vec<ConferenceSsrcEntry>,
    incoming: &[ConferenceSsrcEntry],
) -> SsrcDelta {
    let mut delta = SsrcDelta::default();

    // Removal pass: tombstone live entries the server no longer lists
    for entry in current.iter_mut() {
        if !entry.is_removed && !incoming.iter().any(|i| i.ssrc == entry.ssrc) {
            entry.is_removed = true;
            delta.removed.push(entry.ssrc);
            debug!(ssrc = entry.ssrc, name = %entry.name, "conference ssrc removed");
        }
    }

    // Main-add pass: the local/primary stream lands before any other
    // newly-seen stream from the same update, keeping bundle order stable
    for entry in incoming.iter().filter(|e| e.is_main) {
        if !current.iter().any(|c| c.ssrc == entry.ssrc) {
            delta.added.push(entry.ssrc);
            debug!(ssrc = entry.ssrc, name = %entry.name, "conference main ssrc added");
            current.push(entry.clone());
        }
    }

    // General-add pass: everything else the server listed that is new
    for entry in incoming {
        if !current.iter().any(|c| c.ssrc == entry.ssrc) {
            delta.added.push(entry.ssrc);
            debug!(ssrc = entry.ssrc, name = %entry.name, "conference ssrc added");
            current.push(entry.clone());
        }
    }

    delta
}
