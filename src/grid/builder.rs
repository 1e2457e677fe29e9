//! Grouping, ordering, and padding shared by every grid variant.

use std::collections::BTreeMap;

use super::{DEFAULT_SLOTS_PER_EPOCH, EpochGrid, EpochRow};

/// Right-padding target for complete rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PadTarget {
    /// Pad to the largest observed row.
    Observed,
    /// Pad to a fixed capacity regardless of what was observed.
    Fixed(usize),
}

/// Group one value per input row under its epoch, order epochs ascending,
/// and right-pad each row with the sentinel.
///
/// The first (oldest) row stays unpadded when more than one epoch is
/// present: the window opened mid-epoch, so its leading slots were never
/// observed and the row renders short. A single-epoch grid pads that row
/// like any other.
pub(super) fn build_rows<V: Clone>(
    epochs: &[f64],
    values: impl Iterator<Item = V>,
    sentinel: V,
    target: PadTarget,
) -> EpochGrid<V> {
    let mut groups: BTreeMap<i64, Vec<V>> = BTreeMap::new();
    let mut max_slots = DEFAULT_SLOTS_PER_EPOCH;
    for (&epoch, value) in epochs.iter().zip(values) {
        let group = groups.entry(epoch as i64).or_default();
        group.push(value);
        max_slots = max_slots.max(group.len());
    }

    let row_count = groups.len();
    let pad_to = match target {
        PadTarget::Observed => max_slots,
        PadTarget::Fixed(capacity) => capacity,
    };
    let epochs = groups
        .into_iter()
        .enumerate()
        .map(|(index, (epoch, mut values))| {
            let stays_short = index == 0 && row_count > 1;
            if !stays_short && values.len() < pad_to {
                values.resize(pad_to, sentinel.clone());
            }
            EpochRow { epoch, values }
        })
        .collect();

    EpochGrid { epochs, max_slots }
}
