//! Turns flat per-slot query rows into dense, ordered per-epoch rows.
//!
//! Hosts hand over whatever their query returned. The builders group rows
//! by epoch, sort ascending, decode cell values, and right-pad incomplete
//! rows with a pending sentinel so every epoch renders at full width.

mod builder;
mod cache;
mod slot;

pub use cache::GridCache;
pub use slot::{PercentSlot, ProposerSlot, SlotStatus};

use thiserror::Error;

use builder::PadTarget;
use crate::frame::{EPOCH_FIELD, FILLED_FIELD, Frame, PROPOSER_FIELD, VALUE_FIELD};

/// Slots in a full epoch. Rows pad up to at least this many cells and the
/// derived grid capacity never reports less.
pub const DEFAULT_SLOTS_PER_EPOCH: usize = 180;

/// One grid row: an epoch and its ordered slot values.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochRow<V> {
    pub epoch: i64,
    pub values: Vec<V>,
}

/// Builder output: rows ascending by epoch plus the derived row capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochGrid<V> {
    /// One row per distinct epoch, oldest first.
    pub epochs: Vec<EpochRow<V>>,
    /// Largest observed row length, floored at [`DEFAULT_SLOTS_PER_EPOCH`].
    pub max_slots: usize,
}

impl<V> EpochGrid<V> {
    /// Grid with no rows and the default capacity.
    pub fn empty() -> Self {
        Self {
            epochs: Vec::new(),
            max_slots: DEFAULT_SLOTS_PER_EPOCH,
        }
    }

    /// True when the grid has no rows to render.
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
}

/// Errors surfaced by the grid builders.
#[derive(Debug, Error)]
pub enum GridError {
    /// Two consumed columns disagree about the batch row count.
    #[error("Column {field} has {found} rows, expected {expected}")]
    InvalidShape {
        field: String,
        expected: usize,
        found: usize,
    },
}

/// Build a percent grid: one `_value` percentage per slot, rows padded to
/// the fixed epoch capacity.
pub fn percent_grid(frames: &[Frame]) -> Result<EpochGrid<PercentSlot>, GridError> {
    let Some(frame) = first_frame(frames) else {
        return Ok(EpochGrid::empty());
    };
    let Some(epochs) = required_numbers(frame, EPOCH_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    let Some(values) = required_numbers(frame, VALUE_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    ensure_aligned(epochs.len(), VALUE_FIELD, values.len())?;
    Ok(builder::build_rows(
        epochs,
        values.iter().copied().map(PercentSlot::from_raw),
        PercentSlot::Pending,
        PadTarget::Fixed(DEFAULT_SLOTS_PER_EPOCH),
    ))
}

/// Build a status grid: one `_value` fill flag per slot, rows padded to
/// the largest observed row.
pub fn status_grid(frames: &[Frame]) -> Result<EpochGrid<SlotStatus>, GridError> {
    let Some(frame) = first_frame(frames) else {
        return Ok(EpochGrid::empty());
    };
    let Some(epochs) = required_numbers(frame, EPOCH_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    let Some(values) = required_numbers(frame, VALUE_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    ensure_aligned(epochs.len(), VALUE_FIELD, values.len())?;
    Ok(builder::build_rows(
        epochs,
        values.iter().copied().map(SlotStatus::from_raw),
        SlotStatus::Pending,
        PadTarget::Observed,
    ))
}

/// Build a proposer grid: paired `filled` and `proposer` columns per
/// slot, rows padded to the largest observed row.
pub fn proposer_grid(frames: &[Frame]) -> Result<EpochGrid<ProposerSlot>, GridError> {
    let Some(frame) = first_frame(frames) else {
        return Ok(EpochGrid::empty());
    };
    let Some(epochs) = required_numbers(frame, EPOCH_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    let Some(filled) = required_numbers(frame, FILLED_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    let Some(proposers) = required_text(frame, PROPOSER_FIELD) else {
        return Ok(EpochGrid::empty());
    };
    ensure_aligned(epochs.len(), FILLED_FIELD, filled.len())?;
    ensure_aligned(epochs.len(), PROPOSER_FIELD, proposers.len())?;
    let slots = filled
        .iter()
        .zip(proposers.iter())
        .map(|(&raw, proposer)| ProposerSlot::from_raw(raw, proposer.clone()));
    Ok(builder::build_rows(
        epochs,
        slots,
        ProposerSlot::pending(),
        PadTarget::Observed,
    ))
}

fn first_frame(frames: &[Frame]) -> Option<&Frame> {
    let Some(frame) = frames.first() else {
        tracing::debug!("Grid build skipped: batch has no frames");
        return None;
    };
    if frame.fields.is_empty() {
        tracing::debug!("Grid build skipped: first frame has no fields");
        return None;
    }
    Some(frame)
}

fn required_numbers<'a>(frame: &'a Frame, name: &str) -> Option<&'a [f64]> {
    let column = frame.numbers(name);
    if column.is_none() {
        tracing::debug!("Grid build skipped: column {name} missing or not numeric");
    }
    column
}

fn required_text<'a>(frame: &'a Frame, name: &str) -> Option<&'a [String]> {
    let column = frame.text(name);
    if column.is_none() {
        tracing::debug!("Grid build skipped: column {name} missing or not text");
    }
    column
}

fn ensure_aligned(expected: usize, field: &str, found: usize) -> Result<(), GridError> {
    if found == expected {
        Ok(())
    } else {
        Err(GridError::InvalidShape {
            field: field.to_string(),
            expected,
            found,
        })
    }
}


#[cfg(test)]
mod variant_tests {
    use super::*;
    use crate::frame::Field;

    fn frame_of(fields: Vec<Field>) -> Vec<Frame> {
        vec![Frame { fields }]
    }

    #[test]
    fn percent_rows_decode_values_and_pad_to_fixed_capacity() {
        let frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![4.0, 4.0, 4.0]),
            Field::numbers(VALUE_FIELD, vec![100.0, 42.5, -1.0]),
        ]);
        let grid = percent_grid(&frames).expect("percent grid");

        let row = &grid.epochs[0];
        assert_eq!(row.epoch, 4);
        assert_eq!(row.values.len(), DEFAULT_SLOTS_PER_EPOCH);
        assert_eq!(row.values[0], PercentSlot::Value(100.0));
        assert_eq!(row.values[1], PercentSlot::Value(42.5));
        assert_eq!(row.values[2], PercentSlot::Pending);
        assert_eq!(row.values[179], PercentSlot::Pending);
    }

    #[test]
    fn status_rows_keep_arrival_order_within_an_epoch() {
        let frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![5.0, 5.0, 7.0]),
            Field::numbers(VALUE_FIELD, vec![1.0, 0.0, 1.0]),
        ]);
        let grid = status_grid(&frames).expect("status grid");

        assert_eq!(grid.epochs.len(), 2);
        assert_eq!(grid.epochs[0].epoch, 5);
        assert_eq!(
            grid.epochs[0].values,
            vec![SlotStatus::Filled, SlotStatus::Missed]
        );
        assert_eq!(grid.epochs[1].values.len(), DEFAULT_SLOTS_PER_EPOCH);
        assert_eq!(grid.epochs[1].values[0], SlotStatus::Filled);
        assert_eq!(grid.epochs[1].values[1], SlotStatus::Pending);
    }

    #[test]
    fn proposer_rows_pair_status_with_addresses() {
        let frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![2.0, 2.0]),
            Field::numbers(FILLED_FIELD, vec![1.0, 0.0]),
            Field::text(PROPOSER_FIELD, vec!["0xaa".into(), "0xbb".into()]),
        ]);
        let grid = proposer_grid(&frames).expect("proposer grid");

        let row = &grid.epochs[0];
        assert_eq!(row.values[0], ProposerSlot::from_raw(1.0, "0xaa"));
        assert_eq!(row.values[1], ProposerSlot::from_raw(0.0, "0xbb"));
        assert_eq!(row.values[2], ProposerSlot::pending());
        assert_eq!(row.values.len(), DEFAULT_SLOTS_PER_EPOCH);
    }

    #[test]
    fn proposer_grid_requires_both_extra_columns() {
        let frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![2.0]),
            Field::numbers(FILLED_FIELD, vec![1.0]),
        ]);
        assert!(proposer_grid(&frames).expect("no proposer column").is_empty());
    }

    #[test]
    fn proposer_column_length_is_checked_too() {
        let frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![2.0, 2.0]),
            Field::numbers(FILLED_FIELD, vec![1.0, 0.0]),
            Field::text(PROPOSER_FIELD, vec!["0xaa".into()]),
        ]);
        let err = proposer_grid(&frames).expect_err("short proposer column");
        let GridError::InvalidShape { field, .. } = err;
        assert_eq!(field, PROPOSER_FIELD);
    }

    #[test]
    fn later_frames_in_the_batch_are_ignored() {
        let mut frames = frame_of(vec![
            Field::numbers(EPOCH_FIELD, vec![1.0]),
            Field::numbers(VALUE_FIELD, vec![1.0]),
        ]);
        frames.push(Frame {
            fields: vec![
                Field::numbers(EPOCH_FIELD, vec![9.0]),
                Field::numbers(VALUE_FIELD, vec![0.0]),
            ],
        });
        let grid = status_grid(&frames).expect("multi-frame batch");
        assert_eq!(grid.epochs.len(), 1);
        assert_eq!(grid.epochs[0].epoch, 1);
    }
}
