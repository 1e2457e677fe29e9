//! Slot geometry shared by grid hosts: global numbering, header marker
//! ticks, and the horizontal offsets cells occupy inside a row. All
//! positions are logical pixels relative to a row's slot area.

/// Rendered edge length of one slot cell.
pub const SLOT_SIZE: f32 = 16.0;
/// Horizontal gap between neighboring cells.
pub const SLOT_GAP: f32 = 2.0;
/// Slot-index stride between header marker ticks.
pub const SLOTS_PER_MARKER: usize = 12;
/// Width of the epoch label column to the left of each row.
pub const EPOCH_LABEL_WIDTH: f32 = 60.0;
/// Gap between the epoch label column and slot zero.
pub const EPOCH_LABEL_MARGIN: f32 = 8.0;
/// Vertical space reserved under the marker header row.
pub const HEADER_BOTTOM_MARGIN: f32 = 24.0;

/// A header tick: the slot index it labels and its horizontal center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotMarker {
    pub slot_index: usize,
    pub position: f32,
}

/// Global linear slot identifier: `epoch * max_slots + slot_index`.
///
/// Keyed on the epoch number itself rather than its row position, so the
/// identifier stays stable while the window scrolls.
pub fn global_slot(epoch: i64, slot_index: usize, max_slots: usize) -> i64 {
    epoch * max_slots as i64 + slot_index as i64
}

/// Horizontal center of a slot cell within the row's slot area.
pub fn slot_center_x(slot_index: usize) -> f32 {
    slot_index as f32 * (SLOT_SIZE + SLOT_GAP) + SLOT_SIZE / 2.0
}

/// Left edge of the slot area, past the epoch label column.
pub fn row_origin_x() -> f32 {
    EPOCH_LABEL_WIDTH + EPOCH_LABEL_MARGIN
}

/// Top edge of the first row below a host header block of the given
/// height; the band between the two is always the reserved margin.
pub fn grid_origin_y(header_height: f32) -> f32 {
    header_height + HEADER_BOTTOM_MARGIN
}

/// Header ticks every [`SLOTS_PER_MARKER`] slots. Ceiling division keeps
/// a tick over a final partial interval.
pub fn slot_markers(max_slots: usize) -> Vec<SlotMarker> {
    let count = max_slots.div_ceil(SLOTS_PER_MARKER);
    (0..count)
        .map(|tick| {
            let slot_index = tick * SLOTS_PER_MARKER;
            SlotMarker {
                slot_index,
                position: slot_center_x(slot_index),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_slot_multiplies_the_epoch_number() {
        assert_eq!(global_slot(2, 5, 180), 365);
        assert_eq!(global_slot(0, 17, 180), 17);
        assert_eq!(global_slot(2, 5, 200), 405);
    }

    #[test]
    fn slot_centers_step_by_cell_pitch() {
        assert_eq!(slot_center_x(0), 8.0);
        assert_eq!(slot_center_x(1), 26.0);
        assert_eq!(slot_center_x(12), 224.0);
    }

    #[test]
    fn slot_area_starts_past_the_label_column() {
        assert_eq!(row_origin_x(), 68.0);
    }

    #[test]
    fn rows_start_one_margin_below_the_header() {
        assert_eq!(grid_origin_y(20.0), 44.0);
        assert_eq!(grid_origin_y(0.0), HEADER_BOTTOM_MARGIN);
    }

    #[test]
    fn full_epoch_gets_fifteen_markers() {
        let markers = slot_markers(180);
        assert_eq!(markers.len(), 15);
        assert_eq!(markers[0], SlotMarker { slot_index: 0, position: 8.0 });
        assert_eq!(markers[14].slot_index, 168);
    }

    #[test]
    fn partial_trailing_interval_still_gets_a_marker() {
        let markers = slot_markers(181);
        assert_eq!(markers.len(), 16);
        assert_eq!(markers[15].slot_index, 180);
    }

    #[test]
    fn zero_capacity_yields_no_markers() {
        assert!(slot_markers(0).is_empty());
    }

    #[test]
    fn marker_positions_align_with_their_cells() {
        for marker in slot_markers(60) {
            assert_eq!(marker.position, slot_center_x(marker.slot_index));
        }
    }
}
