//! Tooltip state and hover/click responses for grid hosts.
//! Handlers build plain values from the hovered cell; the host keeps one
//! `TooltipState` per panel and feeds pointer enter/leave into it.

use crate::grid::{PercentSlot, ProposerSlot, SlotStatus};
use crate::layout;

/// Payload for the hovered cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Ready-to-render text, e.g. `Slot 365: filled`.
    pub text: String,
    /// Horizontal anchor within the row's slot area.
    pub anchor_x: f32,
}

/// The single tooltip a panel shows at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    current: Option<Tooltip>,
}

impl TooltipState {
    /// Create an empty tooltip state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tooltip currently on screen, if any.
    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }

    /// True while a tooltip is showing.
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the visible tooltip (pointer entered a cell).
    pub fn show(&mut self, tooltip: Tooltip) {
        self.current = Some(tooltip);
    }

    /// Hide the tooltip (pointer left the grid).
    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Tooltip for a hovered percent cell: `Block <global>: <label>`.
pub fn percent_tooltip(
    epoch: i64,
    slot_index: usize,
    max_slots: usize,
    value: PercentSlot,
) -> Tooltip {
    Tooltip {
        text: format!(
            "Block {}: {}",
            layout::global_slot(epoch, slot_index, max_slots),
            value.label()
        ),
        anchor_x: layout::slot_center_x(slot_index),
    }
}

/// Tooltip for a hovered slot cell: `Slot <global>: <label>`.
pub fn status_tooltip(
    epoch: i64,
    slot_index: usize,
    max_slots: usize,
    status: SlotStatus,
) -> Tooltip {
    Tooltip {
        text: format!(
            "Slot {}: {}",
            layout::global_slot(epoch, slot_index, max_slots),
            status.label()
        ),
        anchor_x: layout::slot_center_x(slot_index),
    }
}

/// Tooltip for a hovered proposer cell; reads the same as its status.
pub fn proposer_tooltip(
    epoch: i64,
    slot_index: usize,
    max_slots: usize,
    slot: &ProposerSlot,
) -> Tooltip {
    status_tooltip(epoch, slot_index, max_slots, slot.status)
}

/// Proposer address to hand the host on click, `None` when the cell has
/// nothing worth copying.
pub fn clicked_proposer(slot: &ProposerSlot) -> Option<&str> {
    if slot.proposer.is_empty() {
        None
    } else {
        Some(slot.proposer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_tooltips_number_blocks_globally() {
        let tooltip = percent_tooltip(2, 5, 180, PercentSlot::Value(87.0));
        assert_eq!(tooltip.text, "Block 365: 87%");
        assert_eq!(tooltip.anchor_x, layout::slot_center_x(5));
    }

    #[test]
    fn pending_percent_tooltips_say_so() {
        let tooltip = percent_tooltip(0, 0, 180, PercentSlot::Pending);
        assert_eq!(tooltip.text, "Block 0: pending");
    }

    #[test]
    fn status_tooltips_number_slots_globally() {
        let tooltip = status_tooltip(2, 5, 180, SlotStatus::Filled);
        assert_eq!(tooltip.text, "Slot 365: filled");

        let wide = status_tooltip(2, 5, 200, SlotStatus::Missed);
        assert_eq!(wide.text, "Slot 405: missed");
    }

    #[test]
    fn proposer_tooltips_show_the_slot_status() {
        let slot = ProposerSlot::from_raw(0.0, "0xaa");
        let tooltip = proposer_tooltip(1, 2, 180, &slot);
        assert_eq!(tooltip.text, "Slot 182: missed");
    }

    #[test]
    fn show_replaces_and_clear_hides() {
        let mut state = TooltipState::new();
        assert!(!state.is_visible());

        state.show(status_tooltip(0, 0, 180, SlotStatus::Filled));
        assert!(state.is_visible());

        state.show(status_tooltip(0, 1, 180, SlotStatus::Missed));
        assert_eq!(state.current().map(|t| t.text.as_str()), Some("Slot 1: missed"));

        state.clear();
        assert!(state.current().is_none());
    }

    #[test]
    fn click_returns_the_address_when_present() {
        let slot = ProposerSlot::from_raw(1.0, "0xf077b491");
        assert_eq!(clicked_proposer(&slot), Some("0xf077b491"));
    }

    #[test]
    fn click_ignores_cells_without_an_address() {
        assert_eq!(clicked_proposer(&ProposerSlot::pending()), None);
        let filled_without_address = ProposerSlot::from_raw(1.0, "");
        assert_eq!(clicked_proposer(&filled_without_address), None);
    }
}
