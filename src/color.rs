//! Value-to-color encoding for grid cells.
//! Cell colors carry data, so they live here rather than in host theming:
//! percent cells ride a linear ramp between two anchors, slot cells use
//! discrete status colors, and pending cells always read as neutral.

use egui::Color32;

use crate::grid::{PercentSlot, SlotStatus};

/// Anchor and status colors for grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPalette {
    /// Percent-ramp anchor at zero.
    pub good: Color32,
    /// Percent-ramp anchor at one hundred.
    pub bad: Color32,
    /// Neutral color for pending cells, distinct from both anchors.
    pub pending: Color32,
    /// Discrete color for filled slots.
    pub filled: Color32,
    /// Discrete color for missed slots.
    pub missed: Color32,
}

/// Stock palette. Hosts that theme their chrome can substitute their own
/// `GridPalette`; the encodings below work on any anchor pair.
pub fn palette() -> GridPalette {
    GridPalette {
        good: Color32::from_rgb(50, 205, 50),
        bad: Color32::from_rgb(220, 20, 60),
        pending: Color32::from_rgb(140, 146, 155),
        filled: Color32::from_rgb(102, 176, 136),
        missed: Color32::from_rgb(220, 20, 60),
    }
}

impl Default for GridPalette {
    fn default() -> Self {
        palette()
    }
}

impl GridPalette {
    /// Color of a percent cell: `good` blended toward `bad` by
    /// `value / 100`, clamped to the anchors. Pending cells are neutral.
    pub fn percent_color(&self, slot: PercentSlot) -> Color32 {
        match slot {
            PercentSlot::Pending => self.pending,
            PercentSlot::Value(value) => {
                let factor = (value / 100.0).clamp(0.0, 1.0) as f32;
                lerp_rgb(self.good, self.bad, factor)
            }
        }
    }

    /// Discrete color of a slot cell.
    pub fn status_color(&self, status: SlotStatus) -> Color32 {
        match status {
            SlotStatus::Filled => self.filled,
            SlotStatus::Missed => self.missed,
            SlotStatus::Pending => self.pending,
        }
    }
}

/// Paint opacity for a cell; pending cells render dimmed.
pub fn slot_opacity(is_pending: bool) -> f32 {
    if is_pending { 0.3 } else { 1.0 }
}

fn lerp_rgb(from: Color32, to: Color32, factor: f32) -> Color32 {
    Color32::from_rgb(
        lerp_channel(from.r(), to.r(), factor),
        lerp_channel(from.g(), to.g(), factor),
        lerp_channel(from.b(), to.b(), factor),
    )
}

fn lerp_channel(from: u8, to: u8, factor: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * factor).round() as u8
}
