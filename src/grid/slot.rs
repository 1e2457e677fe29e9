//! Cell values decoded from raw column data. Raw `-1` is the shared
//! "not observed yet" sentinel that padding inserts and hosts dim.

/// A cell in a percent grid: how much of an epoch slot was used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentSlot {
    /// Slot not observed yet (raw `-1`, also the padding value).
    Pending,
    /// Observed percentage, nominally 0-100.
    Value(f64),
}

impl PercentSlot {
    /// Decode a raw column value.
    pub fn from_raw(raw: f64) -> Self {
        if raw == -1.0 {
            Self::Pending
        } else {
            Self::Value(raw)
        }
    }

    /// True for the padding sentinel.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Human-readable status, e.g. `87%` or `pending`.
    pub fn label(self) -> String {
        match self {
            Self::Pending => "pending".to_string(),
            Self::Value(value) => format!("{value}%"),
        }
    }
}

/// Fill status of a cell in a slot grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    /// A block landed in this slot (raw `1`).
    Filled,
    /// The slot passed without a block (raw `0`).
    Missed,
    /// Slot not observed yet (any other raw value, including padding).
    Pending,
}

impl SlotStatus {
    /// Decode a raw column value.
    pub fn from_raw(raw: f64) -> Self {
        if raw == 1.0 {
            Self::Filled
        } else if raw == 0.0 {
            Self::Missed
        } else {
            Self::Pending
        }
    }

    /// True for the padding sentinel.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Human-readable status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Missed => "missed",
            Self::Pending => "pending",
        }
    }
}

/// A cell in a proposer grid: fill status plus the address scheduled to
/// propose in that slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ProposerSlot {
    pub status: SlotStatus,
    pub proposer: String,
}

impl ProposerSlot {
    /// Decode a raw status value and its paired proposer address.
    pub fn from_raw(raw: f64, proposer: impl Into<String>) -> Self {
        Self {
            status: SlotStatus::from_raw(raw),
            proposer: proposer.into(),
        }
    }

    /// The padding sentinel: pending status, no proposer.
    pub fn pending() -> Self {
        Self {
            status: SlotStatus::Pending,
            proposer: String::new(),
        }
    }

    /// True for slots nothing has been observed or scheduled for.
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Human-readable status, shared with the plain slot grid.
    pub fn label(&self) -> &'static str {
        self.status.label()
    }
}
