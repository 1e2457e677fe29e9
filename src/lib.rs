//! Epoch/slot grid shaping for dashboard panels.
/// Columnar input batches from the host data pipeline.
pub mod frame;
/// Grid building, cell decoding, and memoization.
pub mod grid;
/// Slot geometry, global numbering, and header markers.
pub mod layout;
/// Value-to-color encoding for grid cells.
pub mod color;
/// Tooltip state and hover/click responses.
pub mod hover;
