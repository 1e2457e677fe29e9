use std::collections::HashSet;
use std::path::PathBuf;

use epochgrid::frame::Frame;
use epochgrid::grid::{self, PercentSlot, SlotStatus};
use epochgrid::layout;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    let raw = std::fs::read_to_string(&options.frame_path)
        .map_err(|err| format!("Failed to read {}: {err}", options.frame_path.display()))?;
    let frames = parse_frames(&raw)?;

    println!("Batch: {} ({} frames)", options.frame_path.display(), frames.len());
    if let Some(frame) = frames.first() {
        let fields: Vec<String> = frame
            .fields
            .iter()
            .map(|field| format!("{}({})", field.name, field.values.len()))
            .collect();
        println!("Fields: {}", fields.join(", "));
    }
    println!();

    match options.variant {
        Variant::Percent => print_percent(&frames),
        Variant::Status => print_status(&frames),
        Variant::Proposer => print_proposer(&frames),
    }
}

fn print_percent(frames: &[Frame]) -> Result<(), String> {
    let grid = grid::percent_grid(frames).map_err(|err| err.to_string())?;
    print_shape(grid.epochs.len(), grid.max_slots);
    for row in &grid.epochs {
        let mut observed = 0usize;
        let mut pending = 0usize;
        let mut sum = 0.0;
        for value in &row.values {
            match value {
                PercentSlot::Pending => pending += 1,
                PercentSlot::Value(value) => {
                    observed += 1;
                    sum += value;
                }
            }
        }
        if observed > 0 {
            println!(
                "- epoch {}: {observed} observed, {pending} pending, avg {:.1}%",
                row.epoch,
                sum / observed as f64
            );
        } else {
            println!("- epoch {}: all pending", row.epoch);
        }
    }
    Ok(())
}

fn print_status(frames: &[Frame]) -> Result<(), String> {
    let grid = grid::status_grid(frames).map_err(|err| err.to_string())?;
    print_shape(grid.epochs.len(), grid.max_slots);
    for row in &grid.epochs {
        let counts = status_counts(row.values.iter().copied());
        println!(
            "- epoch {}: {} slots ({} filled, {} missed, {} pending)",
            row.epoch,
            row.values.len(),
            counts.0,
            counts.1,
            counts.2
        );
    }
    Ok(())
}

fn print_proposer(frames: &[Frame]) -> Result<(), String> {
    let grid = grid::proposer_grid(frames).map_err(|err| err.to_string())?;
    print_shape(grid.epochs.len(), grid.max_slots);
    for row in &grid.epochs {
        let counts = status_counts(row.values.iter().map(|slot| slot.status));
        let proposers: HashSet<&str> = row
            .values
            .iter()
            .filter(|slot| !slot.proposer.is_empty())
            .map(|slot| slot.proposer.as_str())
            .collect();
        println!(
            "- epoch {}: {} slots ({} filled, {} missed, {} pending, {} proposers)",
            row.epoch,
            row.values.len(),
            counts.0,
            counts.1,
            counts.2,
            proposers.len()
        );
    }
    Ok(())
}

fn print_shape(rows: usize, max_slots: usize) {
    println!("Rows: {rows}");
    println!("Max slots: {max_slots}");
    let markers = layout::slot_markers(max_slots);
    println!(
        "Markers: {} (every {} slots)",
        markers.len(),
        layout::SLOTS_PER_MARKER
    );
}

fn status_counts(statuses: impl Iterator<Item = SlotStatus>) -> (usize, usize, usize) {
    let mut filled = 0usize;
    let mut missed = 0usize;
    let mut pending = 0usize;
    for status in statuses {
        match status {
            SlotStatus::Filled => filled += 1,
            SlotStatus::Missed => missed += 1,
            SlotStatus::Pending => pending += 1,
        }
    }
    (filled, missed, pending)
}

fn parse_frames(raw: &str) -> Result<Vec<Frame>, String> {
    if let Ok(frames) = serde_json::from_str::<Vec<Frame>>(raw) {
        return Ok(frames);
    }
    serde_json::from_str::<Frame>(raw)
        .map(|frame| vec![frame])
        .map_err(|err| format!("Failed to parse frame JSON: {err}"))
}

#[derive(Debug, Clone)]
struct CliOptions {
    frame_path: PathBuf,
    variant: Variant,
}

#[derive(Debug, Clone, Copy)]
enum Variant {
    Percent,
    Status,
    Proposer,
}

impl Variant {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "percent" => Ok(Self::Percent),
            "status" => Ok(Self::Status),
            "proposer" => Ok(Self::Proposer),
            other => Err(format!("Unknown variant: {other}\n\n{}", help_text())),
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<Option<CliOptions>, String> {
    let mut frame_path: Option<PathBuf> = None;
    let mut variant = Variant::Status;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--frame" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--frame requires a value".to_string())?;
                frame_path = Some(PathBuf::from(value));
            }
            "--variant" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--variant requires a value".to_string())?;
                variant = Variant::parse(value)?;
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }

    let Some(frame_path) = frame_path else {
        return Err("--frame is required".to_string());
    };
    Ok(Some(CliOptions {
        frame_path,
        variant,
    }))
}

fn help_text() -> String {
    [
        "epochgrid-inspect",
        "",
        "Usage:",
        "  epochgrid-inspect --frame <path-to-frame.json> [--variant percent|status|proposer]",
    ]
    .join("\n")
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("epochgrid=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}
