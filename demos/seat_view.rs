//! Fly the camera from the overview to a seat and report its view limits

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use seatplan_core::SeatingPlan;
use seatplan_view::{Camera, OrbitCamera, SeatSelection, ViewConfig, ViewController};

#[derive(Parser, Debug)]
#[command(about = "Preview the seat view of a seating feed", version)]
struct Args {
    /// Seating feed document
    #[arg(long, value_name = "PATH", default_value = "demos/data/sample_feed.json")]
    feed: PathBuf,

    /// Seat identifiers to visit in order (may repeat)
    #[arg(long = "seat", value_name = "ID", required = true)]
    seats: Vec<String>,

    /// Optional JSON view configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Simulated frame rate of the render loop
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if args.fps == 0 {
        bail!("--fps must be positive");
    }

    let config = match &args.config {
        Some(path) => ViewConfig::load(path)
            .with_context(|| format!("loading view config {}", path.display()))?,
        None => ViewConfig::default(),
    };

    let plan = load_plan(&args.feed)?;
    let placements = plan.placements(&config.placement);
    info!(
        "{} seats in sections {:?}",
        plan.seats.len(),
        plan.seat_map.section_names().collect::<Vec<_>>()
    );

    let camera = OrbitCamera::new(Camera::default(), config.easing);
    let mut controller = ViewController::new(camera, config);
    controller.load(&plan);

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    for seat_id in &args.seats {
        let placement = placements
            .iter()
            .find(|p| &p.seat_id == seat_id)
            .with_context(|| format!("seat {} is not in the feed", seat_id))?;

        let token = controller.select_seat(SeatSelection::from_placement(placement))?;
        let mut frames = 0u32;
        while controller.tick(frame) != Some(token) {
            frames += 1;
        }

        let limits = controller.camera().limits();
        let camera = controller.camera().camera();
        println!("{} ({} / row {}, {})", seat_id, placement.section, placement.row, placement.color);
        println!("  arrived after {} frames", frames + 1);
        println!("  camera   {:?}", camera.position);
        println!("  target   {:?}", camera.target);
        println!(
            "  azimuth  [{:.1}°, {:.1}°]",
            limits.min.to_degrees(),
            limits.max.to_degrees()
        );
    }

    if let Some(token) = controller.return_to_overview() {
        while controller.tick(frame) != Some(token) {}
        println!("back at overview {:?}", controller.camera().camera().position);
    }

    Ok(())
}

fn load_plan(path: &Path) -> Result<SeatingPlan> {
    let document = seatplan_io::read_document(path)
        .with_context(|| format!("reading seating feed {}", path.display()))?;
    document
        .into_plan()
        .with_context(|| format!("indexing seating feed {}", path.display()))
}
