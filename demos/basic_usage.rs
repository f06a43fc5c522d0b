//! Basic usage example for seatplan
//!
//! This example demonstrates fundamental operations:
//! - Decoding a seating feed
//! - Walking the section/row seat map
//! - Boundary points and seat placement
//! - Seat-view azimuth limits

use std::time::Duration;

use seatplan_core::{angle_between, reflect_obtuse, Point2d};
use seatplan_io::{load_plan, SeatingPlanDocument, StaticSource};
use seatplan_view::{OrbitCamera, SeatSelection, ViewConfig, ViewController};

const FEED: &str = r#"{
    "Seats": [
        {"Iid": "Stalls-A-1", "Row": "A", "X": 40, "Y": 100},
        {"Iid": "Stalls-A-2", "Row": "A", "X": 100, "Y": 100},
        {"Iid": "Stalls-A-3", "Row": "A", "X": 160, "Y": 100},
        {"Iid": "Stalls-B-1", "Row": "B", "X": 70, "Y": 130},
        {"Iid": "Stalls-B-2", "Row": "B", "X": 130, "Y": 130},
        {"Iid": "Circle-A-1", "Row": "A", "X": 20, "Y": 170, "Category": "premium"},
        {"Iid": "Circle-A-2", "Row": "A", "X": 180, "Y": 170, "Category": "premium"}
    ],
    "Shapes": [{"X": 60, "Y": 10, "Width": 80, "Height": 20}],
    "Width": 200,
    "Height": 200
}"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("seatplan Example");
    println!("================");

    let document = SeatingPlanDocument::from_json_str(FEED)?;
    let source = StaticSource::new().with_document(42, document);
    let plan = load_plan(&source, 42)?;
    println!("Loaded {} seats", plan.seats.len());

    println!("\nSeat map:");
    for (section, rows) in plan.seat_map.sections() {
        for (row, seats) in rows {
            let ids: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
            println!("- {} row {}: {:?}", section, row, ids);
        }
    }

    if let Some(boundary) = &plan.boundary {
        println!("\nBoundary:");
        println!("- leftmost  {:?}", boundary.leftmost);
        println!("- rightmost {:?}", boundary.rightmost);
        println!("- frontmost {:?}", boundary.frontmost);
        println!("- rearmost  {:?}", boundary.rearmost);
        println!("- centroid  {:?}", boundary.centroid);

        let seat = Point2d::new(100.0, 130.0);
        let anchor = plan.forward_anchor();
        let left = angle_between(&seat, &anchor, &boundary.leftmost, &seat)?;
        println!(
            "\nAngle from forward line to left wing at {:?}: {:.1}° (folded {:.1}°)",
            seat,
            left,
            reflect_obtuse(left)
        );
    }

    let config = ViewConfig::default();
    let placements = plan.placements(&config.placement);
    println!("\nPlacements:");
    for placement in &placements {
        println!(
            "- {:<11} world {:?} colour {}",
            placement.seat_id, placement.world, placement.color
        );
    }

    let mut controller = ViewController::new(OrbitCamera::default(), config);
    controller.load(&plan);

    println!("\nSeat views:");
    for placement in &placements {
        let token = controller.select_seat(SeatSelection::from_placement(placement))?;
        while controller.tick(Duration::from_millis(100)) != Some(token) {}
        let limits = controller.camera().limits();
        println!(
            "- {:<11} azimuth [{:.1}°, {:.1}°]",
            placement.seat_id,
            limits.min.to_degrees(),
            limits.max.to_degrees()
        );
    }

    Ok(())
}
