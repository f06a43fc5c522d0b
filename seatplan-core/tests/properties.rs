//! Randomized property checks for the seat index, boundary locator and
//! angle calculator.

use approx::assert_relative_eq;
use rand::prelude::*;
use seatplan_core::*;

const SECTIONS: [&str; 4] = ["Stalls", "Dress Circle", "Upper Circle", "Box"];

/// Build a random but reproducible seat feed
fn random_seats(rng: &mut StdRng, count: usize) -> Vec<Seat> {
    (0..count)
        .map(|i| {
            let section = SECTIONS[rng.gen_range(0..SECTIONS.len())];
            let row = ((b'A' + rng.gen_range(0..8u8)) as char).to_string();
            Seat::new(
                format!("{}-{}-{}", section, row, i),
                row,
                rng.gen_range(-500.0..500.0),
                rng.gen_range(0.0..800.0),
            )
        })
        .collect()
}

#[test]
fn test_every_seat_lands_in_exactly_one_bucket() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let count = rng.gen_range(1..300);
        let seats = random_seats(&mut rng, count);
        let map = index(&seats).unwrap();

        assert_eq!(map.seat_count(), seats.len());
        for seat in &seats {
            let hits = map
                .iter()
                .filter(|(_, _, indexed)| indexed.id == seat.id)
                .count();
            assert_eq!(hits, 1, "seat {} indexed {} times", seat.id, hits);

            let bucket = map.row(seat.section(), &seat.row).unwrap();
            assert!(bucket.contains(seat));
        }
    }
}

#[test]
fn test_bucket_contents_follow_input_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let seats = random_seats(&mut rng, 200);
    let first = index(&seats).unwrap();
    let second = index(&seats).unwrap();
    assert_eq!(first, second);

    for (section, row, bucket) in first
        .sections()
        .flat_map(|(s, rows)| rows.iter().map(move |(r, b)| (s, r, b)))
    {
        let expected: Vec<&Seat> = seats
            .iter()
            .filter(|seat| seat.section() == section && &seat.row == row)
            .collect();
        let actual: Vec<&Seat> = bucket.iter().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_centroid_is_componentwise_mean() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let count = rng.gen_range(1..500);
        let seats = random_seats(&mut rng, count);
        let boundary = locate(&seats).unwrap();

        let n = seats.len() as f64;
        let mean_x = seats.iter().map(|s| s.x).sum::<f64>() / n;
        let mean_y = seats.iter().map(|s| s.y).sum::<f64>() / n;
        assert_relative_eq!(boundary.centroid.x, mean_x, epsilon = 1e-9);
        assert_relative_eq!(boundary.centroid.y, mean_y, epsilon = 1e-9);
    }
}

#[test]
fn test_extremes_are_seats_and_bound_the_plan() {
    let mut rng = StdRng::seed_from_u64(31);
    let seats = random_seats(&mut rng, 400);
    let b = locate(&seats).unwrap();

    for extreme in [b.leftmost, b.rightmost, b.frontmost, b.rearmost] {
        assert!(seats.iter().any(|s| s.position() == extreme));
    }
    for seat in &seats {
        assert!(seat.x >= b.leftmost.x && seat.x <= b.rightmost.x);
        assert!(seat.y >= b.frontmost.y && seat.y <= b.rearmost.y);
    }
}

#[test]
fn test_angle_symmetric_under_double_reversal() {
    let mut rng = StdRng::seed_from_u64(43);
    let point = |rng: &mut StdRng| Point2d::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
    for _ in 0..1000 {
        let (a1, a2, b1, b2) = (point(&mut rng), point(&mut rng), point(&mut rng), point(&mut rng));
        let forward = angle_between(&a1, &a2, &b1, &b2).unwrap();
        let reversed = angle_between(&a2, &a1, &b2, &b1).unwrap();
        assert_eq!(forward, reversed);
        assert!((0.0..=180.0).contains(&forward));
        assert_eq!(angle_between(&a1, &a2, &a1, &a2).unwrap(), 0.0);
        assert_eq!(angle_between(&a1, &a2, &a2, &a1).unwrap(), 180.0);
    }
}
