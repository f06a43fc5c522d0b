//! Section/row index over the flat seat feed

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::seat::Seat;

/// Seats of one section, keyed by row label in first-seen order
pub type RowMap = IndexMap<String, Vec<Seat>>;

/// Seats grouped as `section -> row -> seats`
///
/// Sections and rows iterate in the order they were first seen; seats within
/// a row keep their input order. Buckets are created on first use and are
/// never merged or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatMap {
    sections: IndexMap<String, RowMap>,
}

impl SeatMap {
    /// Create an empty seat map
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Index a flat seat sequence
    ///
    /// Fails with [`Error::InvalidSeatRecord`] on the first seat missing its
    /// identifier or row label; nothing is dropped silently.
    pub fn index(seats: &[Seat]) -> Result<Self> {
        let mut map = Self::new();
        for (position, seat) in seats.iter().enumerate() {
            map.insert_at(position, seat.clone())?;
        }
        Ok(map)
    }

    /// Append a seat to its `(section, row)` bucket
    pub fn insert(&mut self, seat: Seat) -> Result<()> {
        let position = self.seat_count();
        self.insert_at(position, seat)
    }

    fn insert_at(&mut self, position: usize, seat: Seat) -> Result<()> {
        if seat.id.trim().is_empty() {
            return Err(Error::invalid_seat(position, "missing seat identifier"));
        }
        if seat.row.trim().is_empty() {
            return Err(Error::invalid_seat(
                position,
                format!("seat {} has no row label", seat.id),
            ));
        }

        let section = seat.section().to_string();
        let row = seat.row.clone();
        self.sections
            .entry(section)
            .or_default()
            .entry(row)
            .or_default()
            .push(seat);
        Ok(())
    }

    /// Number of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of seats across all buckets
    pub fn seat_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|rows| rows.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in first-seen order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &RowMap)> {
        self.sections
            .iter()
            .map(|(name, rows)| (name.as_str(), rows))
    }

    /// Section names in first-seen order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Rows of a section
    pub fn section(&self, section: &str) -> Option<&RowMap> {
        self.sections.get(section)
    }

    /// Ordinal of a section in first-seen order
    pub fn section_position(&self, section: &str) -> Option<usize> {
        self.sections.get_index_of(section)
    }

    /// Seats of a single `(section, row)` bucket
    pub fn row(&self, section: &str, row: &str) -> Option<&[Seat]> {
        self.sections
            .get(section)
            .and_then(|rows| rows.get(row))
            .map(Vec::as_slice)
    }

    /// Visit every seat with its section and row keys
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Seat)> {
        self.sections.iter().flat_map(|(section, rows)| {
            rows.iter().flat_map(move |(row, seats)| {
                seats
                    .iter()
                    .map(move |seat| (section.as_str(), row.as_str(), seat))
            })
        })
    }

    /// Look a seat up by identifier
    pub fn find(&self, id: &str) -> Option<&Seat> {
        let section = match id.split_once(crate::seat::SEAT_ID_SEPARATOR) {
            Some((section, _)) => section,
            None => id,
        };
        self.sections
            .get(section)?
            .values()
            .flat_map(|seats| seats.iter())
            .find(|seat| seat.id == id)
    }
}

/// Group seats into a [`SeatMap`]
pub fn index(seats: &[Seat]) -> Result<SeatMap> {
    SeatMap::index(seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_seats() -> Vec<Seat> {
        vec![
            Seat::new("A-1-1", "1", 0.0, 0.0),
            Seat::new("A-1-2", "1", 10.0, 0.0),
            Seat::new("B-1-1", "1", 0.0, 20.0),
        ]
    }

    #[test]
    fn test_index_scenario() {
        let seats = scenario_seats();
        let map = index(&seats).unwrap();

        assert_eq!(map.section_count(), 2);
        assert_eq!(map.section_names().collect::<Vec<_>>(), vec!["A", "B"]);

        let a1 = map.row("A", "1").unwrap();
        assert_eq!(a1, &seats[0..2]);
        let b1 = map.row("B", "1").unwrap();
        assert_eq!(b1, &seats[2..3]);
        assert_eq!(map.seat_count(), 3);
    }

    #[test]
    fn test_index_empty() {
        let map = index(&[]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.seat_count(), 0);
    }

    #[test]
    fn test_missing_identifier_is_rejected() {
        let seats = vec![
            Seat::new("A-1-1", "1", 0.0, 0.0),
            Seat::new("", "1", 1.0, 0.0),
        ];
        match index(&seats) {
            Err(Error::InvalidSeatRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidSeatRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_row_is_rejected() {
        let seats = vec![Seat::new("A-1-1", "", 0.0, 0.0)];
        assert!(matches!(
            index(&seats),
            Err(Error::InvalidSeatRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_blank_labels_are_rejected() {
        let blank_row = vec![
            Seat::new("A-1-1", "1", 0.0, 0.0),
            Seat::new("A-1-2", "  ", 1.0, 0.0),
        ];
        assert!(matches!(
            index(&blank_row),
            Err(Error::InvalidSeatRecord { index: 1, .. })
        ));

        let blank_id = vec![Seat::new(" \t", "1", 0.0, 0.0)];
        assert!(matches!(
            index(&blank_id),
            Err(Error::InvalidSeatRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_rows_keep_first_seen_order() {
        let seats = vec![
            Seat::new("S-B-1", "B", 0.0, 0.0),
            Seat::new("S-A-1", "A", 0.0, 1.0),
            Seat::new("S-B-2", "B", 1.0, 0.0),
        ];
        let map = index(&seats).unwrap();
        let rows: Vec<&str> = map
            .section("S")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(rows, vec!["B", "A"]);
        assert_eq!(map.row("S", "B").unwrap().len(), 2);
    }

    #[test]
    fn test_insert_reuses_existing_bucket() {
        let mut map = SeatMap::new();
        map.insert(Seat::new("A-1-1", "1", 0.0, 0.0)).unwrap();
        map.insert(Seat::new("A-1-2", "1", 1.0, 0.0)).unwrap();
        assert_eq!(map.section_count(), 1);
        assert_eq!(map.section("A").unwrap().len(), 1);
        assert_eq!(map.row("A", "1").unwrap().len(), 2);
    }

    #[test]
    fn test_find_and_iter() {
        let map = index(&scenario_seats()).unwrap();
        assert_eq!(map.find("A-1-2").map(|s| s.x), Some(10.0));
        assert!(map.find("C-1-1").is_none());

        let keys: Vec<(&str, &str, &str)> = map
            .iter()
            .map(|(section, row, seat)| (section, row, seat.id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("A", "1", "A-1-1"), ("A", "1", "A-1-2"), ("B", "1", "B-1-1")]
        );
        assert_eq!(map.section_position("B"), Some(1));
    }
}
