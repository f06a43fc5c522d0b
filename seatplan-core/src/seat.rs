//! Seat records and the stage/plan shapes that come with them

use serde::{Deserialize, Serialize};

use crate::point::Point2d;
use crate::traits::Positioned;

/// Separator between the section, row and index parts of a seat identifier
pub const SEAT_ID_SEPARATOR: char = '-';

/// A single seat as received from the seating feed
///
/// Seats are immutable once received. The identifier has the form
/// `"<section>-<row>-<index>"`; everything before the first separator names
/// the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(rename = "Iid", default)]
    pub id: String,
    #[serde(rename = "Row", default)]
    pub row: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    /// Category or colour tag, when the feed provides one
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Seat {
    /// Create an uncategorised seat
    pub fn new(id: impl Into<String>, row: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            row: row.into(),
            x,
            y,
            category: None,
        }
    }

    /// Attach a category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Section key: the identifier up to the first separator
    pub fn section(&self) -> &str {
        match self.id.split_once(SEAT_ID_SEPARATOR) {
            Some((section, _)) => section,
            None => &self.id,
        }
    }
}

impl Positioned for Seat {
    fn position(&self) -> Point2d {
        Point2d::new(self.x, self.y)
    }
}

/// The stage (or screen) rectangle, taken from the feed's first shape record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StageShape {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl StageShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Centre of the rectangle in feed coordinates
    pub fn center(&self) -> Point2d {
        Point2d::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Overall seating plan dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanSize {
    pub width: f64,
    pub height: f64,
}

impl PlanSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
