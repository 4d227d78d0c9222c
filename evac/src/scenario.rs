//! Hardcoded drill scenarios.
//!
//! Coordinates are (x, y) with x growing right and y growing down; an
//! obstacle `rect(x, y, w, h)` covers `w`×`h` cells from its top-left
//! corner.

use egress_core::{Point, Range};

pub struct Scenario {
    pub name: &'static str,
    pub size: i32,
    pub obstacles: Vec<Range>,
    pub exits: Vec<Point>,
    pub threats: Vec<Point>,
    pub start: Point,
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Range {
    Range::new(x, y, x + w, y + h)
}

/// 9x9 floor, one threat in the top-right corridor, exits on opposite
/// sides.
pub fn small_drill() -> Scenario {
    Scenario {
        name: "small drill (9x9)",
        size: 9,
        obstacles: vec![
            rect(1, 1, 3, 1),
            rect(1, 1, 1, 4),
            rect(3, 3, 1, 2),
            rect(5, 1, 1, 4),
            rect(7, 1, 2, 1),
            rect(7, 4, 2, 1),
            rect(0, 6, 5, 1),
            rect(4, 6, 1, 2),
            rect(6, 6, 3, 1),
            rect(6, 8, 1, 1),
        ],
        exits: vec![Point::new(8, 3), Point::new(0, 8)],
        threats: vec![Point::new(6, 0)],
        start: Point::new(4, 1),
    }
}

/// 13x13 floor with a sealed bottom block, one threat in the top-right
/// corner.
pub fn medium_drill() -> Scenario {
    Scenario {
        name: "medium drill (13x13)",
        size: 13,
        obstacles: vec![
            rect(1, 1, 1, 3),
            rect(3, 1, 3, 1),
            rect(6, 1, 1, 4),
            rect(8, 1, 1, 2),
            rect(10, 1, 2, 1),
            rect(11, 1, 1, 4),
            rect(3, 4, 4, 1),
            rect(8, 4, 4, 1),
            rect(0, 6, 3, 1),
            rect(4, 6, 1, 3),
            rect(6, 6, 1, 3),
            rect(8, 6, 4, 1),
            rect(11, 6, 1, 3),
            rect(0, 9, 13, 4),
        ],
        exits: vec![Point::new(12, 5), Point::new(0, 8)],
        threats: vec![Point::new(11, 0)],
        start: Point::new(9, 1),
    }
}

/// 13x13 floor with four exits and two threats pressing from opposite
/// corners.
pub fn crowded_drill() -> Scenario {
    Scenario {
        name: "crowded drill (13x13, two threats)",
        size: 13,
        obstacles: vec![
            rect(1, 1, 1, 3),
            rect(3, 1, 3, 1),
            rect(6, 1, 1, 4),
            rect(8, 1, 1, 2),
            rect(10, 1, 2, 1),
            rect(11, 1, 1, 4),
            rect(3, 4, 4, 1),
            rect(8, 4, 4, 1),
            rect(0, 6, 3, 1),
            rect(4, 6, 1, 6),
            rect(6, 6, 1, 4),
            rect(8, 6, 4, 1),
            rect(11, 6, 1, 3),
            rect(0, 9, 3, 2),
            rect(6, 9, 6, 1),
            rect(6, 11, 1, 2),
            rect(6, 11, 3, 1),
            rect(10, 11, 3, 1),
            rect(2, 12, 1, 1),
        ],
        exits: vec![
            Point::new(6, 0),
            Point::new(0, 5),
            Point::new(5, 12),
            Point::new(12, 5),
        ],
        threats: vec![Point::new(12, 3), Point::new(0, 3)],
        start: Point::new(10, 8),
    }
}
