//! Default turtle state and canvas settings

use glam::{DVec2, dvec2};

/// Where the turtle starts, in canvas units
pub const ORIGIN: DVec2 = dvec2(400.0, 250.0);
/// Initial heading in radians (pointing along +x)
pub const HEADING: f64 = 0.0;
pub const COLOR: &str = "black";
pub const CANVAS_WIDTH: f64 = 2000.0;
pub const CANVAS_HEIGHT: f64 = 2000.0;
pub const STROKE_WIDTH: f64 = 2.0;
/// Decimal places for path coordinates
pub const COORD_PRECISION: usize = 2;
