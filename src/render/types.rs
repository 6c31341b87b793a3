//! Core interpreter types: cursor, segments and options

use glam::DVec2;

use super::defaults;
use super::path_builder::PathData;
use crate::types::{Angle, Color};

/// Which way a positive `angle` turns the turtle on screen.
///
/// SVG's y axis points down, so turning counter-clockwise on screen means
/// decreasing the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// `angle 90` turns left, like a classic turtle. Heading decreases.
    #[default]
    CounterClockwise,
    /// `angle 90` turns right. Heading increases.
    Clockwise,
}

impl Rotation {
    /// Apply a turn to a heading in radians
    pub fn turn(self, heading: f64, angle: Angle) -> f64 {
        match self {
            Rotation::CounterClockwise => heading + (-angle).radians(),
            Rotation::Clockwise => heading + angle.radians(),
        }
    }
}

/// The turtle: position, heading (radians) and active stroke color
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    pub position: DVec2,
    pub heading: f64,
    pub color: Color,
}

impl Cursor {
    pub fn new(position: DVec2, color: Color) -> Self {
        Self {
            position,
            heading: defaults::HEADING,
            color,
        }
    }

    /// Position after moving `distance` along the current heading
    pub fn ahead(&self, distance: f64) -> DVec2 {
        self.position + DVec2::from_angle(self.heading) * distance
    }
}

/// A run of path data drawn in a single color
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub path: PathData,
    pub color: Color,
}

/// Options for one interpretation pass
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleOptions {
    pub origin: DVec2,
    pub initial_color: Color,
    pub rotation: Rotation,
    /// Whether `pop` also restores the color saved by `push`
    pub restore_color_on_pop: bool,
}

impl Default for TurtleOptions {
    fn default() -> Self {
        Self {
            origin: defaults::ORIGIN,
            initial_color: Color::named(defaults::COLOR),
            rotation: Rotation::default(),
            restore_color_on_pop: true,
        }
    }
}

/// Canvas and stroke settings for the SVG document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: defaults::CANVAS_WIDTH,
            height: defaults::CANVAS_HEIGHT,
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

/// Options for rendering L-system strings to SVG
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub turtle: TurtleOptions,
    pub svg: SvgOptions,
}
