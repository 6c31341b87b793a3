//! Path data for turtle trails.
//!
//! A path is a list of absolute `M x,y` (pen up) and `L x,y` (pen down)
//! instructions. It always starts with a move, so every segment can be
//! drawn on its own.

use std::fmt;
use std::mem;

use glam::DVec2;

use super::defaults::COORD_PRECISION;

/// A single path instruction with absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
}

impl PathCommand {
    pub fn point(self) -> DVec2 {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }

    pub fn is_line(self) -> bool {
        matches!(self, PathCommand::LineTo(_))
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cmd, p) = match *self {
            PathCommand::MoveTo(p) => ('M', p),
            PathCommand::LineTo(p) => ('L', p),
        };
        write!(
            f,
            "{}{:.prec$},{:.prec$}",
            cmd,
            unsigned_zero(p.x),
            unsigned_zero(p.y),
            prec = COORD_PRECISION
        )
    }
}

/// Values that round to zero print as "0.00", never "-0.00".
fn unsigned_zero(v: f64) -> f64 {
    let scale = 10_f64.powi(COORD_PRECISION as i32);
    if (v * scale).round() == 0.0 { 0.0 } else { v }
}

/// Finished path data, serialized as SVG path syntax
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of pen-down instructions
    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_line()).count()
    }

    /// Position of the last instruction
    pub fn end(&self) -> Option<DVec2> {
        self.commands.last().map(|c| c.point())
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// Builder for the path of the segment currently being drawn.
#[derive(Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Start a path with a move to `start`
    pub fn new(start: DVec2) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Pen up: reposition without drawing
    pub fn move_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    /// Pen down: draw a line to `p`
    pub fn line_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Finish the current path and start a new one at `start`.
    pub fn restart(&mut self, start: DVec2) -> PathData {
        let commands = mem::replace(&mut self.commands, vec![PathCommand::MoveTo(start)]);
        PathData { commands }
    }

    pub fn build(self) -> PathData {
        PathData {
            commands: self.commands,
        }
    }
}
