//! Turtle context - tracks state during one interpretation pass

use crate::ast::Operation;
use crate::log::debug;
use crate::types::{Color, Distance};

use super::path_builder::PathBuilder;
use super::types::*;

/// Why [`TurtleContext::apply`] could not apply an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// `pop` found no saved state
    EmptyStack,
    /// A move left the range of finite coordinates
    NonFinitePosition,
}

/// Interpretation context
pub struct TurtleContext<'a> {
    /// The live cursor
    pub cursor: Cursor,
    /// States saved by `push`
    pub stack: Vec<Cursor>,
    /// Path of the segment being drawn
    pub path: PathBuilder,
    /// Finished segments, in drawing order
    pub segments: Vec<PathSegment>,
    options: &'a TurtleOptions,
}

impl<'a> TurtleContext<'a> {
    pub fn new(options: &'a TurtleOptions) -> Self {
        let cursor = Cursor::new(options.origin, options.initial_color.clone());
        Self {
            path: PathBuilder::new(cursor.position),
            cursor,
            stack: Vec::new(),
            segments: Vec::new(),
            options,
        }
    }

    /// Apply one operation to the cursor and the current path.
    pub fn apply(&mut self, op: &Operation) -> Result<(), StepError> {
        match op {
            Operation::Forward(d) => {
                self.advance(*d)?;
                self.path.move_to(self.cursor.position);
            }
            Operation::Draw(d) => {
                self.advance(*d)?;
                self.path.line_to(self.cursor.position);
            }
            Operation::SetAngle(a) => {
                self.cursor.heading = self.options.rotation.turn(self.cursor.heading, *a);
            }
            Operation::SetColor(c) => self.switch_color(c.clone()),
            Operation::Push => self.stack.push(self.cursor.clone()),
            Operation::Pop => {
                let saved = self.stack.pop().ok_or(StepError::EmptyStack)?;
                self.cursor.position = saved.position;
                self.cursor.heading = saved.heading;
                if self.options.restore_color_on_pop {
                    self.cursor.color = saved.color;
                }
                self.path.move_to(self.cursor.position);
            }
            Operation::NoOp => {}
        }
        Ok(())
    }

    fn advance(&mut self, distance: Distance) -> Result<(), StepError> {
        let next = self.cursor.ahead(distance.raw());
        if !next.is_finite() {
            return Err(StepError::NonFinitePosition);
        }
        self.cursor.position = next;
        Ok(())
    }

    /// Flush the current path in the active color and continue from the
    /// current position in `color`.
    fn switch_color(&mut self, color: Color) {
        let path = self.path.restart(self.cursor.position);
        let previous = std::mem::replace(&mut self.cursor.color, color);
        debug!(
            index = self.segments.len(),
            commands = path.len(),
            color = %previous,
            "flush segment"
        );
        self.segments.push(PathSegment {
            path,
            color: previous,
        });
    }

    /// Flush the final segment and return all segments in drawing order.
    pub fn finish(mut self) -> Vec<PathSegment> {
        let path = self.path.build();
        debug!(
            segments = self.segments.len() + 1,
            depth = self.stack.len(),
            "interpretation finished"
        );
        self.segments.push(PathSegment {
            path,
            color: self.cursor.color,
        });
        self.segments
    }
}
