//! Turtle interpretation and SVG rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Initial turtle state and canvas settings
//! - `types`: Cursor, PathSegment, Rotation and the option structs
//! - `context`: TurtleContext for tracking state during one pass
//! - `path_builder`: Move/line path data and its SVG serialization
//! - `svg`: SVG document generation
//!
//! Interpretation runs in two steps. Every symbol is first resolved against
//! the translation table, so an unknown symbol is reported before anything is
//! drawn. The resolved operations are then applied in order.

pub mod context;
pub mod defaults;
pub mod path_builder;
pub mod svg;
pub mod types;

pub use context::{StepError, TurtleContext};
pub use path_builder::{PathCommand, PathData};
pub use types::*;

use miette::{NamedSource, SourceSpan};

use crate::ast::{Operation, TranslationTable};
use crate::errors::InterpretError;
use crate::log::{debug, trace};

/// Name given to the symbol sequence in diagnostics
pub const SEQUENCE_SOURCE: &str = "<sequence>";

/// One symbol of the sequence with its operation
struct Step<'t> {
    index: usize,
    offset: usize,
    symbol: char,
    op: &'t Operation,
}

/// Interpret `sequence` into path segments.
///
/// The result always holds one more segment than there are `color`
/// operations in the sequence; an empty sequence gives a single segment with
/// just the initial move.
pub fn interpret(
    sequence: &str,
    table: &TranslationTable,
    options: &TurtleOptions,
) -> Result<Vec<PathSegment>, InterpretError> {
    let steps = resolve(sequence, table)?;
    debug!(symbols = steps.len(), entries = table.len(), "interpreting sequence");

    let mut ctx = TurtleContext::new(options);
    for step in &steps {
        trace!(index = step.index, symbol = %step.symbol, op = %step.op, "apply");
        ctx.apply(step.op).map_err(|e| {
            let src = sequence_source(sequence);
            let span = SourceSpan::from((step.offset, step.symbol.len_utf8()));
            match e {
                StepError::EmptyStack => InterpretError::StackUnderflow {
                    symbol: step.symbol,
                    index: step.index,
                    src,
                    span,
                },
                StepError::NonFinitePosition => InterpretError::NonFinitePosition {
                    symbol: step.symbol,
                    index: step.index,
                    src,
                    span,
                },
            }
        })?;
    }

    Ok(ctx.finish())
}

fn resolve<'t>(sequence: &str, table: &'t TranslationTable) -> Result<Vec<Step<'t>>, InterpretError> {
    sequence
        .char_indices()
        .enumerate()
        .map(|(index, (offset, symbol))| match table.get(symbol) {
            Some(op) => Ok(Step {
                index,
                offset,
                symbol,
                op,
            }),
            None => Err(InterpretError::UnknownSymbol {
                symbol,
                index,
                src: sequence_source(sequence),
                span: SourceSpan::from((offset, symbol.len_utf8())),
            }),
        })
        .collect()
}

fn sequence_source(sequence: &str) -> NamedSource<String> {
    NamedSource::new(SEQUENCE_SOURCE, sequence.to_string())
}
