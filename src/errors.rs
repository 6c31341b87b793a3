//! Error types with rich diagnostics using miette
//!
//! These errors carry source spans for readable error messages.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source ("<translations>", "<sequence>", or a filename)
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Translation Errors
// ============================================================================

/// Errors that occur while building the translation table
#[derive(Error, Diagnostic, Debug)]
pub enum TranslationError {
    #[error("malformed translation entry: {message}")]
    #[diagnostic(
        code(turtle_svg::translate::syntax),
        help("entries look like `F:draw 10`, separated by commas")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unrecognized operation: {name}")]
    #[diagnostic(
        code(turtle_svg::translate::unrecognized_operation),
        help("expected one of forward, draw, angle, color, push, pop, nop")
    )]
    UnrecognizedOperation {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown operation")]
        span: SourceSpan,
    },

    #[error("invalid number for `{operation}`: {message}")]
    #[diagnostic(code(turtle_svg::translate::invalid_number))]
    InvalidNumber {
        operation: &'static str,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a number")]
        span: SourceSpan,
    },

    #[error("invalid color channel: {message}")]
    #[diagnostic(
        code(turtle_svg::translate::invalid_channel),
        help("channels are integers between 0 and 255, e.g. `color 255 128 0`")
    )]
    InvalidChannel {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid channel")]
        span: SourceSpan,
    },
}

// ============================================================================
// Interpretation Errors
// ============================================================================

/// Errors that occur while interpreting a symbol sequence
#[derive(Error, Diagnostic, Debug)]
pub enum InterpretError {
    #[error("no translation for symbol {symbol:?} at position {index}")]
    #[diagnostic(
        code(turtle_svg::interpret::unknown_symbol),
        help("add an entry such as `{symbol}:nop` to the translations")
    )]
    UnknownSymbol {
        symbol: char,
        index: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("not in the translation table")]
        span: SourceSpan,
    },

    #[error("pop with empty state stack at position {index}")]
    #[diagnostic(
        code(turtle_svg::interpret::stack_underflow),
        help("every pop needs an earlier, unmatched push")
    )]
    StackUnderflow {
        symbol: char,
        index: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("nothing to pop")]
        span: SourceSpan,
    },

    #[error("position is no longer finite after symbol {symbol:?} at position {index}")]
    #[diagnostic(
        code(turtle_svg::interpret::non_finite_position),
        help("the accumulated distance overflowed; use smaller `forward`/`draw` steps")
    )]
    NonFinitePosition {
        symbol: char,
        index: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("moves out of range")]
        span: SourceSpan,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while writing the SVG document
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid canvas size: {width} x {height}")]
    #[diagnostic(code(turtle_svg::render::invalid_canvas))]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid stroke width: {value}")]
    #[diagnostic(code(turtle_svg::render::invalid_stroke_width))]
    InvalidStrokeWidth { value: f64 },
}
