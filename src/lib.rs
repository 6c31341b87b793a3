//! Turn L-system strings into colored SVG paths.
//!
//! A translation table maps each symbol to a turtle operation:
//!
//! ```
//! let svg = turtle_svg::render_svg("F+F", "F:draw 10, +:angle 90").unwrap();
//! assert!(svg.contains(r#"d="M400.00,250.00 L410.00,250.00 L410.00,240.00""#));
//! ```

use pest_derive::Parser;

pub mod ast;
pub mod errors;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use ast::{Operation, OperationKind, TranslationTable};
pub use errors::{InterpretError, RenderError, TranslationError};
pub use render::{PathSegment, RenderOptions, Rotation, SvgOptions, TurtleOptions};
pub use types::Color;

#[derive(Parser)]
#[grammar = "translations.pest"]
pub struct TranslationParser;

/// Build a translation table from text such as `"F:draw 10, +:angle 90"`.
pub fn translate(text: &str) -> Result<TranslationTable, miette::Report> {
    Ok(parse::parse_translations(text)?)
}

/// Interpret `sequence` with the default turtle options.
pub fn interpret(
    sequence: &str,
    table: &TranslationTable,
) -> Result<Vec<PathSegment>, miette::Report> {
    interpret_with_options(sequence, table, &TurtleOptions::default())
}

/// Interpret `sequence` into path segments, one per active color.
pub fn interpret_with_options(
    sequence: &str,
    table: &TranslationTable,
    options: &TurtleOptions,
) -> Result<Vec<PathSegment>, miette::Report> {
    Ok(render::interpret(sequence, table, options)?)
}

/// Render `sequence` to an SVG document using the given translations.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_svg(sequence: &str, translations: &str) -> Result<String, miette::Report> {
    render_svg_with_options(sequence, translations, &RenderOptions::default())
}

/// Render with explicit options
pub fn render_svg_with_options(
    sequence: &str,
    translations: &str,
    options: &RenderOptions,
) -> Result<String, miette::Report> {
    let table = translate(translations)?;
    let segments = interpret_with_options(sequence, &table, &options.turtle)?;
    Ok(render::svg::generate_svg(&segments, &options.svg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_single_entry() {
        let result = TranslationParser::parse(Rule::table, "F:draw 10");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_bare_operations() {
        let result = TranslationParser::parse(Rule::table, "[:push,]:pop,X:nop");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_color_with_channels() {
        let result = TranslationParser::parse(Rule::table, "C:color 12 34 56, D:color blue");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_entry_rule() {
        let result = TranslationParser::parse(Rule::entry, "+ : angle -25.7");
        assert!(result.is_ok(), "Failed to parse entry: {:?}", result.err());
    }

    #[test]
    fn parameter_keeps_inner_spaces() {
        let mut pairs = TranslationParser::parse(Rule::entry, "C:color 1 2 3").unwrap();
        let entry = pairs.next().unwrap();
        let parameter = entry
            .into_inner()
            .find(|p| p.as_rule() == Rule::parameter)
            .unwrap();
        assert_eq!(parameter.as_str(), " 1 2 3");
    }

    #[test]
    fn reject_missing_colon() {
        let result = TranslationParser::parse(Rule::table, "F draw 10");
        assert!(result.is_err());
    }

    #[test]
    fn reject_trailing_comma() {
        let result = TranslationParser::parse(Rule::table, "F:draw 10,");
        assert!(result.is_err());
    }

    #[test]
    fn translate_reports_diagnostic() {
        let err = translate("F:fly 3").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized operation: fly");
    }

    #[test]
    fn render_svg_end_to_end() {
        let svg = render_svg("FF", "F:draw 5").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"d="M400.00,250.00 L405.00,250.00 L410.00,250.00""#));
        assert!(svg.contains(r#"stroke="black""#));
    }

    #[test]
    fn interpret_reports_unknown_symbol() {
        let table = translate("F:draw 5").unwrap();
        let err = interpret("FQ", &table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no translation for symbol 'Q' at position 1"
        );
    }
}
