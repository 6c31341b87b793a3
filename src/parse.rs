//! Parse pest pairs into a translation table

use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::{Operation, OperationKind, TranslationTable};
use crate::errors::{SourceContext, TranslationError};
use crate::log::warn;
use crate::types::{Angle, Color, Distance};
use crate::{Rule, TranslationParser};

/// Name given to the translation text in diagnostics
pub const TRANSLATIONS_SOURCE: &str = "<translations>";

/// Parse translation text into a table.
///
/// Blank text gives an empty table. When a symbol appears more than once the
/// last entry wins.
pub fn parse_translations(text: &str) -> Result<TranslationTable, TranslationError> {
    let ctx = SourceContext::new(TRANSLATIONS_SOURCE, text);
    let pairs =
        TranslationParser::parse(Rule::table, text).map_err(|e| grammar_error(&ctx, e))?;

    let mut table = TranslationTable::new();
    for pair in pairs {
        if pair.as_rule() != Rule::table {
            continue;
        }
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::entry {
                let (symbol, op) = parse_entry(&ctx, inner)?;
                if table.insert(symbol, op).is_some() {
                    warn!(symbol = %symbol, "duplicate translation, keeping the last one");
                }
            }
        }
    }

    Ok(table)
}

fn parse_entry(ctx: &SourceContext, pair: Pair<Rule>) -> Result<(char, Operation), TranslationError> {
    let entry_span = span_of(&pair);
    let mut symbol = None;
    let mut operation = None;
    let mut parameter = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::symbol => symbol = inner.as_str().chars().next(),
            Rule::operation => operation = Some(inner),
            Rule::parameter => parameter = Some(inner),
            _ => {}
        }
    }

    let symbol = symbol.ok_or_else(|| syntax(ctx, "missing symbol", entry_span))?;
    let operation = operation.ok_or_else(|| syntax(ctx, "missing operation", entry_span))?;

    let kind: OperationKind =
        operation
            .as_str()
            .parse()
            .map_err(|_| TranslationError::UnrecognizedOperation {
                name: operation.as_str().to_string(),
                src: ctx.named_source(),
                span: span_of(&operation),
            })?;

    let parameter = parameter
        .as_ref()
        .map(trimmed)
        .filter(|(text, _)| !text.is_empty());

    if !kind.takes_parameter() && parameter.is_some() {
        warn!(symbol = %symbol, operation = %kind, "ignoring parameter");
    }

    let op = match (kind, parameter) {
        (OperationKind::Push, _) => Operation::Push,
        (OperationKind::Pop, _) => Operation::Pop,
        (OperationKind::Nop, _) => Operation::NoOp,
        (_, None) => {
            let end = operation.as_span().end();
            return Err(syntax(
                ctx,
                &format!("`{}` needs a parameter", kind),
                SourceSpan::from((end, 0)),
            ));
        }
        (OperationKind::Forward, Some((text, span))) => {
            Operation::Forward(parse_distance(ctx, kind, text, span)?)
        }
        (OperationKind::Draw, Some((text, span))) => {
            Operation::Draw(parse_distance(ctx, kind, text, span)?)
        }
        (OperationKind::Angle, Some((text, span))) => {
            let degrees = parse_number(ctx, kind, text, span)?;
            let angle = Angle::try_degrees(degrees)
                .map_err(|e| invalid_number(ctx, kind, e.to_string(), span))?;
            Operation::SetAngle(angle)
        }
        (OperationKind::Color, Some((text, span))) => {
            Operation::SetColor(parse_color(ctx, text, span)?)
        }
    };

    Ok((symbol, op))
}

fn parse_distance(
    ctx: &SourceContext,
    kind: OperationKind,
    text: &str,
    span: SourceSpan,
) -> Result<Distance, TranslationError> {
    let value = parse_number(ctx, kind, text, span)?;
    Distance::try_new(value).map_err(|e| invalid_number(ctx, kind, e.to_string(), span))
}

fn parse_number(
    ctx: &SourceContext,
    kind: OperationKind,
    text: &str,
    span: SourceSpan,
) -> Result<f64, TranslationError> {
    text.parse::<f64>()
        .map_err(|e| invalid_number(ctx, kind, format!("`{}`: {}", text, e), span))
}

/// A color parameter is either one literal token, kept verbatim, or three
/// whitespace-separated integer channels.
fn parse_color(ctx: &SourceContext, text: &str, span: SourceSpan) -> Result<Color, TranslationError> {
    let channels = split_words(text);
    if channels.len() == 1 {
        return Ok(Color::named(text));
    }
    if channels.len() != 3 {
        return Err(syntax(
            ctx,
            &format!("expected 3 color channels, found {}", channels.len()),
            span,
        ));
    }

    let mut rgb = [0u8; 3];
    for (slot, (offset, channel)) in rgb.iter_mut().zip(channels) {
        *slot = channel
            .parse::<u8>()
            .map_err(|_| TranslationError::InvalidChannel {
                message: format!("`{}` is not an integer between 0 and 255", channel),
                src: ctx.named_source(),
                span: SourceSpan::from((span.offset() + offset, channel.len())),
            })?;
    }
    let [r, g, b] = rgb;
    Ok(Color::Rgb(r, g, b))
}

/// Whitespace-separated words with their byte offsets into `text`
fn split_words(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push((s, &text[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }
    words
}

/// The pair's text with surrounding whitespace removed, and the span of what remains
fn trimmed<'i>(pair: &Pair<'i, Rule>) -> (&'i str, SourceSpan) {
    let raw = pair.as_str();
    let text = raw.trim();
    let leading = raw.len() - raw.trim_start().len();
    let start = pair.as_span().start() + leading;
    (text, SourceSpan::from((start, text.len())))
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from((span.start(), span.end() - span.start()))
}

fn syntax(ctx: &SourceContext, message: &str, span: SourceSpan) -> TranslationError {
    TranslationError::Syntax {
        message: message.to_string(),
        src: ctx.named_source(),
        span,
    }
}

fn invalid_number(
    ctx: &SourceContext,
    kind: OperationKind,
    message: String,
    span: SourceSpan,
) -> TranslationError {
    TranslationError::InvalidNumber {
        operation: kind.name(),
        message,
        src: ctx.named_source(),
        span,
    }
}

fn grammar_error(ctx: &SourceContext, err: pest::error::Error<Rule>) -> TranslationError {
    let err = err.renamed_rules(describe_rule);
    let span = match err.location {
        InputLocation::Pos(pos) => {
            let len = ctx.source[pos..].chars().next().map_or(0, char::len_utf8);
            SourceSpan::from((pos, len))
        }
        InputLocation::Span((start, end)) => SourceSpan::from((start, end - start)),
    };
    syntax(ctx, &err.variant.message(), span)
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::symbol => "a single-character symbol".to_string(),
        Rule::colon => "`:`".to_string(),
        Rule::comma => "`,`".to_string(),
        Rule::operation => "an operation name".to_string(),
        Rule::parameter => "a parameter".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(text: &str, symbol: char) -> Operation {
        let table = parse_translations(text).expect("translations should parse");
        table.get(symbol).cloned().expect("symbol should be present")
    }

    fn dist(v: f64) -> Distance {
        Distance::try_new(v).unwrap()
    }

    #[test]
    fn parses_every_operation() {
        let table = parse_translations(
            "F:forward 10, D:draw 2.5, +:angle 90, -:angle -22.5, C:color red, [:push, ]:pop, X:nop",
        )
        .unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.get('F'), Some(&Operation::Forward(dist(10.0))));
        assert_eq!(table.get('D'), Some(&Operation::Draw(dist(2.5))));
        assert_eq!(
            table.get('+'),
            Some(&Operation::SetAngle(Angle::try_degrees(90.0).unwrap()))
        );
        assert_eq!(
            table.get('-'),
            Some(&Operation::SetAngle(Angle::try_degrees(-22.5).unwrap()))
        );
        assert_eq!(table.get('C'), Some(&Operation::SetColor(Color::named("red"))));
        assert_eq!(table.get('['), Some(&Operation::Push));
        assert_eq!(table.get(']'), Some(&Operation::Pop));
        assert_eq!(table.get('X'), Some(&Operation::NoOp));
    }

    #[test]
    fn whitespace_around_entries_and_colon_is_ignored() {
        let table = parse_translations("  F :  draw 10 ,\n\tG:nop  ").unwrap();
        assert_eq!(table.get('F'), Some(&Operation::Draw(dist(10.0))));
        assert_eq!(table.get('G'), Some(&Operation::NoOp));
    }

    #[test]
    fn three_channel_color_becomes_rgb() {
        let color = op("C:color 255 0 0", 'C');
        assert_eq!(color, Operation::SetColor(Color::Rgb(255, 0, 0)));
        if let Operation::SetColor(c) = color {
            assert_eq!(c.to_string(), "rgb(255, 0, 0)");
        }
    }

    #[test]
    fn extra_spaces_between_channels_are_tolerated() {
        assert_eq!(
            op("C:color  10   20 30 ", 'C'),
            Operation::SetColor(Color::Rgb(10, 20, 30))
        );
    }

    #[test]
    fn single_token_color_passes_through() {
        assert_eq!(
            op("C:color #ff8800", 'C'),
            Operation::SetColor(Color::named("#ff8800"))
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let table = parse_translations("F:draw 1, F:draw 2, F:forward 3").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('F'), Some(&Operation::Forward(dist(3.0))));
    }

    #[test]
    fn blank_text_is_an_empty_table() {
        assert!(parse_translations("").unwrap().is_empty());
        assert!(parse_translations("  \n ").unwrap().is_empty());
    }

    #[test]
    fn non_ascii_symbols() {
        assert_eq!(op("λ:draw 4", 'λ'), Operation::Draw(dist(4.0)));
    }

    #[test]
    fn parameter_on_push_is_ignored() {
        assert_eq!(op("[:push 3", '['), Operation::Push);
    }

    #[test]
    fn unrecognized_operation() {
        let err = parse_translations("F:draw 10, G:jump 5").unwrap_err();
        match err {
            TranslationError::UnrecognizedOperation { name, span, .. } => {
                assert_eq!(name, "jump");
                assert_eq!(span.offset(), 13);
                assert_eq!(span.len(), 4);
            }
            other => panic!("expected UnrecognizedOperation, got {:?}", other),
        }
    }

    #[test]
    fn operation_glued_to_number_is_unrecognized() {
        let err = parse_translations("F:draw10").unwrap_err();
        assert!(matches!(
            err,
            TranslationError::UnrecognizedOperation { ref name, .. } if name == "draw10"
        ));
    }

    #[test]
    fn unusual_characters_in_operation_name() {
        for (text, expected) in [("F:draw=10", "draw=10"), ("F:dr@w 10", "dr@w"), ("F:draw:5", "draw:5")] {
            match parse_translations(text).unwrap_err() {
                TranslationError::UnrecognizedOperation { name, span, .. } => {
                    assert_eq!(name, expected);
                    assert_eq!(span.offset(), 2);
                    assert_eq!(span.len(), expected.len());
                }
                other => panic!("{:?}: expected UnrecognizedOperation, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn non_numeric_parameter() {
        let err = parse_translations("F:forward ten").unwrap_err();
        match err {
            TranslationError::InvalidNumber { operation, span, .. } => {
                assert_eq!(operation, "forward");
                assert_eq!(span.offset(), 10);
                assert_eq!(span.len(), 3);
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_parameter() {
        let err = parse_translations("+:angle inf").unwrap_err();
        assert!(matches!(err, TranslationError::InvalidNumber { operation: "angle", .. }));
    }

    #[test]
    fn missing_parameter() {
        let err = parse_translations("F:draw, G:nop").unwrap_err();
        match err {
            TranslationError::Syntax { message, span, .. } => {
                assert_eq!(message, "`draw` needs a parameter");
                assert_eq!(span.offset(), 6);
            }
            other => panic!("expected Syntax, got {:?}", other),
        }
        assert!(matches!(
            parse_translations("C:color   ").unwrap_err(),
            TranslationError::Syntax { .. }
        ));
    }

    #[test]
    fn wrong_channel_count() {
        let err = parse_translations("C:color 1 2").unwrap_err();
        match err {
            TranslationError::Syntax { message, .. } => {
                assert_eq!(message, "expected 3 color channels, found 2");
            }
            other => panic!("expected Syntax, got {:?}", other),
        }
    }

    #[test]
    fn channel_out_of_range() {
        let err = parse_translations("C:color 255 256 0").unwrap_err();
        match err {
            TranslationError::InvalidChannel { span, .. } => {
                assert_eq!(span.offset(), 12);
                assert_eq!(span.len(), 3);
            }
            other => panic!("expected InvalidChannel, got {:?}", other),
        }
        assert!(matches!(
            parse_translations("C:color 1 x 3").unwrap_err(),
            TranslationError::InvalidChannel { .. }
        ));
    }

    #[test]
    fn malformed_entries_are_syntax_errors() {
        for text in ["FF:draw 1", "F draw 1", ":draw 1", "F:draw 1,", "F:draw 1,,G:nop", "F:"] {
            let err = parse_translations(text).unwrap_err();
            assert!(
                matches!(err, TranslationError::Syntax { .. }),
                "{:?} should be a syntax error, got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn syntax_error_points_at_offending_character() {
        match parse_translations("FF:draw 1").unwrap_err() {
            TranslationError::Syntax { span, .. } => assert_eq!(span.offset(), 1),
            other => panic!("expected Syntax, got {:?}", other),
        }
    }

    #[test]
    fn split_words_tracks_offsets() {
        assert_eq!(split_words(" 1  22 3"), vec![(1, "1"), (4, "22"), (7, "3")]);
        assert!(split_words("   ").is_empty());
    }
}
