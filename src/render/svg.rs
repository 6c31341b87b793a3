//! SVG generation

use std::fmt;

use crate::errors::RenderError;

use super::types::{PathSegment, SvgOptions};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Generate an SVG document with one unfilled, stroked `<path>` per segment.
///
/// Segments are written in order, so later colors paint over earlier ones.
pub fn generate_svg(segments: &[PathSegment], options: &SvgOptions) -> Result<String, RenderError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(options.width) || !valid(options.height) {
        return Err(RenderError::InvalidCanvas {
            width: options.width,
            height: options.height,
        });
    }
    if !valid(options.stroke_width) {
        return Err(RenderError::InvalidStrokeWidth {
            value: options.stroke_width,
        });
    }

    Ok(SvgDocument { segments, options }.to_string())
}

struct SvgDocument<'a> {
    segments: &'a [PathSegment],
    options: &'a SvgOptions,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NS,
            fmt_num(self.options.width),
            fmt_num(self.options.height)
        )?;
        let stroke_width = fmt_num(self.options.stroke_width);
        for segment in self.segments {
            writeln!(
                f,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                segment.path,
                escape_attr(&segment.color.to_string()),
                stroke_width
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// Escape a string for use inside a double-quoted XML attribute
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Format a number with up to 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
