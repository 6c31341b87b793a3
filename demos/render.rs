//! Render an L-system string to SVG on stdout.
//!
//! Usage: `cargo run --example render [TRANSLATIONS_FILE SEQUENCE_FILE]`
//! Set `RUST_LOG=debug` and enable the `tracing` feature to see the
//! interpreter's log output.

use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (translations, sequence) = match (args.next(), args.next()) {
        (Some(t), Some(s)) => (
            std::fs::read_to_string(&t).map_err(|e| miette::miette!("reading {}: {}", t, e))?,
            std::fs::read_to_string(&s).map_err(|e| miette::miette!("reading {}: {}", s, e))?,
        ),
        // A small fractal plant
        _ => (
            "F:draw 4, X:nop, +:angle 25, -:angle -25, [:push, ]:pop, G:color 34 139 34".to_string(),
            "GFFFF-[[FF+[[X]-X]-F[-FX]+X]+FF+[[X]-X]-F[-FX]+X]+FF[-FFFF+[[X]-X]-F[-FX]+X]+FF+[[X]-X]-F[-FX]+X"
                .to_string(),
        ),
    };

    tracing::info!(
        translations = translations.trim(),
        symbols = sequence.trim().chars().count(),
        "rendering"
    );
    let svg = turtle_svg::render_svg(sequence.trim(), translations.trim())?;
    println!("{}", svg);
    Ok(())
}
