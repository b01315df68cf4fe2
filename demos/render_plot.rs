//! Render a hectare value to SVG on stdout.
//!
//! Usage: cargo run --example render_plot --features tracing -- 2.5 en
//! Set RUST_LOG=plotcalc=debug to see layout decisions on stderr.

use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let hectares = args.next().unwrap_or_else(|| "1".to_string());
    let language = match args.next() {
        Some(code) => code.parse().map_err(|e| miette::miette!("{}", e))?,
        None => plotcalc::Language::default(),
    };

    let options = plotcalc::RenderOptions {
        language,
        width: Some(640.0),
        height: Some(640.0),
        ..Default::default()
    };
    let svg = plotcalc::render_hectares(&hectares, &options)?;
    println!("{}", svg);
    Ok(())
}
