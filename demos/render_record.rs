//! Renders a bibliographic item described in JSON.
//!
//! ```text
//! cargo run --example render_record -- tests/data/iso_bib_item.json --all-parts
//! ```
//!
//! Set `RUST_LOG=isobib=debug` to see the derivation and rendering events.

use anyhow::{Context, Result};
use isobib::{BibliographicItem, RenderOptions, ShortrefOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isobib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: render_record <record.json> [--all-parts] [--latest]")?;
    let flags: Vec<String> = args.collect();

    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let mut item = BibliographicItem::from_json(&json).with_context(|| format!("building {path}"))?;

    if flags.iter().any(|f| f == "--all-parts") {
        item.to_all_parts()?;
    }
    if flags.iter().any(|f| f == "--latest") {
        item.to_most_recent_reference()?;
    }

    let mut options = RenderOptions::new();
    if let Some(date) = item.dates().first() {
        options = options.with_note(date.from());
    }

    eprintln!("{}", item.shortref(ShortrefOptions::default()));
    println!("{}", item.to_xml_with(&options)?);
    Ok(())
}
