//! `emojlover list`: the collection as tab separated lines.

use std::io::{self, Write};

use anyhow::Result;
use emojlover_core::Config;

pub fn run(config: &Config) -> Result<()> {
    let collection = config.collection();
    tracing::debug!(count = collection.len(), "listing emojis");

    let mut out = io::stdout().lock();
    for (index, glyph) in collection.iter().enumerate() {
        writeln!(out, "{index}\t{glyph}")?;
    }
    out.flush()?;
    Ok(())
}
