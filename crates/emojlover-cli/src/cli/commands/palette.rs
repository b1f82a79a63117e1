//! `emojlover palette`: viewer background colors in cycle order.

use std::io::{self, Write};

use anyhow::Result;
use emojlover_core::Config;

pub fn run(config: &Config) -> Result<()> {
    let palette = config.palette();

    let mut out = io::stdout().lock();
    for (index, color) in palette.colors().iter().enumerate() {
        writeln!(out, "{index}\t{}\t{}", color.name(), color.hex())?;
    }
    out.flush()?;
    Ok(())
}
