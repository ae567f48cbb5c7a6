//! BDF (8x16) → 256-slot font ROM table.
//!
//! `parse → map → emit`: glyphs are read from a BDF stream, byte slots are
//! resolved through a [`Charmap`], and the resulting table is written as one
//! `%02X` byte per line (4096 lines).

pub mod charmap;
pub mod emit;
pub mod error;
pub mod glyph;
pub mod parsing;

use std::io::{BufRead, BufWriter, Write};

use log::{info, warn};

pub use charmap::{CP437_BOX_DRAWING, Charmap, DEFAULT_RULES, MapRule};
pub use error::ConvertError;
pub use glyph::{Glyph, GlyphTable};
pub use parsing::bdf::ParseStats;

/// Runs one conversion. Nothing is written unless the whole input parses.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    charmap: &Charmap,
) -> Result<ParseStats, ConvertError> {
    let mut glyphs = GlyphTable::for_charmap(charmap);
    let stats = parsing::bdf::parse_glyphs(input, &mut glyphs)?;
    info!(
        "Read {} bitmap blocks, kept {} for {} referenced codepoints",
        stats.blocks,
        stats.kept,
        glyphs.len()
    );
    for cp in glyphs.missing() {
        warn!("No glyph for U+{cp:04X}; emitting an empty glyph");
    }

    let mut out = BufWriter::new(output);
    let lines = emit::emit_table(&mut out, charmap, &glyphs)?;
    out.flush()?;
    info!("Wrote {lines} table lines");
    Ok(stats)
}
