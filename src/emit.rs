use std::io::Write;

use crate::charmap::{Charmap, SLOT_COUNT};
use crate::error::ConvertError;
use crate::glyph::{Glyph, GlyphTable};

/// Resolves every slot through the charmap and glyph table.
///
/// A codepoint missing from `glyphs` resolves to [`Glyph::EMPTY`]; that only
/// happens when the table was built for a different charmap.
pub fn render_table(charmap: &Charmap, glyphs: &GlyphTable) -> [Glyph; SLOT_COUNT] {
    let mut out = [Glyph::EMPTY; SLOT_COUNT];
    for (slot, cp) in charmap.iter() {
        out[slot as usize] = glyphs.get(cp).copied().unwrap_or(Glyph::EMPTY);
    }
    out
}

/// Writes the 256-glyph table as one `%02X` byte per line, slot 0 first.
/// Always 4096 lines.
pub fn emit_table<W: Write>(
    out: &mut W,
    charmap: &Charmap,
    glyphs: &GlyphTable,
) -> Result<usize, ConvertError> {
    let mut lines = 0;
    for glyph in render_table(charmap, glyphs).iter() {
        for row in glyph.rows() {
            writeln!(out, "{row:02X}")?;
            lines += 1;
        }
    }
    Ok(lines)
}
