//! Minimal BDF glyph reader for 8x16 fonts.
//!
//! Only two productions are recognised:
//! - `ENCODING <n>` sets the codepoint for the glyph(s) that follow
//! - `BITMAP` is followed by exactly 16 hex rows
//!
//! Everything else (header, properties, `BBX`, `ENDCHAR`, ...) is skipped
//! without being decoded, so Latin-1 comments and copyrights are fine.
//! Rows are not validated against the declared bounding box.

use std::io::BufRead;

use log::{debug, trace};

use crate::error::ConvertError;
use crate::glyph::{GLYPH_HEIGHT, Glyph, GlyphTable};
use crate::parsing::cursor::LineCursor;

const ENCODING_KEYWORD: &[u8] = b"ENCODING";
const BITMAP_KEYWORD: &[u8] = b"BITMAP";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// `BITMAP` blocks read.
    pub blocks: usize,
    /// Blocks stored into the glyph table.
    pub kept: usize,
}

/* ======================= LINE MATCHERS ======================= */

/// Matches `ENCODING<ws+><digits>` with nothing else on the line.
///
/// Returns `Some(None)` for a well-formed line whose number does not fit a
/// `u32`: such a codepoint can never be of interest.
#[inline(always)]
fn parse_encoding_line(line: &[u8]) -> Option<Option<u32>> {
    let rest = line.strip_prefix(ENCODING_KEYWORD)?;
    let digits = rest.trim_ascii_start();
    if digits.len() == rest.len() || digits.is_empty() {
        return None;
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // All ASCII digits, so always valid UTF-8.
    let text = std::str::from_utf8(digits).ok()?;
    Some(text.parse::<u32>().ok())
}

#[inline(always)]
fn is_bitmap_line(line: &[u8]) -> bool {
    line == BITMAP_KEYWORD
}

/// One glyph row: a hex byte, optional `0x` prefix, surrounding whitespace ok.
#[inline(always)]
fn parse_row(text: &[u8]) -> Option<u8> {
    let t = text.trim_ascii();
    let t = t
        .strip_prefix(b"0x")
        .or_else(|| t.strip_prefix(b"0X"))
        .unwrap_or(t);
    let t = std::str::from_utf8(t).ok()?;
    u8::from_str_radix(t, 16).ok()
}

fn read_bitmap<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Glyph, ConvertError> {
    let mut rows = [0u8; GLYPH_HEIGHT];
    for (i, row) in rows.iter_mut().enumerate() {
        let text = cursor.expect_line(i)?;
        *row = match parse_row(text) {
            Some(byte) => byte,
            None => {
                let text = String::from_utf8_lossy(text).into_owned();
                return Err(ConvertError::MalformedRow {
                    line: cursor.line_no(),
                    text,
                });
            }
        };
    }
    Ok(Glyph(rows))
}

/// Reads BDF text and offers every glyph to `table`; the table keeps the ones
/// its charmap references, later definitions replacing earlier ones.
///
/// Fails on the first malformed or truncated bitmap block.
pub fn parse_glyphs<R: BufRead>(
    reader: R,
    table: &mut GlyphTable,
) -> Result<ParseStats, ConvertError> {
    let mut cursor = LineCursor::new(reader);
    let mut stats = ParseStats::default();
    let mut current: Option<u32> = None;

    while let Some(line) = cursor.next_line()? {
        if let Some(encoding) = parse_encoding_line(line) {
            current = encoding;
            continue;
        }
        if !is_bitmap_line(line) {
            continue;
        }

        let start = cursor.line_no();
        let glyph = read_bitmap(&mut cursor)?;
        stats.blocks += 1;

        match current {
            Some(cp) if table.offer(cp, glyph) => {
                stats.kept += 1;
                debug!("kept glyph U+{cp:04X} (BITMAP at line {start})");
            }
            Some(cp) => trace!("skipped glyph U+{cp:04X} (BITMAP at line {start})"),
            None => trace!("skipped glyph without codepoint (BITMAP at line {start})"),
        }
    }

    Ok(stats)
}
