use std::collections::{BTreeSet, HashMap};

use crate::charmap::Charmap;

pub const GLYPH_HEIGHT: usize = 16;

/// One 8x16 glyph, one byte per scanline, top row first. The most significant
/// bit of each byte is the leftmost pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(pub [u8; GLYPH_HEIGHT]);

impl Glyph {
    pub const EMPTY: Self = Self([0; GLYPH_HEIGHT]);

    #[inline(always)]
    pub fn rows(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&row| row == 0)
    }
}

/// Codepoint → glyph for exactly the codepoints a [`Charmap`] references.
///
/// Every referenced codepoint starts out bound to [`Glyph::EMPTY`], so lookups
/// for mapped codepoints always hit. Codepoints outside that set are never
/// stored.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<u32, Glyph>,
    found: BTreeSet<u32>,
}

impl GlyphTable {
    pub fn for_charmap(charmap: &Charmap) -> Self {
        let glyphs = charmap
            .codepoints()
            .into_iter()
            .map(|cp| (cp, Glyph::EMPTY))
            .collect();
        Self {
            glyphs,
            found: BTreeSet::new(),
        }
    }

    /// Stores `glyph` if `codepoint` is referenced, replacing any earlier one.
    /// Returns whether the glyph was kept.
    pub fn offer(&mut self, codepoint: u32, glyph: Glyph) -> bool {
        match self.glyphs.get_mut(&codepoint) {
            Some(slot) => {
                *slot = glyph;
                self.found.insert(codepoint);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, codepoint: u32) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    /// Referenced codepoints the source never defined, ascending.
    pub fn missing(&self) -> impl Iterator<Item = u32> + '_ {
        let mut missing: Vec<u32> = self
            .glyphs
            .keys()
            .copied()
            .filter(|cp| !self.found.contains(cp))
            .collect();
        missing.sort_unstable();
        missing.into_iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
