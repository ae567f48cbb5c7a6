//! Byte-slot → Unicode codepoint map for the ROM table.
//!
//! The map is built by applying an ordered list of [`MapRule`]s to a 256-entry
//! table. Later rules override earlier ones for the same slot, so a custom
//! layout is written as `DEFAULT_RULES` followed by the redirects it needs.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub const SLOT_COUNT: usize = 256;

/// Codepoint every slot starts at, and the one control characters collapse to.
pub const FALLBACK_CODEPOINT: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapRule {
    /// Every slot in the range maps to one codepoint.
    Fill {
        slots: RangeInclusive<u8>,
        codepoint: u32,
    },
    /// Every slot in the range maps to the codepoint with the same value.
    Identity { slots: RangeInclusive<u8> },
    Single { slot: u8, codepoint: u32 },
}

impl MapRule {
    fn apply(&self, table: &mut [u32; SLOT_COUNT]) {
        match self {
            Self::Fill { slots, codepoint } => {
                for slot in slots.clone() {
                    table[slot as usize] = *codepoint;
                }
            }
            Self::Identity { slots } => {
                for slot in slots.clone() {
                    table[slot as usize] = u32::from(slot);
                }
            }
            Self::Single { slot, codepoint } => table[*slot as usize] = *codepoint,
        }
    }
}

/// C0/C1 controls and DEL go to the fallback codepoint, printable ASCII and
/// the Latin-1 supplement map to themselves.
pub const DEFAULT_RULES: &[MapRule] = &[
    MapRule::Fill {
        slots: 0x00..=0x1F,
        codepoint: FALLBACK_CODEPOINT,
    },
    MapRule::Single {
        slot: 0x7F,
        codepoint: FALLBACK_CODEPOINT,
    },
    MapRule::Identity { slots: 0x20..=0x7E },
    MapRule::Fill {
        slots: 0x80..=0x9F,
        codepoint: FALLBACK_CODEPOINT,
    },
    MapRule::Identity { slots: 0xA0..=0xFF },
];

/// Code page 437 box-drawing positions, to be applied after [`DEFAULT_RULES`].
/// Untested on hardware.
pub const CP437_BOX_DRAWING: &[MapRule] = &[
    MapRule::Single {
        slot: 180,
        codepoint: 0x2524,
    },
    MapRule::Single {
        slot: 191,
        codepoint: 0x2510,
    },
    MapRule::Single {
        slot: 192,
        codepoint: 0x2514,
    },
    MapRule::Single {
        slot: 193,
        codepoint: 0x2534,
    },
    MapRule::Single {
        slot: 194,
        codepoint: 0x252C,
    },
    MapRule::Single {
        slot: 195,
        codepoint: 0x251C,
    },
    MapRule::Single {
        slot: 196,
        codepoint: 0x2500,
    },
    MapRule::Single {
        slot: 197,
        codepoint: 0x253C,
    },
    MapRule::Single {
        slot: 217,
        codepoint: 0x2518,
    },
    MapRule::Single {
        slot: 218,
        codepoint: 0x250C,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charmap {
    table: [u32; SLOT_COUNT],
}

impl Charmap {
    /// Applies `rules` in order; slots no rule touches keep [`FALLBACK_CODEPOINT`].
    pub fn from_rules(rules: &[MapRule]) -> Self {
        let mut table = [FALLBACK_CODEPOINT; SLOT_COUNT];
        for rule in rules {
            rule.apply(&mut table);
        }
        Self { table }
    }

    #[inline(always)]
    pub fn codepoint(&self, slot: u8) -> u32 {
        self.table[slot as usize]
    }

    /// Distinct codepoints referenced by at least one slot.
    pub fn codepoints(&self) -> BTreeSet<u32> {
        self.table.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0..=u8::MAX).map(move |slot| (slot, self.codepoint(slot)))
    }
}

impl Default for Charmap {
    fn default() -> Self {
        Self::from_rules(DEFAULT_RULES)
    }
}

#[cfg(test)]
mod tests {
    use super::{CP437_BOX_DRAWING, Charmap, DEFAULT_RULES, FALLBACK_CODEPOINT, MapRule};

    #[test]
    fn default_map_is_identity_on_printable_ranges() {
        let map = Charmap::default();
        for slot in 0..=u8::MAX {
            let expected = match slot {
                0x20..=0x7E | 0xA0..=0xFF => u32::from(slot),
                _ => FALLBACK_CODEPOINT,
            };
            assert_eq!(
                map.codepoint(slot),
                expected,
                "slot {slot:#04X} mapped to the wrong codepoint"
            );
        }
    }

    #[test]
    fn default_value_set_is_fallback_plus_printables() {
        let codepoints = Charmap::default().codepoints();
        // 95 printable ASCII + 96 Latin-1 + the shared fallback.
        assert_eq!(codepoints.len(), 95 + 96 + 1);
        assert!(codepoints.contains(&FALLBACK_CODEPOINT));
        assert!(!codepoints.contains(&0x7F));
        assert!(!codepoints.contains(&0x9F));
    }

    #[test]
    fn later_rules_override_earlier_ones() {
        let rules = [
            MapRule::Identity { slots: 0x00..=0xFF },
            MapRule::Fill {
                slots: 0x10..=0x1F,
                codepoint: 0x25A0,
            },
            MapRule::Single {
                slot: 0x15,
                codepoint: 0x41,
            },
        ];
        let map = Charmap::from_rules(&rules);
        assert_eq!(map.codepoint(0x0F), 0x0F);
        assert_eq!(map.codepoint(0x10), 0x25A0);
        assert_eq!(map.codepoint(0x15), 0x41);
        assert_eq!(map.codepoint(0x1F), 0x25A0);
        assert_eq!(map.codepoint(0x20), 0x20);
    }

    #[test]
    fn untouched_slots_fall_back() {
        let map = Charmap::from_rules(&[MapRule::Single {
            slot: 0x41,
            codepoint: 0x41,
        }]);
        assert_eq!(map.codepoint(0x41), 0x41);
        assert_eq!(map.codepoint(0x42), FALLBACK_CODEPOINT);
        assert_eq!(map.codepoints().len(), 2);
    }

    #[test]
    fn box_drawing_redirects_only_its_slots() {
        let rules: Vec<MapRule> = DEFAULT_RULES
            .iter()
            .chain(CP437_BOX_DRAWING)
            .cloned()
            .collect();
        let custom = Charmap::from_rules(&rules);
        let default = Charmap::default();
        let changed: Vec<u8> = custom
            .iter()
            .zip(default.iter())
            .filter(|(a, b)| a.1 != b.1)
            .map(|(a, _)| a.0)
            .collect();
        assert_eq!(changed, [180, 191, 192, 193, 194, 195, 196, 197, 217, 218]);
        assert_eq!(custom.codepoint(196), 0x2500);
        assert_eq!(custom.codepoint(218), 0x250C);
    }

    #[test]
    fn iter_walks_every_slot_in_order() {
        let map = Charmap::default();
        let slots: Vec<u8> = map.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots.len(), 256);
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }
}
