//! Six-line patterns and hexagram figures.
//!
//! A pattern packs the six lines into six bits, top line most
//! significant, so line 1 (the bottom line) is the lowest bit. The text
//! form reads top-down, matching the written convention ("010000" is 坎
//! over 坤).

use serde::Serialize;

use zhanbu_core::FiveElement;
use zhanbu_tables::{Trigram, hexagram_name};

/// The six lines of a hexagram as a bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LinePattern(u8);

impl LinePattern {
    /// Pattern of an upper/lower trigram pair.
    pub const fn from_trigrams(upper: Trigram, lower: Trigram) -> LinePattern {
        LinePattern(upper.bits() << 3 | lower.bits())
    }

    /// Upper trigram of the pattern.
    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }

    /// Lower trigram of the pattern.
    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.0)
    }

    /// Pattern with one line toggled (line 1 = bottom .. line 6 = top).
    pub const fn with_line_flipped(self, line: u8) -> LinePattern {
        let line = if line < 1 {
            1
        } else if line > 6 {
            6
        } else {
            line
        };
        LinePattern(self.0 ^ (1 << (line - 1)))
    }

    /// Mutual pattern from the middle four lines: lines 2-4 form the new
    /// lower trigram and lines 3-5 the new upper.
    pub const fn mutual(self) -> LinePattern {
        let upper = (self.0 >> 2) & 0b111;
        let lower = (self.0 >> 1) & 0b111;
        LinePattern(upper << 3 | lower)
    }

    /// Text form, top line first (e.g. "010000").
    pub fn text(self) -> String {
        (0..6)
            .map(|i| if self.0 & (1 << (5 - i)) != 0 { '1' } else { '0' })
            .collect()
    }
}

/// A named hexagram with its trigram pair and pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramFigure {
    pub number: u8,
    pub name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    pub pattern: String,
}

impl HexagramFigure {
    /// Figure for a line pattern.
    pub fn from_pattern(pattern: LinePattern) -> HexagramFigure {
        let upper = pattern.upper();
        let lower = pattern.lower();
        let entry = hexagram_name(upper, lower);
        HexagramFigure {
            number: entry.number,
            name: entry.name,
            upper,
            lower,
            pattern: pattern.text(),
        }
    }
}

/// Whether a role trigram sits above or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RolePosition {
    Upper,
    Lower,
}

/// Body or use trigram with its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrigramRole {
    pub trigram: Trigram,
    pub element: FiveElement,
    pub position: RolePosition,
}

impl TrigramRole {
    pub const fn new(trigram: Trigram, position: RolePosition) -> TrigramRole {
        TrigramRole {
            trigram,
            element: trigram.element(),
            position,
        }
    }
}
