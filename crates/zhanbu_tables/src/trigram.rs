//! The eight trigrams in primal (xiantian) numbering.

use serde::{Deserialize, Serialize};

use zhanbu_core::FiveElement;

/// The eight trigrams, primal order (1乾 2兌 3離 4震 5巽 6坎 7艮 8坤).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All eight trigrams in primal order (index 0 = 乾).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

impl Trigram {
    /// Primal number 1-8.
    pub const fn number(self) -> u8 {
        match self {
            Self::Qian => 1,
            Self::Dui => 2,
            Self::Li => 3,
            Self::Zhen => 4,
            Self::Xun => 5,
            Self::Kan => 6,
            Self::Gen => 7,
            Self::Kun => 8,
        }
    }

    /// Trigram for a primal number 1-8.
    pub const fn from_number(number: u8) -> Option<Trigram> {
        if number >= 1 && number <= 8 {
            Some(ALL_TRIGRAMS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Three-line bit pattern, top line most significant
    /// (乾111 兌011 離101 震001 巽110 坎010 艮100 坤000).
    pub const fn bits(self) -> u8 {
        match self {
            Self::Qian => 0b111,
            Self::Dui => 0b011,
            Self::Li => 0b101,
            Self::Zhen => 0b001,
            Self::Xun => 0b110,
            Self::Kan => 0b010,
            Self::Gen => 0b100,
            Self::Kun => 0b000,
        }
    }

    /// Trigram for a three-line bit pattern (only the low three bits count).
    pub const fn from_bits(bits: u8) -> Trigram {
        match bits & 0b111 {
            0b111 => Self::Qian,
            0b011 => Self::Dui,
            0b101 => Self::Li,
            0b001 => Self::Zhen,
            0b110 => Self::Xun,
            0b010 => Self::Kan,
            0b100 => Self::Gen,
            _ => Self::Kun,
        }
    }

    /// Name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Unicode trigram symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Qian => "☰",
            Self::Dui => "☱",
            Self::Li => "☲",
            Self::Zhen => "☳",
            Self::Xun => "☴",
            Self::Kan => "☵",
            Self::Gen => "☶",
            Self::Kun => "☷",
        }
    }

    /// Element of the trigram.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Qian | Self::Dui => FiveElement::Metal,
            Self::Li => FiveElement::Fire,
            Self::Zhen | Self::Xun => FiveElement::Wood,
            Self::Kan => FiveElement::Water,
            Self::Gen | Self::Kun => FiveElement::Earth,
        }
    }

    /// Family attribute of the trigram.
    pub const fn family(self) -> &'static str {
        match self {
            Self::Qian => "父",
            Self::Dui => "少女",
            Self::Li => "中女",
            Self::Zhen => "長男",
            Self::Xun => "長女",
            Self::Kan => "中男",
            Self::Gen => "少男",
            Self::Kun => "母",
        }
    }
}
