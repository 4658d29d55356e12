//! The five elements (wuxing) and their mutual relations.
//!
//! The generative (sheng) cycle runs wood → fire → earth → metal → water →
//! wood; the destructive (ke) cycle runs wood → earth → water → fire →
//! metal → wood. Both are fixed adjacency maps over the five elements.

use serde::{Deserialize, Serialize};

/// The five elements, in generative-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generative-cycle order.
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// Character form. Identical in traditional and simplified script.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generative-cycle order (wood = 0 .. water = 4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (sheng cycle).
    pub const fn generates(self) -> FiveElement {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (ke cycle).
    pub const fn overcomes(self) -> FiveElement {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}
