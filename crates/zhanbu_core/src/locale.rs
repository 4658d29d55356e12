//! Display locale tag.
//!
//! The locale is an explicit parameter of every display-name lookup rather
//! than ambient process state, so concurrent requests in different
//! languages never interfere. Algorithmic keys (stem and branch
//! characters, palace numbers, element codes) are locale-independent.

use serde::{Deserialize, Serialize};

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (zh-tw).
    #[default]
    ZhHant,
    /// Simplified Chinese (zh-cn).
    ZhHans,
}

impl Locale {
    /// Locale code in the zh-tw / zh-cn spelling.
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZhHant => "zh-tw",
            Self::ZhHans => "zh-cn",
        }
    }

    /// Look a locale up by its code.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "zh-tw" => Some(Self::ZhHant),
            "zh-cn" => Some(Self::ZhHans),
            _ => None,
        }
    }
}
