//! The twelve earthly branches (dizhi) and the double-hour scheme.

use serde::{Deserialize, Serialize};

/// The twelve earthly branches in cycle order (子 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Character form. Identical in traditional and simplified script.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based cycle index (子 = 0 .. 亥 = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a wrapped cycle offset.
    pub const fn from_index(index: u8) -> EarthlyBranch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Look a branch up by its character.
    pub fn from_character(ch: &str) -> Option<EarthlyBranch> {
        ALL_BRANCHES.into_iter().find(|b| b.character() == ch)
    }
}

/// Double hour (shichen) for an hour of day 0-23, as `(branch, number)`
/// with the number 1-based (子 = 1 .. 亥 = 12).
///
/// 子 covers 23:00-00:59; each later branch covers the next two hours.
/// Returns `None` for hours outside 0-23.
pub const fn double_hour(hour: u32) -> Option<(EarthlyBranch, u8)> {
    if hour > 23 {
        return None;
    }
    let index = ((hour + 1) / 2 % 12) as u8;
    Some((ALL_BRANCHES[index as usize], index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn characters_round_trip() {
        for b in ALL_BRANCHES {
            assert_eq!(EarthlyBranch::from_character(b.character()), Some(b));
        }
    }

    #[test]
    fn double_hour_midnight_is_zi() {
        assert_eq!(double_hour(23), Some((EarthlyBranch::Zi, 1)));
        assert_eq!(double_hour(0), Some((EarthlyBranch::Zi, 1)));
    }

    #[test]
    fn double_hour_blocks_of_two() {
        assert_eq!(double_hour(1), Some((EarthlyBranch::Chou, 2)));
        assert_eq!(double_hour(2), Some((EarthlyBranch::Chou, 2)));
        assert_eq!(double_hour(11), Some((EarthlyBranch::Wu, 7)));
        assert_eq!(double_hour(12), Some((EarthlyBranch::Wu, 7)));
        assert_eq!(double_hour(13), Some((EarthlyBranch::Wei, 8)));
        assert_eq!(double_hour(22), Some((EarthlyBranch::Hai, 12)));
    }

    #[test]
    fn double_hour_rejects_out_of_range() {
        assert_eq!(double_hour(24), None);
        assert_eq!(double_hour(99), None);
    }
}
