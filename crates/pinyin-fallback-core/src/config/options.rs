// Pinyin Fallback Option Bits
// Linguistic option flags and the named rows that drive them

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::Serialize;

/// Bit set of linguistic options, laid out the way the conversion back end
/// expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct OptionBits(pub u32);

impl OptionBits {
    pub const PINYIN_INCOMPLETE: OptionBits = OptionBits(1 << 3);
    pub const CHEWING_INCOMPLETE: OptionBits = OptionBits(1 << 4);
    pub const DYNAMIC_ADJUST: OptionBits = OptionBits(1 << 9);

    pub const AMB_C_CH: OptionBits = OptionBits(1 << 10);
    pub const AMB_S_SH: OptionBits = OptionBits(1 << 11);
    pub const AMB_Z_ZH: OptionBits = OptionBits(1 << 12);
    pub const AMB_F_H: OptionBits = OptionBits(1 << 13);
    pub const AMB_G_K: OptionBits = OptionBits(1 << 14);
    pub const AMB_L_N: OptionBits = OptionBits(1 << 15);
    pub const AMB_L_R: OptionBits = OptionBits(1 << 16);
    pub const AMB_EN_ENG: OptionBits = OptionBits(1 << 17);
    pub const AMB_AN_ANG: OptionBits = OptionBits(1 << 18);
    pub const AMB_IN_ING: OptionBits = OptionBits(1 << 19);
    pub const AMB_ALL: OptionBits = OptionBits(0x3ff << 10);

    pub const CORRECT_GN_NG: OptionBits = OptionBits(1 << 21);
    pub const CORRECT_MG_NG: OptionBits = OptionBits(1 << 22);
    pub const CORRECT_IOU_IU: OptionBits = OptionBits(1 << 23);
    pub const CORRECT_UEI_UI: OptionBits = OptionBits(1 << 24);
    pub const CORRECT_UEN_UN: OptionBits = OptionBits(1 << 25);
    pub const CORRECT_UE_VE: OptionBits = OptionBits(1 << 26);
    pub const CORRECT_V_U: OptionBits = OptionBits(1 << 27);
    pub const CORRECT_ON_ONG: OptionBits = OptionBits(1 << 28);
    pub const CORRECT_ALL: OptionBits = OptionBits(0xff << 21);

    /// Compiled-in option set
    pub const DEFAULT: OptionBits = OptionBits(
        Self::PINYIN_INCOMPLETE.0 | Self::CHEWING_INCOMPLETE.0 | Self::CORRECT_ALL.0,
    );

    /// Compiled-in override mask
    pub const DEFAULT_MASK: OptionBits = Self::DEFAULT;

    pub const fn empty() -> Self {
        OptionBits(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: OptionBits) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: OptionBits) -> bool {
        self.0 & other.0 != 0
    }

    pub fn set(&mut self, bits: OptionBits, on: bool) {
        if on {
            self.0 |= bits.0;
        } else {
            self.0 &= !bits.0;
        }
    }
}

impl BitOr for OptionBits {
    type Output = OptionBits;

    fn bitor(self, rhs: Self) -> Self::Output {
        OptionBits(self.0 | rhs.0)
    }
}

impl BitOrAssign for OptionBits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OptionBits {
    type Output = OptionBits;

    fn bitand(self, rhs: Self) -> Self::Output {
        OptionBits(self.0 & rhs.0)
    }
}

impl Not for OptionBits {
    type Output = OptionBits;

    fn not(self) -> Self::Output {
        OptionBits(!self.0)
    }
}

impl fmt::Display for OptionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A named setting that sets or clears a group of bits in the option set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow {
    pub name: &'static str,
    pub bits: OptionBits,
}

impl OptionRow {
    const fn new(name: &'static str, bits: OptionBits) -> Self {
        Self { name, bits }
    }

    /// Whether the compiled-in defaults turn this row on
    pub const fn default_value(&self) -> bool {
        self.bits.intersects(OptionBits::DEFAULT)
    }
}

/// A named setting that opens or closes a whole region of the override mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Umbrella {
    pub name: &'static str,
    pub region: OptionBits,
    pub default: bool,
}

pub const FUZZY_PINYIN: Umbrella = Umbrella {
    name: "FuzzyPinyin",
    region: OptionBits::AMB_ALL,
    default: false,
};

pub const CORRECT_PINYIN: Umbrella = Umbrella {
    name: "CorrectPinyin",
    region: OptionBits::CORRECT_ALL,
    default: true,
};

/// Rows shared by every profile
pub const BASE_OPTIONS: &[OptionRow] = &[
    OptionRow::new(
        "IncompletePinyin",
        OptionBits(OptionBits::PINYIN_INCOMPLETE.0 | OptionBits::CHEWING_INCOMPLETE.0),
    ),
    OptionRow::new("FuzzyPinyin_C_CH", OptionBits::AMB_C_CH),
    OptionRow::new("FuzzyPinyin_Z_ZH", OptionBits::AMB_Z_ZH),
    OptionRow::new("FuzzyPinyin_S_SH", OptionBits::AMB_S_SH),
    OptionRow::new("FuzzyPinyin_L_N", OptionBits::AMB_L_N),
    OptionRow::new("FuzzyPinyin_F_H", OptionBits::AMB_F_H),
    OptionRow::new("FuzzyPinyin_L_R", OptionBits::AMB_L_R),
    OptionRow::new("FuzzyPinyin_G_K", OptionBits::AMB_G_K),
    OptionRow::new("FuzzyPinyin_AN_ANG", OptionBits::AMB_AN_ANG),
    OptionRow::new("FuzzyPinyin_EN_ENG", OptionBits::AMB_EN_ENG),
    OptionRow::new("FuzzyPinyin_IN_ING", OptionBits::AMB_IN_ING),
    OptionRow::new("DynamicAdjust", OptionBits::DYNAMIC_ADJUST),
];

/// Pinyin correction rows.
///
/// `CorrectPinyin_GN_NG` is listed twice and `CorrectPinyin_VE_UE` shares
/// the V/U bit; hosts send both names, so both are accepted.
pub const CORRECTION_OPTIONS: &[OptionRow] = &[
    OptionRow::new("CorrectPinyin_GN_NG", OptionBits::CORRECT_GN_NG),
    OptionRow::new("CorrectPinyin_GN_NG", OptionBits::CORRECT_GN_NG),
    OptionRow::new("CorrectPinyin_MG_NG", OptionBits::CORRECT_MG_NG),
    OptionRow::new("CorrectPinyin_IOU_IU", OptionBits::CORRECT_IOU_IU),
    OptionRow::new("CorrectPinyin_UEI_UI", OptionBits::CORRECT_UEI_UI),
    OptionRow::new("CorrectPinyin_UEN_UN", OptionBits::CORRECT_UEN_UN),
    OptionRow::new("CorrectPinyin_UE_VE", OptionBits::CORRECT_UE_VE),
    OptionRow::new("CorrectPinyin_V_U", OptionBits::CORRECT_V_U),
    OptionRow::new("CorrectPinyin_VE_UE", OptionBits::CORRECT_V_U),
    OptionRow::new("CorrectPinyin_ON_ONG", OptionBits::CORRECT_ON_ONG),
];

/// First row with this name
pub fn find_row(rows: &[OptionRow], name: &str) -> Option<OptionRow> {
    rows.iter().find(|row| row.name == name).copied()
}

/// Option set produced by applying every row's default on top of `start`
pub fn default_snapshot(rows: &[OptionRow], start: OptionBits) -> OptionBits {
    rows.iter().fold(start, |mut bits, row| {
        bits.set(row.bits, row.default_value());
        bits
    })
}

/// Stored options plus the mask that decides which of them apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OptionSnapshot {
    pub bits: OptionBits,
    pub mask: OptionBits,
}

impl Default for OptionSnapshot {
    fn default() -> Self {
        Self {
            bits: OptionBits::DEFAULT,
            mask: OptionBits::DEFAULT_MASK,
        }
    }
}

impl OptionSnapshot {
    /// Options the back end should use: stored bits inside the mask,
    /// compiled-in defaults outside it
    pub fn effective(&self) -> OptionBits {
        (self.bits & self.mask) | (OptionBits::DEFAULT & !self.mask)
    }

    pub fn apply_row(&mut self, row: OptionRow, on: bool) {
        self.bits.set(row.bits, on);
    }

    pub fn apply_umbrella(&mut self, umbrella: Umbrella, on: bool) {
        self.mask.set(umbrella.region, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_are_disjoint() {
        assert!(!OptionBits::AMB_ALL.intersects(OptionBits::CORRECT_ALL));
        assert!(!OptionBits::AMB_ALL.intersects(OptionBits::DYNAMIC_ADJUST));
        for row in BASE_OPTIONS.iter().skip(1).take(10) {
            assert!(OptionBits::AMB_ALL.contains(row.bits), "{}", row.name);
        }
        for row in CORRECTION_OPTIONS {
            assert!(OptionBits::CORRECT_ALL.contains(row.bits), "{}", row.name);
        }
    }

    #[test]
    fn test_row_defaults() {
        for row in BASE_OPTIONS.iter().chain(CORRECTION_OPTIONS) {
            let expected = row.name == "IncompletePinyin" || row.name.starts_with("CorrectPinyin_");
            assert_eq!(row.default_value(), expected, "{}", row.name);
        }
    }

    #[test]
    fn test_default_snapshot_matches_compiled_default() {
        let bits = default_snapshot(BASE_OPTIONS, OptionBits::empty());
        let bits = default_snapshot(CORRECTION_OPTIONS, bits);
        assert_eq!(bits, OptionBits::DEFAULT);
    }

    #[test]
    fn test_duplicate_rows_are_kept() {
        let gn = CORRECTION_OPTIONS
            .iter()
            .filter(|row| row.name == "CorrectPinyin_GN_NG")
            .count();
        assert_eq!(gn, 2);
        assert_eq!(
            find_row(CORRECTION_OPTIONS, "CorrectPinyin_VE_UE").map(|r| r.bits),
            find_row(CORRECTION_OPTIONS, "CorrectPinyin_V_U").map(|r| r.bits)
        );
    }

    #[test]
    fn test_mask_gates_effective_bits() {
        let mut snapshot = OptionSnapshot::default();
        let c_ch = find_row(BASE_OPTIONS, "FuzzyPinyin_C_CH").unwrap();
        snapshot.apply_row(c_ch, true);
        assert!(snapshot.bits.contains(OptionBits::AMB_C_CH));
        assert!(!snapshot.effective().contains(OptionBits::AMB_C_CH));

        snapshot.apply_umbrella(FUZZY_PINYIN, true);
        assert!(snapshot.effective().contains(OptionBits::AMB_C_CH));
        // the umbrella never touches stored bits
        snapshot.apply_umbrella(FUZZY_PINYIN, false);
        assert!(snapshot.bits.contains(OptionBits::AMB_C_CH));
    }

    #[test]
    fn test_correction_umbrella_off_restores_defaults() {
        let mut snapshot = OptionSnapshot::default();
        let v_u = find_row(CORRECTION_OPTIONS, "CorrectPinyin_V_U").unwrap();
        snapshot.apply_row(v_u, false);
        assert!(!snapshot.effective().contains(OptionBits::CORRECT_V_U));
        snapshot.apply_umbrella(CORRECT_PINYIN, false);
        assert!(snapshot.effective().contains(OptionBits::CORRECT_V_U));
    }
}
