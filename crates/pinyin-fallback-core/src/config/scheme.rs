// Pinyin Fallback Keyboard Schemes
// Enumerated scheme values behind the small integer codes the store keeps

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Double pinyin keyboard scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum DoublePinyinScheme {
    #[strum(to_string = "MS")]
    Ms,
    #[strum(to_string = "ZRM")]
    Zrm,
    #[strum(to_string = "ABC")]
    Abc,
    #[strum(to_string = "ZiGuang")]
    ZiGuang,
    #[strum(to_string = "PYJJ")]
    Pyjj,
    #[strum(to_string = "XHE")]
    Xhe,
}

/// Store index -> double pinyin scheme
const DOUBLE_PINYIN_SCHEMES: [(i64, DoublePinyinScheme); 6] = [
    (0, DoublePinyinScheme::Ms),
    (1, DoublePinyinScheme::Zrm),
    (2, DoublePinyinScheme::Abc),
    (3, DoublePinyinScheme::ZiGuang),
    (4, DoublePinyinScheme::Pyjj),
    (5, DoublePinyinScheme::Xhe),
];

impl DoublePinyinScheme {
    /// Scheme used when the store holds no usable index
    pub const DEFAULT: DoublePinyinScheme = DoublePinyinScheme::Ms;

    /// Resolve a store index; unknown indices give [`Self::DEFAULT`]
    pub fn from_index(index: i64) -> Self {
        lookup(&DOUBLE_PINYIN_SCHEMES, index).unwrap_or(Self::DEFAULT)
    }

    pub fn index(self) -> i64 {
        reverse_lookup(&DOUBLE_PINYIN_SCHEMES, self)
    }
}

impl Default for DoublePinyinScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bopomofo (zhuyin) keyboard mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum ChewingScheme {
    Standard,
    #[strum(to_string = "GinYieh")]
    GinYieh,
    #[strum(to_string = "ETen")]
    ETen,
    #[strum(to_string = "IBM")]
    Ibm,
}

/// Store index -> bopomofo keyboard mapping
const CHEWING_SCHEMES: [(i64, ChewingScheme); 4] = [
    (0, ChewingScheme::Standard),
    (1, ChewingScheme::GinYieh),
    (2, ChewingScheme::ETen),
    (3, ChewingScheme::Ibm),
];

impl ChewingScheme {
    pub const DEFAULT: ChewingScheme = ChewingScheme::Standard;

    pub fn from_index(index: i64) -> Self {
        lookup(&CHEWING_SCHEMES, index).unwrap_or(Self::DEFAULT)
    }

    pub fn index(self) -> i64 {
        reverse_lookup(&CHEWING_SCHEMES, self)
    }
}

impl Default for ChewingScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn lookup<T: Copy>(table: &[(i64, T)], index: i64) -> Option<T> {
    table
        .iter()
        .find(|(code, _)| *code == index)
        .map(|(_, scheme)| *scheme)
}

fn reverse_lookup<T: Copy + PartialEq>(table: &[(i64, T)], scheme: T) -> i64 {
    table
        .iter()
        .find(|(_, s)| *s == scheme)
        .map(|(code, _)| *code)
        .unwrap_or(0)
}

/// Candidate list orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map a store code to an orientation; the host's "system" orientation
    /// and anything else are not accepted
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}
