// Pinyin Fallback Setting Names
// Names under which the external store publishes each setting

pub const CORRECT_PINYIN: &str = "CorrectPinyin";
pub const FUZZY_PINYIN: &str = "FuzzyPinyin";
pub const ORIENTATION: &str = "LookupTableOrientation";
pub const PAGE_SIZE: &str = "LookupTablePageSize";
pub const REMEMBER_EVERY_INPUT: &str = "RememberEveryInput";
pub const SHIFT_SELECT_CANDIDATE: &str = "ShiftSelectCandidate";
pub const MINUS_EQUAL_PAGE: &str = "MinusEqualPage";
pub const COMMA_PERIOD_PAGE: &str = "CommaPeriodPage";
pub const AUTO_COMMIT: &str = "AutoCommit";
pub const DOUBLE_PINYIN: &str = "DoublePinyin";
pub const DOUBLE_PINYIN_SCHEMA: &str = "DoublePinyinSchema";
pub const DOUBLE_PINYIN_SHOW_RAW: &str = "DoublePinyinShowRaw";
pub const INIT_CHINESE: &str = "InitChinese";
pub const INIT_FULL: &str = "InitFull";
pub const INIT_FULL_PUNCT: &str = "InitFullPunct";
pub const INIT_SIMP_CHINESE: &str = "InitSimplifiedChinese";
pub const SPECIAL_PHRASES: &str = "SpecialPhrases";
pub const DICTIONARIES: &str = "Dictionaries";
pub const BOPOMOFO_KEYBOARD_MAPPING: &str = "BopomofoKeyboardMapping";
pub const SELECT_KEYS: &str = "SelectKeys";
pub const GUIDE_KEY: &str = "GuideKey";
pub const AUXILIARY_SELECT_KEY_F: &str = "AuxiliarySelectKey_F";
pub const AUXILIARY_SELECT_KEY_KP: &str = "AuxiliarySelectKey_KP";
pub const ENTER_KEY: &str = "EnterKey";
pub const IMPORT_DICTIONARY: &str = "ImportDictionary";
pub const EXPORT_DICTIONARY: &str = "ExportDictionary";
pub const CLEAR_USER_DATA: &str = "ClearUserData";
pub const MAIN_SWITCH: &str = "MainSwitch";
pub const LETTER_SWITCH: &str = "LetterSwitch";
pub const PUNCT_SWITCH: &str = "PunctSwitch";
pub const TRAD_SWITCH: &str = "TradSwitch";

/// Names that trigger a dictionary command instead of storing a value
pub const ACTION_NAMES: [&str; 3] = [IMPORT_DICTIONARY, EXPORT_DICTIONARY, CLEAR_USER_DATA];

pub fn is_action(name: &str) -> bool {
    ACTION_NAMES.contains(&name)
}
