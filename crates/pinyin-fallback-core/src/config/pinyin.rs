// Pinyin Fallback Pinyin Profile
// Full pinyin / double pinyin settings, including the correction rules

use serde::Serialize;

use super::backend::DictionaryAction;
use super::options::{self, CORRECTION_OPTIONS, CORRECT_PINYIN};
use super::profile::ConfigProfile;
use super::{names, BaseConfig, ConfigValue, DoublePinyinScheme};
use crate::store::{read_default, KeyValueStore};

pub const PINYIN_SECTION: &str = "pinyin";

/// Settings of the pinyin profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinyinConfig {
    #[serde(flatten)]
    pub base: BaseConfig,

    pub double_pinyin: bool,
    pub double_pinyin_schema: DoublePinyinScheme,
    pub double_pinyin_show_raw: bool,
}

impl Default for PinyinConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PinyinConfig {
    pub fn new() -> Self {
        Self {
            base: BaseConfig::default(),
            double_pinyin: false,
            double_pinyin_schema: DoublePinyinScheme::DEFAULT,
            double_pinyin_show_raw: false,
        }
    }

    /// Defaults, then everything the store holds for the pinyin section
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        let mut config = Self::new();
        config.load(store);
        config
    }
}

impl ConfigProfile for PinyinConfig {
    fn section(&self) -> &'static str {
        PINYIN_SECTION
    }

    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }

    fn reset_defaults(&mut self) {
        *self = Self::new();
    }

    fn apply_profile_change(&mut self, name: &str, value: &ConfigValue) -> bool {
        let base = &mut self.base;
        match name {
            names::DOUBLE_PINYIN => self.double_pinyin = value.normalize(false),
            names::DOUBLE_PINYIN_SCHEMA => {
                self.double_pinyin_schema = DoublePinyinScheme::from_index(value.normalize(0))
            }
            names::DOUBLE_PINYIN_SHOW_RAW => self.double_pinyin_show_raw = value.normalize(false),
            names::INIT_CHINESE => base.init_chinese = value.normalize(true),
            // InitFull falls back to on for a mistyped value
            names::INIT_FULL => base.init_full = value.normalize(true),
            names::INIT_FULL_PUNCT => base.init_full_punct = value.normalize(true),
            names::INIT_SIMP_CHINESE => base.init_simp_chinese = value.normalize(true),
            names::SPECIAL_PHRASES => base.special_phrases = value.normalize(true),
            names::SHIFT_SELECT_CANDIDATE => base.shift_select_candidate = value.normalize(false),
            names::MINUS_EQUAL_PAGE => base.minus_equal_page = value.normalize(true),
            names::COMMA_PERIOD_PAGE => base.comma_period_page = value.normalize(true),
            names::AUTO_COMMIT => base.auto_commit = value.normalize(false),
            names::CORRECT_PINYIN => base
                .options
                .apply_umbrella(CORRECT_PINYIN, value.normalize(CORRECT_PINYIN.default)),
            _ => match options::find_row(CORRECTION_OPTIONS, name) {
                Some(row) => base.options.apply_row(row, value.normalize(row.default_value())),
                None => return false,
            },
        }
        true
    }

    fn dictionary_action(&self, name: &str) -> Option<DictionaryAction> {
        DictionaryAction::from_name(name)
    }

    fn read_profile_legacy(&mut self, store: &dyn KeyValueStore) {
        let section = PINYIN_SECTION;

        self.double_pinyin = read_default(store, section, names::DOUBLE_PINYIN, false);
        self.double_pinyin_schema = DoublePinyinScheme::from_index(read_default(
            store,
            section,
            names::DOUBLE_PINYIN_SCHEMA,
            0,
        ));
        self.double_pinyin_show_raw =
            read_default(store, section, names::DOUBLE_PINYIN_SHOW_RAW, false);

        let base = &mut self.base;
        base.init_chinese = read_default(store, section, names::INIT_CHINESE, true);
        base.init_full = read_default(store, section, names::INIT_FULL, false);
        base.init_full_punct = read_default(store, section, names::INIT_FULL_PUNCT, true);
        base.init_simp_chinese = read_default(store, section, names::INIT_SIMP_CHINESE, true);
        base.special_phrases = read_default(store, section, names::SPECIAL_PHRASES, true);

        base.shift_select_candidate =
            read_default(store, section, names::SHIFT_SELECT_CANDIDATE, false);
        base.minus_equal_page = read_default(store, section, names::MINUS_EQUAL_PAGE, true);
        base.comma_period_page = read_default(store, section, names::COMMA_PERIOD_PAGE, true);
        base.auto_commit = read_default(store, section, names::AUTO_COMMIT, false);

        let correct = read_default(store, section, CORRECT_PINYIN.name, CORRECT_PINYIN.default);
        base.options.apply_umbrella(CORRECT_PINYIN, correct);

        for row in CORRECTION_OPTIONS {
            let on = read_default(store, section, row.name, row.default_value());
            base.options.apply_row(*row, on);
        }
    }
}
