// Pinyin Fallback Bopomofo Profile
// Zhuyin keyboard mapping and candidate selection keys

use serde::Serialize;

use super::profile::ConfigProfile;
use super::{names, BaseConfig, ChewingScheme, ConfigValue};
use crate::store::{read_default, KeyValueStore};

pub const BOPOMOFO_SECTION: &str = "bopomofo";

/// Number of selection key layouts; codes at or above this are reset to 0
pub const SELECT_KEYS_LIMIT: u32 = 9;

/// Settings of the bopomofo profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BopomofoConfig {
    #[serde(flatten)]
    pub base: BaseConfig,

    pub bopomofo_keyboard_mapping: ChewingScheme,
    pub select_keys: u32,
    pub guide_key: bool,
    pub auxiliary_select_key_f: bool,
    pub auxiliary_select_key_kp: bool,
    pub enter_key: bool,
}

impl Default for BopomofoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BopomofoConfig {
    pub fn new() -> Self {
        let base = BaseConfig {
            init_simp_chinese: false,
            special_phrases: false,
            ..BaseConfig::default()
        };
        Self {
            base,
            bopomofo_keyboard_mapping: ChewingScheme::DEFAULT,
            select_keys: 0,
            guide_key: true,
            auxiliary_select_key_f: true,
            auxiliary_select_key_kp: true,
            enter_key: true,
        }
    }

    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        let mut config = Self::new();
        config.load(store);
        config
    }

    /// Store a raw selection key layout code; 9 and above become 0
    pub fn set_select_keys(&mut self, code: i64) {
        self.select_keys = match u32::try_from(code) {
            Ok(code) if code < SELECT_KEYS_LIMIT => code,
            _ => {
                log::warn!("select keys {} out of range, using 0", code);
                0
            }
        };
    }
}

impl ConfigProfile for BopomofoConfig {
    fn section(&self) -> &'static str {
        BOPOMOFO_SECTION
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
        match name {
            names::INIT_CHINESE => self.base.init_chinese = value.normalize(true),
            names::INIT_FULL => self.base.init_full = value.normalize(true),
            names::INIT_FULL_PUNCT => self.base.init_full_punct = value.normalize(true),
            names::INIT_SIMP_CHINESE => self.base.init_simp_chinese = value.normalize(false),
            names::SPECIAL_PHRASES => self.base.special_phrases = value.normalize(false),
            names::BOPOMOFO_KEYBOARD_MAPPING => {
                self.bopomofo_keyboard_mapping = ChewingScheme::from_index(value.normalize(0))
            }
            names::SELECT_KEYS => self.set_select_keys(value.normalize(0)),
            names::GUIDE_KEY => self.guide_key = value.normalize(true),
            names::AUXILIARY_SELECT_KEY_F => self.auxiliary_select_key_f = value.normalize(true),
            names::AUXILIARY_SELECT_KEY_KP => self.auxiliary_select_key_kp = value.normalize(true),
            names::ENTER_KEY => self.enter_key = value.normalize(true),
            _ => return false,
        }
        true
    }

    fn read_profile_legacy(&mut self, store: &dyn KeyValueStore) {
        let section = BOPOMOFO_SECTION;

        self.base.init_chinese = read_default(store, section, names::INIT_CHINESE, true);
        self.base.init_full = read_default(store, section, names::INIT_FULL, false);
        self.base.init_full_punct = read_default(store, section, names::INIT_FULL_PUNCT, true);
        self.base.init_simp_chinese = read_default(store, section, names::INIT_SIMP_CHINESE, false);
        self.base.special_phrases = read_default(store, section, names::SPECIAL_PHRASES, false);

        self.bopomofo_keyboard_mapping = ChewingScheme::from_index(read_default(
            store,
            section,
            names::BOPOMOFO_KEYBOARD_MAPPING,
            0,
        ));

        self.set_select_keys(read_default(store, section, names::SELECT_KEYS, 0));
        self.guide_key = read_default(store, section, names::GUIDE_KEY, true);
        self.auxiliary_select_key_f =
            read_default(store, section, names::AUXILIARY_SELECT_KEY_F, true);
        self.auxiliary_select_key_kp =
            read_default(store, section, names::AUXILIARY_SELECT_KEY_KP, true);
        self.enter_key = read_default(store, section, names::ENTER_KEY, true);
    }
}
