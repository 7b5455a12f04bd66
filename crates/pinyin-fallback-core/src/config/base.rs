// Pinyin Fallback Base Schema
// Settings shared by every profile and the policy for applying them

use serde::Serialize;

use super::names;
use super::options::{self, OptionSnapshot, BASE_OPTIONS, FUZZY_PINYIN};
use super::{ConfigValue, Orientation};
use crate::store::{read_default, KeyValueStore};

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 10;

pub const DEFAULT_MAIN_SWITCH: &str = "<Shift>";
pub const DEFAULT_LETTER_SWITCH: &str = "";
pub const DEFAULT_PUNCT_SWITCH: &str = "<Control>period";
pub const DEFAULT_TRAD_SWITCH: &str = "<Control><Shift>f";

/// Settings every profile carries.
///
/// Fields below the lookup-table block are stored here for all profiles but
/// only published under their names by the profiles that own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseConfig {
    pub options: OptionSnapshot,

    pub orientation: Orientation,
    pub page_size: u32,
    pub remember_every_input: bool,

    pub shift_select_candidate: bool,
    pub minus_equal_page: bool,
    pub comma_period_page: bool,
    pub auto_commit: bool,

    pub init_chinese: bool,
    pub init_full: bool,
    pub init_full_punct: bool,
    pub init_simp_chinese: bool,
    pub special_phrases: bool,

    pub dictionaries: String,

    pub main_switch: String,
    pub letter_switch: String,
    pub punct_switch: String,
    pub trad_switch: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            options: OptionSnapshot::default(),

            orientation: Orientation::Horizontal,
            page_size: DEFAULT_PAGE_SIZE,
            remember_every_input: false,

            shift_select_candidate: false,
            minus_equal_page: true,
            comma_period_page: true,
            auto_commit: false,

            init_chinese: true,
            init_full: false,
            init_full_punct: true,
            init_simp_chinese: true,
            special_phrases: true,

            dictionaries: String::new(),

            main_switch: DEFAULT_MAIN_SWITCH.to_string(),
            letter_switch: DEFAULT_LETTER_SWITCH.to_string(),
            punct_switch: DEFAULT_PUNCT_SWITCH.to_string(),
            trad_switch: DEFAULT_TRAD_SWITCH.to_string(),
        }
    }
}

impl BaseConfig {
    /// Store a raw orientation code; anything but horizontal or vertical
    /// becomes horizontal
    pub fn set_orientation(&mut self, code: i64) {
        self.orientation = Orientation::from_code(code).unwrap_or_else(|| {
            log::warn!("orientation {} out of range, using horizontal", code);
            Orientation::Horizontal
        });
    }

    /// Store a raw page size; anything outside 0..=10 becomes 5
    pub fn set_page_size(&mut self, size: i64) {
        self.page_size = match u32::try_from(size) {
            Ok(size) if size <= MAX_PAGE_SIZE => size,
            _ => {
                log::warn!(
                    "page size {} out of range, using {}",
                    size,
                    DEFAULT_PAGE_SIZE
                );
                DEFAULT_PAGE_SIZE
            }
        };
    }

    /// Apply one named value from the shared table. Returns `false` when the
    /// name is not part of the base schema.
    pub fn apply_change(&mut self, name: &str, value: &ConfigValue) -> bool {
        match name {
            names::ORIENTATION => {
                self.set_orientation(value.normalize(Orientation::Horizontal.code()))
            }
            names::PAGE_SIZE => self.set_page_size(value.normalize(i64::from(DEFAULT_PAGE_SIZE))),
            names::REMEMBER_EVERY_INPUT => self.remember_every_input = value.normalize(false),
            names::DICTIONARIES => self.dictionaries = value.normalize(String::new()),
            names::MAIN_SWITCH => {
                self.main_switch = value.normalize(DEFAULT_MAIN_SWITCH.to_string())
            }
            names::LETTER_SWITCH => {
                self.letter_switch = value.normalize(DEFAULT_LETTER_SWITCH.to_string())
            }
            names::PUNCT_SWITCH => {
                self.punct_switch = value.normalize(DEFAULT_PUNCT_SWITCH.to_string())
            }
            names::TRAD_SWITCH => {
                self.trad_switch = value.normalize(DEFAULT_TRAD_SWITCH.to_string())
            }
            names::FUZZY_PINYIN => self
                .options
                .apply_umbrella(FUZZY_PINYIN, value.normalize(FUZZY_PINYIN.default)),
            _ => match options::find_row(BASE_OPTIONS, name) {
                Some(row) => self.options.apply_row(row, value.normalize(row.default_value())),
                None => return false,
            },
        }
        true
    }

    /// Read every base setting one name at a time, for stores that cannot
    /// deliver a section snapshot
    pub fn read_legacy<S: KeyValueStore + ?Sized>(&mut self, store: &S, section: &str) {
        self.set_orientation(read_default(store, section, names::ORIENTATION, 0));
        self.set_page_size(read_default(
            store,
            section,
            names::PAGE_SIZE,
            i64::from(DEFAULT_PAGE_SIZE),
        ));
        self.remember_every_input =
            read_default(store, section, names::REMEMBER_EVERY_INPUT, false);

        self.dictionaries = read_default(store, section, names::DICTIONARIES, String::new());

        self.main_switch = read_default(
            store,
            section,
            names::MAIN_SWITCH,
            DEFAULT_MAIN_SWITCH.to_string(),
        );
        self.letter_switch = read_default(
            store,
            section,
            names::LETTER_SWITCH,
            DEFAULT_LETTER_SWITCH.to_string(),
        );
        self.punct_switch = read_default(
            store,
            section,
            names::PUNCT_SWITCH,
            DEFAULT_PUNCT_SWITCH.to_string(),
        );
        self.trad_switch = read_default(
            store,
            section,
            names::TRAD_SWITCH,
            DEFAULT_TRAD_SWITCH.to_string(),
        );

        let fuzzy = read_default(store, section, FUZZY_PINYIN.name, FUZZY_PINYIN.default);
        self.options.apply_umbrella(FUZZY_PINYIN, fuzzy);

        for row in BASE_OPTIONS {
            let on = read_default(store, section, row.name, row.default_value());
            self.options.apply_row(*row, on);
        }
    }
}
