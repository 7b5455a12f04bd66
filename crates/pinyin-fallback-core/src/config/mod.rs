// Pinyin Fallback Config
// Option profiles kept in sync with the external key-value store

pub mod backend;
pub mod base;
pub mod bopomofo;
pub mod names;
pub mod options;
pub mod pinyin;
pub mod profile;
pub mod scheme;
pub mod shared;
pub mod value;

pub use backend::{
    ConfigListener, DictionaryAction, DictionaryManager, NullDictionary, PendingAction,
};
pub use base::BaseConfig;
pub use bopomofo::{BopomofoConfig, BOPOMOFO_SECTION};
pub use options::{OptionBits, OptionRow, OptionSnapshot, Umbrella};
pub use pinyin::{PinyinConfig, PINYIN_SECTION};
pub use profile::{ChangeOutcome, ConfigProfile};
pub use scheme::{ChewingScheme, DoublePinyinScheme, Orientation};
pub use shared::SharedConfig;
pub use value::{ConfigValue, FromConfigValue};
