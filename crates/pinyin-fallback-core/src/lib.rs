// Pinyin Fallback Core Library
// Key classification for the pinyin/bopomofo fallback editor and its option store

pub mod commit;
pub mod config;
pub mod editor;
pub mod keysym;
pub mod mode;
pub mod modifier;
pub mod store;
pub mod width;

pub use commit::{Commit, CommitSink};
pub use config::{
    BopomofoConfig, ChangeOutcome, ConfigListener, ConfigProfile, ConfigValue, DictionaryManager,
    OptionBits, OptionSnapshot, PinyinConfig, SharedConfig,
};
pub use editor::rules::KeyRule;
pub use editor::{ClassifyResult, FallbackEditor};
pub use keysym::{KeyEvent, Keysym};
pub use mode::{InputModes, ModeProvider, ModeSnapshot};
pub use modifier::{Modifier, ModifierMask};
pub use store::{read_default, KeyValueStore, MemoryStore, StoreError};
pub use width::to_full_width;

#[cfg(feature = "toml-store")]
pub use store::TomlStore;
