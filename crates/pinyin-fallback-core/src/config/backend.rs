// Pinyin Fallback Back-End Collaborators
// Dictionary management commands and option-change subscribers

use strum_macros::{Display, EnumString};

use super::OptionSnapshot;

/// Dictionary management, driven by the three action names
pub trait DictionaryManager {
    fn import_dictionary(&self, path: &str);

    fn export_dictionary(&self, path: &str);

    fn clear_user_data(&self, target: &str);
}

/// One of the dictionary commands a setting name can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DictionaryAction {
    #[strum(to_string = "ImportDictionary")]
    Import,
    #[strum(to_string = "ExportDictionary")]
    Export,
    #[strum(to_string = "ClearUserData")]
    Clear,
}

impl DictionaryAction {
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Hand `argument` to the matching collaborator method
    pub fn dispatch<D: DictionaryManager + ?Sized>(self, dictionary: &D, argument: &str) {
        log::debug!("dictionary action {} {:?}", self, argument);
        match self {
            DictionaryAction::Import => dictionary.import_dictionary(argument),
            DictionaryAction::Export => dictionary.export_dictionary(argument),
            DictionaryAction::Clear => dictionary.clear_user_data(argument),
        }
    }
}

/// A dictionary command accepted by a profile but not yet run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: DictionaryAction,
    pub argument: String,
}

impl PendingAction {
    pub fn new(action: DictionaryAction, argument: String) -> Self {
        Self { action, argument }
    }

    pub fn dispatch<D: DictionaryManager + ?Sized>(&self, dictionary: &D) {
        self.action.dispatch(dictionary, &self.argument);
    }
}

/// Dictionary manager that drops every command
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDictionary;

impl DictionaryManager for NullDictionary {
    fn import_dictionary(&self, path: &str) {
        log::debug!("no dictionary manager, import of {:?} dropped", path);
    }

    fn export_dictionary(&self, path: &str) {
        log::debug!("no dictionary manager, export to {:?} dropped", path);
    }

    fn clear_user_data(&self, target: &str) {
        log::debug!("no dictionary manager, clear of {:?} dropped", target);
    }
}

/// Receives the option set of a profile after each accepted change
pub trait ConfigListener {
    fn options_changed(&self, section: &str, options: OptionSnapshot);
}
