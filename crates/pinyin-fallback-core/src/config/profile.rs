// Pinyin Fallback Config Profiles
// A profile is the base schema plus a handful of profile-only settings

use super::backend::{DictionaryAction, DictionaryManager, PendingAction};
use super::{names, BaseConfig, ConfigValue, OptionSnapshot};
use crate::store::KeyValueStore;

/// Result of offering a named change to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeOutcome {
    /// The name matched and the value was stored (or the command accepted)
    Changed,
    /// The section matched but no field answers to the name
    NotMyField,
    /// The change is addressed to another profile; nothing was touched
    WrongSection,
}

impl ChangeOutcome {
    pub fn is_changed(self) -> bool {
        matches!(self, ChangeOutcome::Changed)
    }
}

/// A configuration profile kept in sync with one section of the store.
pub trait ConfigProfile {
    /// Store section this profile answers to
    fn section(&self) -> &'static str;

    fn base(&self) -> &BaseConfig;

    fn base_mut(&mut self) -> &mut BaseConfig;

    /// Restore every field to its compiled-in default
    fn reset_defaults(&mut self);

    /// Profile-only table, consulted after the base schema declined `name`
    fn apply_profile_change(&mut self, name: &str, value: &ConfigValue) -> bool;

    /// Read the profile-only settings one name at a time
    fn read_profile_legacy(&mut self, store: &dyn KeyValueStore);

    /// Dictionary command published under `name`, for profiles that own them
    fn dictionary_action(&self, _name: &str) -> Option<DictionaryAction> {
        None
    }

    fn options(&self) -> OptionSnapshot {
        self.base().options
    }

    /// Apply one `(section, name, value)` change from the store.
    ///
    /// Dictionary commands are not run here: they come back as a
    /// [`PendingAction`] for the caller to dispatch, outside any lock it
    /// holds on the profile.
    fn stage_named_change(
        &mut self,
        section: &str,
        name: &str,
        value: &ConfigValue,
    ) -> (ChangeOutcome, Option<PendingAction>) {
        if section != self.section() {
            return (ChangeOutcome::WrongSection, None);
        }

        if let Some(action) = self.dictionary_action(name) {
            log::debug!("{}/{} queued {}", section, name, action);
            let pending = PendingAction::new(action, value.normalize(String::new()));
            return (ChangeOutcome::Changed, Some(pending));
        }

        let handled =
            self.base_mut().apply_change(name, value) || self.apply_profile_change(name, value);

        if handled {
            log::debug!("{}/{} = {}", section, name, value);
            (ChangeOutcome::Changed, None)
        } else {
            log::debug!("{}/{} is not a known setting", section, name);
            (ChangeOutcome::NotMyField, None)
        }
    }

    /// Apply one change and run any dictionary command right away
    fn apply_named_change(
        &mut self,
        section: &str,
        name: &str,
        value: &ConfigValue,
        dictionary: &dyn DictionaryManager,
    ) -> ChangeOutcome {
        let (outcome, pending) = self.stage_named_change(section, name, value);
        if let Some(pending) = pending {
            pending.dispatch(dictionary);
        }
        outcome
    }

    /// Reset to defaults, then pull the profile's section from `store`.
    ///
    /// A store that can deliver the whole section has every value replayed
    /// as a change (action names are skipped: loading never runs dictionary
    /// commands). Otherwise each known name is read with its fallback.
    fn load(&mut self, store: &dyn KeyValueStore) {
        self.reset_defaults();
        let section = self.section();

        match store.values(section) {
            Some(values) => {
                for (name, value) in values {
                    if names::is_action(&name) {
                        continue;
                    }
                    self.stage_named_change(section, &name, &value);
                }
            }
            None => {
                self.base_mut().read_legacy(store, section);
                self.read_profile_legacy(store);
            }
        }
    }
}
