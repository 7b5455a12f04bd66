// Pinyin Fallback Shared Config
// A profile behind a lock, fed by store notifications from another thread

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::backend::{ConfigListener, DictionaryManager, NullDictionary};
use super::profile::{ChangeOutcome, ConfigProfile};
use super::{ConfigValue, OptionSnapshot};
use crate::store::KeyValueStore;

type SharedDictionary = Arc<dyn DictionaryManager + Send + Sync>;
type SharedListener = Arc<dyn ConfigListener + Send + Sync>;

/// Profile shared between the store's notification thread and the sessions
/// reading it.
///
/// Each change is applied under one write lock, so readers always see the
/// profile either before or after it.
pub struct SharedConfig<P: ConfigProfile> {
    profile: RwLock<P>,
    dictionary: SharedDictionary,
    listener: Option<SharedListener>,
}

impl<P: ConfigProfile> SharedConfig<P> {
    pub fn new(profile: P) -> Self {
        Self {
            profile: RwLock::new(profile),
            dictionary: Arc::new(NullDictionary),
            listener: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: SharedDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_listener(mut self, listener: SharedListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Read access to the profile. Hold the guard only briefly: changes
    /// wait for it.
    pub fn read(&self) -> RwLockReadGuard<'_, P> {
        self.profile.read()
    }

    pub fn options(&self) -> OptionSnapshot {
        self.profile.read().options()
    }

    /// Handle one value-changed notification from the store.
    ///
    /// A dictionary command runs after the write lock is released, so the
    /// collaborator may read this config back.
    pub fn on_value_changed(
        &self,
        section: &str,
        name: &str,
        value: &ConfigValue,
    ) -> ChangeOutcome {
        let (outcome, pending, options) = {
            let mut profile = self.profile.write();
            let (outcome, pending) = profile.stage_named_change(section, name, value);
            (outcome, pending, profile.options())
        };

        if let Some(pending) = pending {
            pending.dispatch(self.dictionary.as_ref());
        }
        if outcome.is_changed() {
            self.notify(section, options);
        }
        outcome
    }

    /// Replace the whole profile with what `store` holds for its section
    pub fn reload(&self, store: &dyn KeyValueStore) {
        let (section, options) = {
            let mut profile = self.profile.write();
            profile.load(store);
            (profile.section(), profile.options())
        };
        log::debug!("reloaded section {}", section);
        self.notify(section, options);
    }

    fn notify(&self, section: &str, options: OptionSnapshot) {
        if let Some(listener) = &self.listener {
            listener.options_changed(section, options);
        }
    }
}

impl<P: ConfigProfile + Clone> SharedConfig<P> {
    /// Owned copy of the current profile
    pub fn snapshot(&self) -> P {
        self.profile.read().clone()
    }
}

impl<P: ConfigProfile + Default> Default for SharedConfig<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
