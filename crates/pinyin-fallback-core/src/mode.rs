// Pinyin Fallback Input Modes
// The Chinese / full-width / full-punctuation switches consulted per key event

use parking_lot::RwLock;

use crate::config::BaseConfig;

/// Point-in-time view of the input mode switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeSnapshot {
    pub chinese: bool,
    pub full_width: bool,
    pub full_punct: bool,
}

impl Default for ModeSnapshot {
    fn default() -> Self {
        Self {
            chinese: true,
            full_width: false,
            full_punct: true,
        }
    }
}

/// Read access to the mode switches, plus the one mutation the editor is
/// allowed to make (the Ctrl+period shortcut).
pub trait ModeProvider {
    fn snapshot(&self) -> ModeSnapshot;

    fn toggle_full_punct_mode(&self);

    fn is_chinese_mode(&self) -> bool {
        self.snapshot().chinese
    }

    fn is_full_width_mode(&self) -> bool {
        self.snapshot().full_width
    }

    fn is_full_punct_mode(&self) -> bool {
        self.snapshot().full_punct
    }
}

/// Mode switches shared between the session and whatever drives the
/// property panel. Every read returns a whole snapshot taken under one lock.
#[derive(Debug, Default)]
pub struct InputModes {
    state: RwLock<ModeSnapshot>,
}

impl InputModes {
    pub fn new(initial: ModeSnapshot) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    /// Seed the switches from a profile's init-state settings
    pub fn from_profile(config: &BaseConfig) -> Self {
        Self::new(ModeSnapshot {
            chinese: config.init_chinese,
            full_width: config.init_full,
            full_punct: config.init_full_punct,
        })
    }

    pub fn set_chinese_mode(&self, on: bool) {
        self.state.write().chinese = on;
    }

    pub fn set_full_width_mode(&self, on: bool) {
        self.state.write().full_width = on;
    }

    pub fn set_full_punct_mode(&self, on: bool) {
        self.state.write().full_punct = on;
    }
}

impl ModeProvider for InputModes {
    fn snapshot(&self) -> ModeSnapshot {
        *self.state.read()
    }

    fn toggle_full_punct_mode(&self) {
        let mut state = self.state.write();
        state.full_punct = !state.full_punct;
        log::debug!("full punctuation mode -> {}", state.full_punct);
    }
}

impl<M: ModeProvider + ?Sized> ModeProvider for &M {
    fn snapshot(&self) -> ModeSnapshot {
        (**self).snapshot()
    }

    fn toggle_full_punct_mode(&self) {
        (**self).toggle_full_punct_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        let modes = InputModes::default();
        assert!(modes.is_chinese_mode());
        assert!(!modes.is_full_width_mode());
        assert!(modes.is_full_punct_mode());
    }

    #[test]
    fn test_toggle_full_punct() {
        let modes = InputModes::default();
        modes.toggle_full_punct_mode();
        assert!(!modes.is_full_punct_mode());
        modes.toggle_full_punct_mode();
        assert!(modes.is_full_punct_mode());
    }

    #[test]
    fn test_from_profile_uses_init_states() {
        let mut config = BaseConfig::default();
        config.init_chinese = false;
        config.init_full = true;
        config.init_full_punct = false;
        let modes = InputModes::from_profile(&config);
        assert_eq!(
            modes.snapshot(),
            ModeSnapshot {
                chinese: false,
                full_width: true,
                full_punct: false,
            }
        );
    }
}
