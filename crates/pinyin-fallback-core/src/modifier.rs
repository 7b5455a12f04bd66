// Pinyin Fallback Modifier System
// Represents the modifier state bits that accompany every key event

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A single modifier, such as Shift or Ctrl
///
/// Parsing accepts the common aliases (`Ctrl`, `Alt`, `Win`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Modifier {
    #[strum(to_string = "Shift")]
    Shift,
    #[strum(to_string = "Lock", serialize = "CapsLock")]
    Lock,
    #[strum(to_string = "Control", serialize = "Ctrl", serialize = "C")]
    Control,
    #[strum(to_string = "Alt", serialize = "Mod1", serialize = "A", serialize = "Option")]
    Alt,
    #[strum(to_string = "Mod2", serialize = "NumLock")]
    Mod2,
    #[strum(to_string = "Mod3")]
    Mod3,
    #[strum(to_string = "Mod4")]
    Mod4,
    #[strum(to_string = "Mod5")]
    Mod5,
    #[strum(to_string = "Super", serialize = "Win", serialize = "Cmd")]
    Super,
    #[strum(to_string = "Hyper")]
    Hyper,
    #[strum(to_string = "Meta")]
    Meta,
    #[strum(to_string = "Release")]
    Release,
}

impl Modifier {
    /// The bit this modifier occupies in the host's state mask
    pub const fn bit(self) -> u32 {
        match self {
            Modifier::Shift => 1 << 0,
            Modifier::Lock => 1 << 1,
            Modifier::Control => 1 << 2,
            Modifier::Alt => 1 << 3,
            Modifier::Mod2 => 1 << 4,
            Modifier::Mod3 => 1 << 5,
            Modifier::Mod4 => 1 << 6,
            Modifier::Mod5 => 1 << 7,
            Modifier::Super => 1 << 26,
            Modifier::Hyper => 1 << 27,
            Modifier::Meta => 1 << 28,
            Modifier::Release => 1 << 30,
        }
    }
}

/// Bit set of held modifiers, laid out the way the host reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ModifierMask(pub u32);

impl ModifierMask {
    pub const SHIFT: ModifierMask = ModifierMask(Modifier::Shift.bit());
    pub const CONTROL: ModifierMask = ModifierMask(Modifier::Control.bit());
    pub const ALT: ModifierMask = ModifierMask(Modifier::Alt.bit());
    pub const SUPER: ModifierMask = ModifierMask(Modifier::Super.bit());
    pub const HYPER: ModifierMask = ModifierMask(Modifier::Hyper.bit());
    pub const META: ModifierMask = ModifierMask(Modifier::Meta.bit());

    /// Control, Alt, Super, Hyper and Meta. Shift is not a command modifier:
    /// it is how most punctuation is typed.
    pub const COMMAND: ModifierMask = ModifierMask(
        Modifier::Control.bit()
            | Modifier::Alt.bit()
            | Modifier::Super.bit()
            | Modifier::Hyper.bit()
            | Modifier::Meta.bit(),
    );

    /// Modifiers that participate in dispatch. Lock states (caps, num) and
    /// the release flag never block literal input.
    pub const SIGNIFICANT: ModifierMask = ModifierMask(Modifier::Shift.bit() | Self::COMMAND.0);

    pub const fn empty() -> Self {
        ModifierMask(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: ModifierMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn has(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// Drop everything except shift and the command modifiers
    pub const fn normalize(self) -> Self {
        ModifierMask(self.0 & Self::SIGNIFICANT.0)
    }

    /// Only the command modifiers that are held
    pub const fn command_bits(self) -> Self {
        ModifierMask(self.0 & Self::COMMAND.0)
    }

    /// Held modifiers in declaration order
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::iter().filter(move |m| self.has(*m))
    }
}

impl From<Modifier> for ModifierMask {
    fn from(modifier: Modifier) -> Self {
        ModifierMask(modifier.bit())
    }
}

impl FromIterator<Modifier> for ModifierMask {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModifierMask::empty(), |mask, m| mask | m.into())
    }
}

impl BitOr for ModifierMask {
    type Output = ModifierMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        ModifierMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ModifierMask {
    type Output = ModifierMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        ModifierMask(self.0 & rhs.0)
    }
}

impl Not for ModifierMask {
    type Output = ModifierMask;

    fn not(self) -> Self::Output {
        ModifierMask(!self.0)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.iter() {
            write!(f, "<{}>", modifier)?;
        }
        Ok(())
    }
}
