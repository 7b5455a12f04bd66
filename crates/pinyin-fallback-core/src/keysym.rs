// Pinyin Fallback Keysym Type
// Represents a single key symbol as delivered by the input method host

use std::fmt;
use std::str::FromStr;

/// Represents a single key symbol.
///
/// This is a newtype wrapper around u32 for type safety.
/// The numeric values match the X11 keysymdef.h definitions, which is what
/// the host hands over for every key event. Printable ASCII keysyms share
/// their value with the character they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Keysym(pub u32);

impl Keysym {
    pub const SPACE: Keysym = Keysym(0x0020);
    pub const EXCLAM: Keysym = Keysym(0x0021);
    pub const SLASH: Keysym = Keysym(0x002f);
    pub const KEY_0: Keysym = Keysym(0x0030);
    pub const KEY_9: Keysym = Keysym(0x0039);
    pub const COLON: Keysym = Keysym(0x003a);
    pub const AT: Keysym = Keysym(0x0040);
    pub const UPPER_A: Keysym = Keysym(0x0041);
    pub const UPPER_Z: Keysym = Keysym(0x005a);
    pub const BRACKET_LEFT: Keysym = Keysym(0x005b);
    pub const QUOTE_LEFT: Keysym = Keysym(0x0060);
    pub const LOWER_A: Keysym = Keysym(0x0061);
    pub const LOWER_Z: Keysym = Keysym(0x007a);
    pub const BRACE_LEFT: Keysym = Keysym(0x007b);
    pub const ASCII_TILDE: Keysym = Keysym(0x007e);
    pub const PERIOD: Keysym = Keysym(0x002e);

    pub const KP_SPACE: Keysym = Keysym(0xff80);
    pub const KP_ENTER: Keysym = Keysym(0xff8d);
    pub const KP_MULTIPLY: Keysym = Keysym(0xffaa);
    pub const KP_ADD: Keysym = Keysym(0xffab);
    pub const KP_SEPARATOR: Keysym = Keysym(0xffac);
    pub const KP_SUBTRACT: Keysym = Keysym(0xffad);
    pub const KP_DECIMAL: Keysym = Keysym(0xffae);
    pub const KP_DIVIDE: Keysym = Keysym(0xffaf);
    pub const KP_0: Keysym = Keysym(0xffb0);
    pub const KP_9: Keysym = Keysym(0xffb9);
    pub const KP_EQUAL: Keysym = Keysym(0xffbd);

    pub const RETURN: Keysym = Keysym(0xff0d);
    pub const ESCAPE: Keysym = Keysym(0xff1b);
    pub const F1: Keysym = Keysym(0xffbe);

    /// Get the raw numeric keysym value
    pub fn code(self) -> u32 {
        self.0
    }

    /// The printable ASCII character this keysym produces, if any
    pub fn to_char(self) -> Option<char> {
        if (Self::SPACE.0..=Self::ASCII_TILDE.0).contains(&self.0) {
            char::from_u32(self.0)
        } else {
            None
        }
    }

    pub fn is_ascii_letter(self) -> bool {
        (Self::LOWER_A..=Self::LOWER_Z).contains(&self)
            || (Self::UPPER_A..=Self::UPPER_Z).contains(&self)
    }

    pub fn is_digit(self) -> bool {
        (Self::KEY_0..=Self::KEY_9).contains(&self)
    }

    pub fn is_keypad_digit(self) -> bool {
        (Self::KP_0..=Self::KP_9).contains(&self)
    }

    /// Map a keypad digit to its main-keyboard equivalent; other keysyms are
    /// returned unchanged
    pub fn canonical_digit(self) -> Keysym {
        if self.is_keypad_digit() {
            Keysym(self.0 - Self::KP_0.0 + Self::KEY_0.0)
        } else {
            self
        }
    }

    /// ASCII punctuation, as the four contiguous keysym ranges between the
    /// letters and digits
    pub fn is_ascii_punct(self) -> bool {
        (Self::EXCLAM..=Self::SLASH).contains(&self)
            || (Self::COLON..=Self::AT).contains(&self)
            || (Self::BRACKET_LEFT..=Self::QUOTE_LEFT).contains(&self)
            || (Self::BRACE_LEFT..=Self::ASCII_TILDE).contains(&self)
    }

    /// Get the name of this keysym
    pub fn name(self) -> String {
        if let Some(name) = keypad_name(self) {
            return name.to_string();
        }
        match self.to_char() {
            Some(' ') => "space".to_string(),
            Some(ch) => ch.to_string(),
            None => format!("0x{:04x}", self.0),
        }
    }
}

fn keypad_name(keysym: Keysym) -> Option<&'static str> {
    let name = match keysym {
        Keysym::KP_SPACE => "KP_Space",
        Keysym::KP_ENTER => "KP_Enter",
        Keysym::KP_MULTIPLY => "KP_Multiply",
        Keysym::KP_ADD => "KP_Add",
        Keysym::KP_SEPARATOR => "KP_Separator",
        Keysym::KP_SUBTRACT => "KP_Subtract",
        Keysym::KP_DECIMAL => "KP_Decimal",
        Keysym::KP_DIVIDE => "KP_Divide",
        Keysym::KP_EQUAL => "KP_Equal",
        Keysym::RETURN => "Return",
        Keysym::ESCAPE => "Escape",
        Keysym::F1 => "F1",
        _ if keysym.is_keypad_digit() => {
            const DIGITS: [&str; 10] = [
                "KP_0", "KP_1", "KP_2", "KP_3", "KP_4", "KP_5", "KP_6", "KP_7", "KP_8", "KP_9",
            ];
            DIGITS[(keysym.0 - Keysym::KP_0.0) as usize]
        }
        _ => return None,
    };
    Some(name)
}

impl From<u32> for Keysym {
    fn from(code: u32) -> Self {
        Keysym(code)
    }
}

impl From<char> for Keysym {
    fn from(ch: char) -> Self {
        Keysym(ch as u32)
    }
}

impl From<Keysym> for u32 {
    fn from(keysym: Keysym) -> Self {
        keysym.0
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Keysym {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "space" {
            return Ok(Keysym::SPACE);
        }
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            let keysym = Keysym::from(ch);
            if keysym.to_char().is_some() {
                return Ok(keysym);
            }
        }
        (0..=0xffu32)
            .map(|low| Keysym(0xff00 | low))
            .find(|keysym| keypad_name(*keysym) == Some(s))
            .ok_or_else(|| format!("Unknown keysym: {}", s))
    }
}

/// A single key press as handed to the input method by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub keysym: Keysym,
    /// Hardware scancode; carried through but never used for dispatch
    pub keycode: u32,
    pub modifiers: crate::ModifierMask,
}

impl KeyEvent {
    pub fn new(keysym: Keysym, keycode: u32, modifiers: crate::ModifierMask) -> Self {
        Self {
            keysym,
            keycode,
            modifiers,
        }
    }

    /// A press of `keysym` with no modifiers held
    pub fn plain(keysym: impl Into<Keysym>) -> Self {
        Self::new(keysym.into(), 0, crate::ModifierMask::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keysym_to_char() {
        assert_eq!(Keysym::from('a').to_char(), Some('a'));
        assert_eq!(Keysym::SPACE.to_char(), Some(' '));
        assert_eq!(Keysym(0xffb5).to_char(), None);
    }

    #[test]
    fn test_canonical_digit() {
        assert_eq!(Keysym(0xffb7).canonical_digit(), Keysym::from('7'));
        assert_eq!(Keysym::from('7').canonical_digit(), Keysym::from('7'));
        assert_eq!(Keysym::from('x').canonical_digit(), Keysym::from('x'));
    }

    #[test]
    fn test_punct_ranges() {
        for ch in "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".chars() {
            assert!(Keysym::from(ch).is_ascii_punct(), "{ch} should be punctuation");
        }
        for ch in "aZ09 ".chars() {
            assert!(!Keysym::from(ch).is_ascii_punct(), "{ch} is not punctuation");
        }
    }

    #[test]
    fn test_keysym_names() {
        assert_eq!(Keysym::KP_DECIMAL.name(), "KP_Decimal");
        assert_eq!(Keysym(0xffb3).name(), "KP_3");
        assert_eq!(Keysym::SPACE.name(), "space");
        assert_eq!("KP_Divide".parse::<Keysym>(), Ok(Keysym::KP_DIVIDE));
        assert_eq!("q".parse::<Keysym>(), Ok(Keysym::from('q')));
        assert!("Bogus".parse::<Keysym>().is_err());
    }
}
