// Pinyin Fallback Dispatch Rules
// Ordered guarded rules that route a keysym to a handler

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::Keysym;

/// Where a keysym is routed, with the canonical character it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Letter or digit, committed literally when no modifier is held
    Literal(char),
    /// Space, committed when no modifier is held
    Space,
    /// Punctuation, handed to the punctuation machine
    Punct(char),
}

/// Dispatch rules in priority order.
///
/// Each rule canonicalizes the keysyms it claims (keypad digits become main
/// keyboard digits, keypad space becomes space, keypad operators become
/// their printable punctuation) and the first rule that claims a keysym wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum KeyRule {
    LetterOrDigit,
    Space,
    Punct,
    KeypadOperator,
}

impl KeyRule {
    /// All rules, in evaluation order
    pub fn all() -> impl Iterator<Item = KeyRule> {
        KeyRule::iter()
    }

    pub fn route(self, keysym: Keysym) -> Option<Route> {
        match self {
            KeyRule::LetterOrDigit => {
                let keysym = keysym.canonical_digit();
                if keysym.is_ascii_letter() || keysym.is_digit() {
                    keysym.to_char().map(Route::Literal)
                } else {
                    None
                }
            }
            KeyRule::Space => {
                (keysym == Keysym::SPACE || keysym == Keysym::KP_SPACE).then_some(Route::Space)
            }
            KeyRule::Punct => {
                if keysym.is_ascii_punct() {
                    keysym.to_char().map(Route::Punct)
                } else {
                    None
                }
            }
            KeyRule::KeypadOperator => keypad_operator(keysym).map(Route::Punct),
        }
    }
}

/// Keypad operators and the punctuation they type. The keypad separator is
/// left out: its meaning depends on the locale.
fn keypad_operator(keysym: Keysym) -> Option<char> {
    let ch = match keysym {
        Keysym::KP_EQUAL => '=',
        Keysym::KP_MULTIPLY => '*',
        Keysym::KP_ADD => '+',
        Keysym::KP_SUBTRACT => '-',
        Keysym::KP_DECIMAL => '.',
        Keysym::KP_DIVIDE => '/',
        _ => return None,
    };
    Some(ch)
}

/// Run the rule table; `None` means no rule claims the keysym
pub fn route(keysym: Keysym) -> Option<Route> {
    KeyRule::all().find_map(|rule| rule.route(keysym))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<KeyRule> = KeyRule::all().collect();
        assert_eq!(
            order,
            vec![
                KeyRule::LetterOrDigit,
                KeyRule::Space,
                KeyRule::Punct,
                KeyRule::KeypadOperator
            ]
        );
    }

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(route(Keysym::from('q')), Some(Route::Literal('q')));
        assert_eq!(route(Keysym::from('Q')), Some(Route::Literal('Q')));
        assert_eq!(route(Keysym::from('0')), Some(Route::Literal('0')));
        assert_eq!(route(Keysym(0xffb4)), Some(Route::Literal('4')));
    }

    #[test]
    fn test_space_variants() {
        assert_eq!(route(Keysym::SPACE), Some(Route::Space));
        assert_eq!(route(Keysym::KP_SPACE), Some(Route::Space));
    }

    #[test]
    fn test_keypad_operators() {
        let cases = [
            (Keysym::KP_EQUAL, '='),
            (Keysym::KP_MULTIPLY, '*'),
            (Keysym::KP_ADD, '+'),
            (Keysym::KP_SUBTRACT, '-'),
            (Keysym::KP_DECIMAL, '.'),
            (Keysym::KP_DIVIDE, '/'),
        ];
        for (keysym, ch) in cases {
            assert_eq!(route(keysym), Some(Route::Punct(ch)), "{keysym}");
        }
    }

    #[test]
    fn test_unrouted_keys() {
        assert_eq!(route(Keysym::KP_SEPARATOR), None);
        assert_eq!(route(Keysym::KP_ENTER), None);
        assert_eq!(route(Keysym::RETURN), None);
        assert_eq!(route(Keysym::F1), None);
        assert_eq!(route(Keysym(0x00e9)), None);
    }
}
