// Pinyin Fallback Width Conversion
// Half-width to full-width mapping for East Asian typesetting

/// Offset between printable ASCII and the Halfwidth and Fullwidth Forms block
const FULL_WIDTH_OFFSET: u32 = 0xfee0;

/// Ideographic space, the full-width rendering of U+0020
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Convert a half-width character to its full-width form.
///
/// Printable ASCII (`!` through `~`) maps onto U+FF01..U+FF5E and space onto
/// the ideographic space. Anything else has no full-width form and is
/// returned unchanged.
pub fn to_full_width(ch: char) -> char {
    match ch {
        ' ' => IDEOGRAPHIC_SPACE,
        '!'..='~' => char::from_u32(ch as u32 + FULL_WIDTH_OFFSET).unwrap_or(ch),
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(to_full_width('a'), 'ａ');
        assert_eq!(to_full_width('Z'), 'Ｚ');
        assert_eq!(to_full_width('0'), '０');
        assert_eq!(to_full_width('9'), '９');
    }

    #[test]
    fn test_punctuation_and_space() {
        assert_eq!(to_full_width('!'), '！');
        assert_eq!(to_full_width('~'), '～');
        assert_eq!(to_full_width(' '), '　');
    }

    #[test]
    fn test_outside_ascii_is_unchanged() {
        assert_eq!(to_full_width('\n'), '\n');
        assert_eq!(to_full_width('中'), '中');
        assert_eq!(to_full_width('ａ'), 'ａ');
    }
}
