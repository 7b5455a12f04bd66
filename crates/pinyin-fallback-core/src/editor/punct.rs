// Pinyin Fallback Punctuation Table
// ASCII punctuation and its ideographic counterpart in full punctuation mode

/// What a punctuation key turns into in Chinese full punctuation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctGlyph {
    Fixed(&'static str),
    /// Alternates between ‘ and ’
    SingleQuote,
    /// Alternates between “ and ”
    DoubleQuote,
    /// 。 unless it follows a digit, where it stays a decimal point
    Period,
}

pub const SINGLE_QUOTES: (&str, &str) = ("‘", "’");
pub const DOUBLE_QUOTES: (&str, &str) = ("“", "”");
pub const FULL_STOP: &str = "。";

/// Punctuation with no table entry. These fall through to the plain
/// literal/full-width commit.
pub const UNMAPPED: [char; 10] = ['@', '#', '%', '&', '*', '-', '=', '+', '|', '/'];

pub fn lookup(ch: char) -> Option<PunctGlyph> {
    use PunctGlyph::Fixed;

    let glyph = match ch {
        '`' => Fixed("·"),
        '~' => Fixed("～"),
        '!' => Fixed("！"),
        '$' => Fixed("￥"),
        '^' => Fixed("……"),
        '(' => Fixed("（"),
        ')' => Fixed("）"),
        '_' => Fixed("——"),
        '[' => Fixed("【"),
        ']' => Fixed("】"),
        '{' => Fixed("『"),
        '}' => Fixed("』"),
        '\\' => Fixed("、"),
        ';' => Fixed("；"),
        ':' => Fixed("："),
        '\'' => PunctGlyph::SingleQuote,
        '"' => PunctGlyph::DoubleQuote,
        ',' => Fixed("，"),
        '.' => PunctGlyph::Period,
        '<' => Fixed("《"),
        '>' => Fixed("》"),
        '?' => Fixed("？"),
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_entries() {
        assert_eq!(lookup('`'), Some(PunctGlyph::Fixed("·")));
        assert_eq!(lookup('$'), Some(PunctGlyph::Fixed("￥")));
        assert_eq!(lookup('^'), Some(PunctGlyph::Fixed("……")));
        assert_eq!(lookup('_'), Some(PunctGlyph::Fixed("——")));
        assert_eq!(lookup('\\'), Some(PunctGlyph::Fixed("、")));
        assert_eq!(lookup('<'), Some(PunctGlyph::Fixed("《")));
    }

    #[test]
    fn test_stateful_entries() {
        assert_eq!(lookup('\''), Some(PunctGlyph::SingleQuote));
        assert_eq!(lookup('"'), Some(PunctGlyph::DoubleQuote));
        assert_eq!(lookup('.'), Some(PunctGlyph::Period));
    }

    #[test]
    fn test_unmapped_list_is_exact() {
        for ch in UNMAPPED {
            assert_eq!(lookup(ch), None, "{ch} must stay unmapped");
        }
        let mapped = "`~!$^()_[]{}\\;:'\",.<>?";
        for ch in mapped.chars() {
            assert!(lookup(ch).is_some(), "{ch} must be mapped");
        }
        let all_punct = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(mapped.chars().count() + UNMAPPED.len(), all_punct.chars().count());
    }
}
