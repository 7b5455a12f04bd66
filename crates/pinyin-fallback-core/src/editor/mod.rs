// Pinyin Fallback Editor
// Handles key events when no candidate-producing editor is active:
// literal letters and digits, half/full-width conversion, and
// punctuation transliteration

pub mod punct;
pub mod rules;

use crate::width::{to_full_width, IDEOGRAPHIC_SPACE};
use crate::{Commit, CommitSink, KeyEvent, ModeProvider, ModifierMask};

use punct::{PunctGlyph, DOUBLE_QUOTES, FULL_STOP, SINGLE_QUOTES};
use rules::Route;

/// Outcome of classifying one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyResult {
    /// Whether the event was consumed; unconsumed events go back to the host
    pub consumed: bool,
    /// What was committed, if anything
    pub emission: Option<Commit>,
}

impl ClassifyResult {
    pub fn ignored() -> Self {
        Self {
            consumed: false,
            emission: None,
        }
    }

    fn consumed_without_text() -> Self {
        Self {
            consumed: true,
            emission: None,
        }
    }

    fn committed(commit: Commit) -> Self {
        Self {
            consumed: true,
            emission: Some(commit),
        }
    }
}

/// Per-session fallback editor.
///
/// Each input session owns one instance; the quote parity and the last
/// committed character must never be shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEditor {
    /// `true` when the next single quote opens
    quote: bool,
    /// `true` when the next double quote opens
    double_quote: bool,
    /// Key value of the last commit, used to keep decimal points after digits
    prev_committed_char: Option<char>,
}

impl Default for FallbackEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackEditor {
    pub fn new() -> Self {
        Self {
            quote: true,
            double_quote: true,
            prev_committed_char: None,
        }
    }

    pub fn quote_opens(&self) -> bool {
        self.quote
    }

    pub fn double_quote_opens(&self) -> bool {
        self.double_quote
    }

    pub fn last_committed_char(&self) -> Option<char> {
        self.prev_committed_char
    }

    /// Put both quote toggles back on their opening glyph. The last
    /// committed character survives a reset.
    pub fn reset(&mut self) {
        self.quote = true;
        self.double_quote = true;
    }

    /// Classify one key event, committing through `sink` when it is consumed.
    pub fn process_key_event<M, S>(
        &mut self,
        event: KeyEvent,
        modes: &M,
        sink: &mut S,
    ) -> ClassifyResult
    where
        M: ModeProvider + ?Sized,
        S: CommitSink + ?Sized,
    {
        let modifiers = event.modifiers.normalize();

        let result = match rules::route(event.keysym) {
            Some(Route::Literal(ch)) if modifiers.is_empty() => {
                let full_width = modes.is_full_width_mode();
                self.commit_literal(ch, full_width, sink)
            }
            Some(Route::Space) if modifiers.is_empty() => {
                let commit = if modes.is_full_width_mode() {
                    Commit::Char(IDEOGRAPHIC_SPACE)
                } else {
                    Commit::Char(' ')
                };
                self.emit(' ', commit, sink)
            }
            Some(Route::Punct(ch)) => self.process_punct(ch, modifiers, modes, sink),
            _ => ClassifyResult::ignored(),
        };

        log::trace!(
            "fallback {} {} (keycode {}) -> consumed={} {:?}",
            event.modifiers,
            event.keysym,
            event.keycode,
            result.consumed,
            result.emission
        );
        result
    }

    fn process_punct<M, S>(
        &mut self,
        ch: char,
        modifiers: ModifierMask,
        modes: &M,
        sink: &mut S,
    ) -> ClassifyResult
    where
        M: ModeProvider + ?Sized,
        S: CommitSink + ?Sized,
    {
        let command = modifiers.command_bits();

        // Ctrl+period is checked before stray modifiers are rejected
        if ch == '.' && command == ModifierMask::CONTROL {
            modes.toggle_full_punct_mode();
            return ClassifyResult::consumed_without_text();
        }

        // leave host shortcuts alone
        if !command.is_empty() {
            return ClassifyResult::ignored();
        }

        let snapshot = modes.snapshot();
        if snapshot.chinese && snapshot.full_punct {
            if let Some(glyph) = punct::lookup(ch) {
                let commit = self.transliterate(glyph);
                return self.emit(ch, commit, sink);
            }
        }

        self.commit_literal(ch, snapshot.full_width, sink)
    }

    fn transliterate(&mut self, glyph: PunctGlyph) -> Commit {
        match glyph {
            PunctGlyph::Fixed(text) => Commit::Text(text),
            PunctGlyph::SingleQuote => {
                let text = if self.quote { SINGLE_QUOTES.0 } else { SINGLE_QUOTES.1 };
                self.quote = !self.quote;
                Commit::Text(text)
            }
            PunctGlyph::DoubleQuote => {
                let text = if self.double_quote {
                    DOUBLE_QUOTES.0
                } else {
                    DOUBLE_QUOTES.1
                };
                self.double_quote = !self.double_quote;
                Commit::Text(text)
            }
            PunctGlyph::Period => match self.prev_committed_char {
                Some(prev) if prev.is_ascii_digit() => Commit::Char('.'),
                _ => Commit::Text(FULL_STOP),
            },
        }
    }

    fn commit_literal<S>(&mut self, ch: char, full_width: bool, sink: &mut S) -> ClassifyResult
    where
        S: CommitSink + ?Sized,
    {
        let commit = if full_width {
            Commit::Char(to_full_width(ch))
        } else {
            Commit::Char(ch)
        };
        self.emit(ch, commit, sink)
    }

    /// Commit once and remember the key value (not the glyph)
    fn emit<S>(&mut self, key: char, commit: Commit, sink: &mut S) -> ClassifyResult
    where
        S: CommitSink + ?Sized,
    {
        self.prev_committed_char = Some(key);
        sink.commit(commit.clone());
        ClassifyResult::committed(commit)
    }
}
