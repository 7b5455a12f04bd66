// Pinyin Fallback Editor Scenarios
//
// Key sequences a user types while no candidate editor is active, checked
// against what gets committed and what is handed back to the host.
//
// Run with: cargo test --test editor_scenarios

use pinyin_fallback_core::editor::punct::UNMAPPED;
use pinyin_fallback_core::{
    ClassifyResult, Commit, FallbackEditor, InputModes, KeyEvent, KeyRule, Keysym, ModeProvider,
    ModeSnapshot, ModifierMask,
};

// =========================================================================
// Test Helpers
// =========================================================================

const LOCK: ModifierMask = ModifierMask(1 << 1);

fn chinese_modes() -> InputModes {
    InputModes::new(ModeSnapshot {
        chinese: true,
        full_width: false,
        full_punct: true,
    })
}

/// Press each character as an unmodified key and collect the output
fn type_text(editor: &mut FallbackEditor, modes: &InputModes, text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        editor.process_key_event(KeyEvent::plain(ch), modes, &mut out);
    }
    out
}

fn press(
    editor: &mut FallbackEditor,
    modes: &InputModes,
    keysym: Keysym,
    modifiers: ModifierMask,
) -> (ClassifyResult, Vec<Commit>) {
    let mut commits = Vec::new();
    let result = editor.process_key_event(KeyEvent::new(keysym, 0, modifiers), modes, &mut commits);
    (result, commits)
}

// =========================================================================
// Literals
// =========================================================================

#[test]
fn test_letters_and_digits_commit_once() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    for ch in "azAZ09".chars() {
        let (result, commits) = press(&mut editor, &modes, Keysym::from(ch), ModifierMask::empty());
        assert!(result.consumed);
        assert_eq!(commits, vec![Commit::Char(ch)]);
        assert_eq!(editor.last_committed_char(), Some(ch));
    }
}

#[test]
fn test_full_width_letters_digits_and_space() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    modes.set_full_width_mode(true);
    assert_eq!(type_text(&mut editor, &modes, "a1 Z"), "ａ１　Ｚ");
}

#[test]
fn test_letters_with_modifiers_go_to_host() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    for mask in [
        ModifierMask::SHIFT,
        ModifierMask::CONTROL,
        ModifierMask::ALT,
        ModifierMask::SUPER,
    ] {
        let (result, commits) = press(&mut editor, &modes, Keysym::from('x'), mask);
        assert!(!result.consumed);
        assert!(commits.is_empty());
    }

    // lock bits are not modifiers
    let (result, _) = press(&mut editor, &modes, Keysym::from('x'), LOCK);
    assert!(result.consumed);
}

#[test]
fn test_non_printing_keys_are_ignored() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    for keysym in [Keysym::RETURN, Keysym::ESCAPE, Keysym::F1, Keysym::KP_ENTER] {
        let (result, commits) = press(&mut editor, &modes, keysym, ModifierMask::empty());
        assert_eq!(result, ClassifyResult::ignored());
        assert!(commits.is_empty());
    }
    assert_eq!(editor.last_committed_char(), None);
}

// =========================================================================
// Punctuation
// =========================================================================

#[test]
fn test_chinese_punctuation_table() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    assert_eq!(
        type_text(&mut editor, &modes, "`~!$^()_[]{}\\;:,<>?"),
        "·～！￥……（）——【】『』、；：，《》？"
    );
}

#[test]
fn test_shifted_punctuation_is_transliterated() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    let (result, commits) = press(&mut editor, &modes, Keysym::EXCLAM, ModifierMask::SHIFT);
    assert!(result.consumed);
    assert_eq!(commits, vec![Commit::Text("！")]);
}

#[test]
fn test_quotes_alternate_independently() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    assert_eq!(
        type_text(&mut editor, &modes, "'\"'\"'"),
        "‘“’”‘"
    );
    assert!(!editor.quote_opens());
    assert!(editor.double_quote_opens());
}

#[test]
fn test_quote_parity_survives_mode_switch() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    type_text(&mut editor, &modes, "'");

    modes.set_chinese_mode(false);
    assert_eq!(type_text(&mut editor, &modes, "'"), "'");

    modes.set_chinese_mode(true);
    assert_eq!(type_text(&mut editor, &modes, "'"), "’");
}

#[test]
fn test_decimal_point_after_digit() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    assert_eq!(type_text(&mut editor, &modes, "3.14"), "3.14");
    assert_eq!(type_text(&mut editor, &modes, "a."), "a。");
    assert_eq!(type_text(&mut editor, &modes, ".."), "。。");
}

#[test]
fn test_decimal_point_after_keypad_digit() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    let mut out = String::new();
    editor.process_key_event(KeyEvent::plain(Keysym(0xffb5)), &modes, &mut out);
    editor.process_key_event(KeyEvent::plain(Keysym::KP_DECIMAL), &modes, &mut out);
    assert_eq!(out, "5.");
}

#[test]
fn test_unmapped_punctuation_falls_through() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    for ch in UNMAPPED {
        let (result, commits) = press(&mut editor, &modes, Keysym::from(ch), ModifierMask::empty());
        assert!(result.consumed, "{ch} should be consumed");
        assert_eq!(commits, vec![Commit::Char(ch)]);
    }

    modes.set_full_width_mode(true);
    assert_eq!(type_text(&mut editor, &modes, "@/"), "＠／");
}

#[test]
fn test_half_punct_and_english_modes() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();

    modes.set_full_punct_mode(false);
    assert_eq!(type_text(&mut editor, &modes, ",.?"), ",.?");
    modes.set_full_width_mode(true);
    assert_eq!(type_text(&mut editor, &modes, ",?"), "，？");

    modes.set_full_width_mode(false);
    modes.set_full_punct_mode(true);
    modes.set_chinese_mode(false);
    assert_eq!(type_text(&mut editor, &modes, ",'"), ",'");
}

#[test]
fn test_alt_punctuation_goes_to_host() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    for ch in [',', '.', '\'', '@'] {
        let (result, commits) = press(&mut editor, &modes, Keysym::from(ch), ModifierMask::ALT);
        assert!(!result.consumed);
        assert!(commits.is_empty());
    }
    assert!(editor.quote_opens());
    assert!(modes.is_full_punct_mode());
}

// =========================================================================
// Ctrl+period
// =========================================================================

#[test]
fn test_ctrl_period_toggles_full_punct() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();

    for mask in [
        ModifierMask::CONTROL,
        ModifierMask::CONTROL | ModifierMask::SHIFT,
        ModifierMask::CONTROL | LOCK,
    ] {
        let before = modes.is_full_punct_mode();
        let (result, commits) = press(&mut editor, &modes, Keysym::PERIOD, mask);
        assert!(result.consumed);
        assert_eq!(result.emission, None);
        assert!(commits.is_empty());
        assert_eq!(modes.is_full_punct_mode(), !before);
    }
}

#[test]
fn test_ctrl_period_changes_next_period() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    press(&mut editor, &modes, Keysym::PERIOD, ModifierMask::CONTROL);
    assert_eq!(type_text(&mut editor, &modes, "a."), "a.");
    press(&mut editor, &modes, Keysym::PERIOD, ModifierMask::CONTROL);
    assert_eq!(type_text(&mut editor, &modes, "a."), "a。");
}

#[test]
fn test_ctrl_with_other_command_modifiers_is_rejected() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    let (result, _) = press(
        &mut editor,
        &modes,
        Keysym::PERIOD,
        ModifierMask::CONTROL | ModifierMask::ALT,
    );
    assert!(!result.consumed);
    assert!(modes.is_full_punct_mode());

    let (result, _) = press(&mut editor, &modes, Keysym::from(','), ModifierMask::CONTROL);
    assert!(!result.consumed);
}

// =========================================================================
// Keypad
// =========================================================================

#[test]
fn test_keypad_keys() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    let keys = [
        Keysym::KP_0,
        Keysym::KP_9,
        Keysym::KP_SPACE,
        Keysym::KP_ADD,
        Keysym::KP_SUBTRACT,
        Keysym::KP_MULTIPLY,
        Keysym::KP_DIVIDE,
        Keysym::KP_EQUAL,
    ];
    let mut out = String::new();
    for keysym in keys {
        let result = editor.process_key_event(KeyEvent::plain(keysym), &modes, &mut out);
        assert!(result.consumed, "{keysym} should be consumed");
    }
    assert_eq!(out, "09 +-*/=");
}

#[test]
fn test_keypad_separator_is_not_routed() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    let (result, commits) = press(&mut editor, &modes, Keysym::KP_SEPARATOR, ModifierMask::empty());
    assert!(!result.consumed);
    assert!(commits.is_empty());
    assert!(KeyRule::all().all(|rule| rule.route(Keysym::KP_SEPARATOR).is_none()));
}

// =========================================================================
// Sessions
// =========================================================================

#[test]
fn test_sessions_keep_their_own_state() {
    let modes = chinese_modes();
    let mut first = FallbackEditor::new();
    let mut second = FallbackEditor::new();

    assert_eq!(type_text(&mut first, &modes, "1'"), "1‘");
    assert_eq!(type_text(&mut second, &modes, ".'"), "。‘");
    assert_eq!(type_text(&mut first, &modes, "'"), "’");
}

#[test]
fn test_reset_restores_opening_quotes() {
    let mut editor = FallbackEditor::new();
    let modes = chinese_modes();
    type_text(&mut editor, &modes, "'\"");
    editor.reset();
    assert_eq!(type_text(&mut editor, &modes, "'\""), "‘“");
}
