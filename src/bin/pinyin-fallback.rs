// Pinyin Fallback CLI
// Load a profile from a TOML store and replay keys through the fallback editor

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pinyin_fallback_core::{
    BopomofoConfig, CommitSink, ConfigProfile, FallbackEditor, InputModes, KeyEvent, Keysym,
    ModeProvider, ModifierMask, PinyinConfig, TomlStore,
};

/// Pinyin fallback editor playground
#[derive(Parser, Debug)]
#[command(name = "pinyin-fallback")]
#[command(version)]
#[command(about = "Replay keys through the pinyin fallback editor", long_about = None)]
struct Args {
    /// TOML key-value store (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Profile to load from the store
    #[arg(short, long, value_enum, default_value_t = ProfileKind::Pinyin)]
    profile: ProfileKind,

    /// Characters to type, one unmodified key each; `^.` is Ctrl+period
    #[arg(short, long, value_name = "TEXT")]
    keys: Option<String>,

    /// Print the loaded profile
    #[arg(long)]
    dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileKind {
    Pinyin,
    Bopomofo,
}

/// Loaded profile of either kind
enum Profile {
    Pinyin(PinyinConfig),
    Bopomofo(BopomofoConfig),
}

impl Profile {
    fn load(kind: ProfileKind, store: &TomlStore) -> Self {
        match kind {
            ProfileKind::Pinyin => Profile::Pinyin(PinyinConfig::from_store(store)),
            ProfileKind::Bopomofo => Profile::Bopomofo(BopomofoConfig::from_store(store)),
        }
    }

    fn as_profile(&self) -> &dyn ConfigProfile {
        match self {
            Profile::Pinyin(config) => config,
            Profile::Bopomofo(config) => config,
        }
    }

    fn to_toml(&self) -> Result<String, toml::ser::Error> {
        match self {
            Profile::Pinyin(config) => toml::to_string_pretty(config),
            Profile::Bopomofo(config) => toml::to_string_pretty(config),
        }
    }
}

/// Split `--keys` text into key events
fn parse_keys(text: &str) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '^' && chars.peek() == Some(&'.') {
            chars.next();
            events.push(KeyEvent::new(Keysym::PERIOD, 0, ModifierMask::CONTROL));
        } else {
            events.push(KeyEvent::plain(ch));
        }
    }
    events
}

fn load_store(path: Option<&PathBuf>) -> Result<TomlStore, Box<dyn std::error::Error>> {
    let store = match path {
        Some(path) => TomlStore::from_file(path)?,
        None => TomlStore::load_default()?,
    };
    match store.source_path() {
        Some(path) => log::info!("loaded store from {}", path.display()),
        None => log::info!("no store file, using defaults"),
    }
    Ok(store)
}

/// Print each commit on its own line, and keys handed back to the host
struct Printer;

impl CommitSink for Printer {
    fn commit(&mut self, commit: pinyin_fallback_core::Commit) {
        println!("{}", commit);
    }
}

fn replay(profile: &dyn ConfigProfile, keys: &str) {
    let modes = InputModes::from_profile(profile.base());
    let mut editor = FallbackEditor::new();
    let mut printer = Printer;

    for event in parse_keys(keys) {
        let result = editor.process_key_event(event, &modes, &mut printer);
        if !result.consumed {
            println!("(not consumed: {}{})", event.modifiers, event.keysym);
        }
    }

    let snapshot = modes.snapshot();
    log::debug!(
        "final modes: chinese={} full_width={} full_punct={}",
        snapshot.chinese,
        snapshot.full_width,
        snapshot.full_punct
    );
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(args.config.as_ref())?;
    let profile = Profile::load(args.profile, &store);

    if args.dump {
        print!("{}", profile.to_toml()?);
        println!("effective_options = {}", profile.as_profile().options().effective());
    }

    if let Some(keys) = &args.keys {
        replay(profile.as_profile(), keys);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(args)
}
