// Pinyin Fallback Commit Sink
// Where committed text goes once a key event has been classified

use std::fmt;

/// A single unit of committed output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Commit {
    Char(char),
    Text(&'static str),
}

impl Commit {
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commit::Char(ch) => write!(f, "{}", ch),
            Commit::Text(text) => f.write_str(text),
        }
    }
}

impl From<char> for Commit {
    fn from(ch: char) -> Self {
        Commit::Char(ch)
    }
}

impl From<&'static str> for Commit {
    fn from(text: &'static str) -> Self {
        Commit::Text(text)
    }
}

/// Receives committed text from the editor. Committing always succeeds.
pub trait CommitSink {
    fn commit(&mut self, commit: Commit);
}

impl CommitSink for Vec<Commit> {
    fn commit(&mut self, commit: Commit) {
        self.push(commit);
    }
}

impl CommitSink for String {
    fn commit(&mut self, commit: Commit) {
        match commit {
            Commit::Char(ch) => self.push(ch),
            Commit::Text(text) => self.push_str(text),
        }
    }
}

impl<S: CommitSink + ?Sized> CommitSink for &mut S {
    fn commit(&mut self, commit: Commit) {
        (**self).commit(commit);
    }
}
