//! Static prompt bank.
//!
//! The bank is configuration data: it is loaded once when a sequencer is
//! built and never changes afterwards. The built-in bank holds 20
//! programming prompts; a bank can also be read from a text file with one
//! prompt per line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::prompt::PromptTally;
use crate::core::{GameError, Result};

/// Prompts shipped with the crate.
pub const DEFAULT_PROMPTS: [&str; 20] = [
    "What's your favorite programming language?",
    "What's the most frustrating bug you've ever encountered?",
    "What's your preferred code editor or IDE?",
    "What's your favorite data structure?",
    "What's the best way to debug code?",
    "What's your favorite design pattern?",
    "What's the most important skill for a programmer?",
    "What's the best programming book you've read?",
    "What's your favorite algorithm?",
    "What's the best way to learn programming?",
    "What's the most overrated technology?",
    "What's the most underrated programming language?",
    "What's your favorite way to handle errors?",
    "What's the best coding convention?",
    "What's your preferred testing framework?",
    "What's the most useful programming paradigm?",
    "What's your favorite keyboard shortcut?",
    "What's the best way to document code?",
    "What's your favorite terminal command?",
    "What's the most important principle of clean code?",
];

/// Ordered, immutable list of prompt texts.
///
/// ```
/// use herd_tally::tally::PromptBank;
///
/// let bank = PromptBank::from_text("First prompt?\n\n  Second prompt?  \n").unwrap();
/// assert_eq!(bank.len(), 2);
/// assert_eq!(bank.get(1), Some("Second prompt?"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptBank {
    prompts: Vec<String>,
}

impl PromptBank {
    /// The built-in bank of 20 programming prompts.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            prompts: DEFAULT_PROMPTS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    /// Build a bank from prompt texts.
    ///
    /// Texts are trimmed and blank ones skipped. Fails with
    /// `EmptyPromptBank` if nothing is left.
    pub fn new<I, S>(prompts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prompts: Vec<String> = prompts
            .into_iter()
            .map(|p| p.as_ref().trim().to_owned())
            .filter(|p| !p.is_empty())
            .collect();

        if prompts.is_empty() {
            return Err(GameError::EmptyPromptBank);
        }
        Ok(Self { prompts })
    }

    /// Parse a bank from text, one prompt per line.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(text.lines())
    }

    /// Read a bank from a file, one prompt per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let bank = Self::from_text(&text)?;
        tracing::debug!(path = %path.display(), prompts = bank.len(), "loaded prompt bank");
        Ok(bank)
    }

    /// Number of prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Check if the bank has no prompts.
    ///
    /// Only a deserialized bank can be empty; constructors reject it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Get a prompt by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    /// Iterate over prompt texts in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(String::as_str)
    }

    /// One fresh tally per prompt, in order.
    #[must_use]
    pub fn tallies(&self) -> Vec<PromptTally> {
        self.prompts.iter().map(PromptTally::new).collect()
    }
}

impl Default for PromptBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_bank() {
        let bank = PromptBank::builtin();
        assert_eq!(bank.len(), 20);
        assert_eq!(bank.get(0), Some("What's your favorite programming language?"));
        assert_eq!(bank.get(19), Some("What's the most important principle of clean code?"));
        assert_eq!(bank.get(20), None);
    }

    #[test]
    fn test_new_skips_blank_prompts() {
        let bank = PromptBank::new(["  a  ", "", "   ", "b"]).unwrap();
        assert_eq!(bank.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(PromptBank::new(Vec::<String>::new()), Err(GameError::EmptyPromptBank)));
        assert!(matches!(PromptBank::from_text("\n  \n"), Err(GameError::EmptyPromptBank)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "What's your favorite shell?").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Tabs or spaces?").unwrap();

        let bank = PromptBank::from_file(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1), Some("Tabs or spaces?"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = PromptBank::from_file("/definitely/not/here/prompts.txt");
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn test_tallies_are_fresh() {
        let tallies = PromptBank::new(["a", "b"]).unwrap().tallies();
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[1].text(), "b");
        assert!(tallies.iter().all(PromptTally::is_empty));
    }
}
