use crate::Error;
use crate::Result;
use std::collections::HashMap;
use std::path::Path;

/// The ordered, fixed set of words the game may be played with.
///
/// Index assignment follows insertion order, so the same word list always
/// yields the same indices. Row `i` of a [`Table`](crate::Table) belongs to
/// `words[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary, rejecting duplicates instead of silently
    /// collapsing them (which would shift every later index).
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for word in words.into_iter().map(Into::into) {
            if vocabulary.index.contains_key(&word) {
                return Err(Error::DuplicateWord(word));
            }
            vocabulary.index.insert(word.clone(), vocabulary.words.len());
            vocabulary.words.push(word);
        }
        Ok(vocabulary)
    }

    /// Reads a word list with one word per line. Blank lines are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("{:<32}{:<32}", "loading vocabulary", path.display());
        let text = std::fs::read_to_string(path)?;
        let vocabulary = Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )?;
        log::debug!("vocabulary holds {} words", vocabulary.len());
        Ok(vocabulary)
    }

    pub fn index_of(&self, word: &str) -> Result<usize> {
        self.get(word)
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The word at `index`. Panics when out of range, like slice indexing.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
