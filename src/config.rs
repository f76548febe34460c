use crate::distance::Metric;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// How Mr White reconstructs the secret word after elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guessing {
    /// Nearest unspoken word to the mean of everyone else's words.
    #[default]
    Centroid,
    /// Nearest unspoken word to the last word another player said.
    Recent,
}

impl FromStr for Guessing {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "centroid" => Ok(Self::Centroid),
            "recent" => Ok(Self::Recent),
            other => Err(format!("unknown guessing mode {:?}", other)),
        }
    }
}

impl Display for Guessing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Centroid => write!(f, "centroid"),
            Self::Recent => write!(f, "recent"),
        }
    }
}

/// Tunable knobs of the embedding strategies.
///
/// Each decision picks its own metric: speaking and guessing look for the
/// nearest word in Euclidean space, voting ranks fresh words by negative dot
/// product against the secret word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub speak: Metric,
    pub vote: Metric,
    pub guess: Metric,
    pub guessing: Guessing,
    /// Seed for the impostor's random vote. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speak: Metric::Euclidean,
            vote: Metric::Dot,
            guess: Metric::Euclidean,
            guessing: Guessing::Centroid,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_speak(self, speak: Metric) -> Self {
        Self { speak, ..self }
    }
    pub fn with_vote(self, vote: Metric) -> Self {
        Self { vote, ..self }
    }
    pub fn with_guess(self, guess: Metric) -> Self {
        Self { guess, ..self }
    }
    pub fn with_guessing(self, guessing: Guessing) -> Self {
        Self { guessing, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}
