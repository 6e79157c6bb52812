//! Wire models returned by the dictionary and synonym services.

use serde::{Deserialize, Serialize};

/// One dictionary entry for a word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word as spelled by the service
    pub word: Option<String>,
    /// Preferred phonetic spelling
    pub phonetic: Option<String>,
    /// All known pronunciations
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    /// Meanings grouped by part of speech
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl WordEntry {
    /// First pronunciation that has an audio file.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|audio| !audio.is_empty())
    }
}

/// A pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Phonetic {
    /// Phonetic spelling
    pub text: Option<String>,
    /// Link to a recording
    pub audio: Option<String>,
}

/// Definitions for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meaning {
    /// Noun, verb, ...
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// A single definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Definition {
    pub definition: Option<String>,
    pub example: Option<String>,
}

/// A synonym with the service's relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Synonym {
    pub word: Option<String>,
    pub score: Option<i64>,
}
