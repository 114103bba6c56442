//! Stopword filtering
//!
//! The base list is a curated set of words that dominate interview
//! transcripts without carrying topic signal. It can optionally be unioned
//! with a general-purpose stopword corpus from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Words that are never counted as content in interview transcripts
pub const INTERVIEW_STOPWORDS: &[&str] = &[
    "people",
    "work",
    "life",
    "person",
    "good",
    "always",
    "year",
    "decision",
    "risk",
    "education",
    "course",
    "school",
    "really",
    "kind",
    "job",
    "family",
    "child",
    "someone",
    "much",
    "situation",
    "future",
    "parent",
    "help",
    "first",
    "lot",
    "moment",
    "come",
    "army",
    "thankful",
    "naturally",
    "interviewer",
    "informant",
];

/// An immutable-after-construction set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::curated()
    }
}

impl StopwordSet {
    /// The curated interview list only
    pub fn curated() -> Self {
        Self::from_list(INTERVIEW_STOPWORDS)
    }

    /// The curated list unioned with the standard corpus for `language`
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi
    pub fn with_standard(language: &str) -> Self {
        let mut set = Self::curated();
        set.words.extend(Self::load_standard(language));
        set
    }

    /// An empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a set from a custom list; entries are lowercased
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Remove stopwords from the set
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check an already-lowercased token
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Check an arbitrary word, lowercasing it first
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn load_standard(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
