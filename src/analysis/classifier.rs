//! Memoized character classification.
//!
//! The [`Classifier`] answers three independent questions about a code point:
//! is it part of a word ([`Classifier::is_text`]), is it punctuation
//! ([`Classifier::is_punctuation`]), and is it blank ([`Classifier::is_space`]).
//! The first two consult the Unicode general category, the last one the
//! curated [`charset::SPACES`] table.
//!
//! Every answer is stored in a per-predicate [`ClassificationCache`] the first
//! time it is computed. Entries are never invalidated: classification is a pure
//! function of the code point, so a value written by one thread is the same
//! value any other thread would have written.
//!
//! # Examples
//!
//! ```
//! use tokenseg::analysis::classifier::{CharClass, Classifier};
//!
//! let classifier = Classifier::new();
//! assert!(classifier.is_text('a'));
//! assert!(classifier.is_punctuation('.'));
//! assert!(classifier.is_space('\t'));
//! assert_eq!(classifier.classify('\u{0007}'), CharClass::Unprintable);
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::analysis::charset;

lazy_static! {
    static ref SHARED_CLASSIFIER: Arc<Classifier> = Arc::new(Classifier::new());
}

/// Exclusive classification of a single code point.
///
/// The boolean predicates overlap (every unprintable code point is also
/// punctuation). This enum resolves them in the order Text, Space,
/// Unprintable, Punctuation, Other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Letters, numbers and private-use characters
    Text,
    /// Punctuation and symbols
    Punctuation,
    /// Members of the curated blank set
    Space,
    /// Control characters and invalid code points
    Unprintable,
    /// Everything else (marks, format characters, unassigned)
    Other,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Text => "text",
            CharClass::Punctuation => "punctuation",
            CharClass::Space => "space",
            CharClass::Unprintable => "unprintable",
            CharClass::Other => "other",
        };
        f.pad(name)
    }
}

/// A read-through cache from code point to a boolean classification.
///
/// The lock is held for a single map operation only, never while the value is
/// being computed. Two threads missing on the same key both compute it and
/// both insert the same value.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: RwLock<AHashMap<char, bool>>,
}

impl ClassificationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `c`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, c: char, compute: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if let Some(&value) = self.entries.read().get(&c) {
            return value;
        }

        let value = compute(c);
        log::trace!("classification cache miss for U+{:04X} -> {value}", c as u32);
        self.entries.write().insert(c, value);
        value
    }

    /// Look up `c` without computing anything.
    pub fn get(&self, c: char) -> Option<bool> {
        self.entries.read().get(&c).copied()
    }

    /// Pre-seed an entry.
    pub fn insert(&self, c: char, value: bool) {
        self.entries.write().insert(c, value);
    }

    /// Number of cached code points.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry. Only meant for tests that need a cold cache.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Memoizing character classifier.
///
/// Use [`Classifier::shared`] for the process-wide instance, or construct a
/// private one and inject it into tokenizers for isolated caches.
#[derive(Debug, Default)]
pub struct Classifier {
    text: ClassificationCache,
    punctuation: ClassificationCache,
    space: ClassificationCache,
}

impl Classifier {
    /// Create a classifier with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide classifier used by tokenizers built without an explicit
    /// classifier.
    pub fn shared() -> Arc<Classifier> {
        Arc::clone(&SHARED_CLASSIFIER)
    }

    /// Check if `c` belongs to a word: any letter, any number, or private use.
    pub fn is_text(&self, c: char) -> bool {
        self.text.get_or_compute(c, compute_is_text)
    }

    /// Check if `c` is punctuation, a symbol, or unprintable.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.get_or_compute(c, compute_is_punctuation)
    }

    /// Check if `c` is in the curated blank set.
    pub fn is_space(&self, c: char) -> bool {
        self.space.get_or_compute(c, charset::is_space)
    }

    /// Resolve the predicates into a single exclusive class.
    pub fn classify(&self, c: char) -> CharClass {
        if self.is_text(c) {
            CharClass::Text
        } else if self.is_space(c) {
            CharClass::Space
        } else if charset::is_unprintable(c) {
            CharClass::Unprintable
        } else if self.is_punctuation(c) {
            CharClass::Punctuation
        } else {
            CharClass::Other
        }
    }

    /// Cache backing [`Classifier::is_text`].
    pub fn text_cache(&self) -> &ClassificationCache {
        &self.text
    }

    /// Cache backing [`Classifier::is_punctuation`].
    pub fn punctuation_cache(&self) -> &ClassificationCache {
        &self.punctuation
    }

    /// Cache backing [`Classifier::is_space`].
    pub fn space_cache(&self) -> &ClassificationCache {
        &self.space
    }

    /// Total number of cached answers across all three predicates.
    pub fn cache_len(&self) -> usize {
        self.text.len() + self.punctuation.len() + self.space.len()
    }

    /// Empty all caches.
    pub fn reset(&self) {
        self.text.clear();
        self.punctuation.clear();
        self.space.clear();
    }
}

fn compute_is_text(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
            | GeneralCategory::PrivateUse
    )
}

fn compute_is_punctuation(c: char) -> bool {
    if charset::is_unprintable(c) {
        return true;
    }

    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}
