//! The in-memory word store.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info_span, trace};

use crate::error::{Result, WordsError};
use crate::paths::resolve_words_path;
use crate::picker::{IndexPicker, ThreadRngPicker};
use crate::source::{Category, parse_categories, read_categories};

/// Path recorded for stores built from in-memory JSON.
const MEMORY_SOURCE: &str = "<memory>";

/// Load-once, read-only collection of word categories.
///
/// Construction either fully succeeds or returns an error; a `WordStore`
/// value is always loaded and validated. All lookups take `&self`, so one
/// store can be shared across threads.
pub struct WordStore {
    source_path: PathBuf,
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    picker: Box<dyn IndexPicker>,
}

impl fmt::Debug for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStore")
            .field("source_path", &self.source_path)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

/// Configures how a [`WordStore`] is loaded.
///
/// # Example
///
/// ```rust,ignore
/// use happylibs_words::{SeededPicker, WordStore};
///
/// let store = WordStore::builder()
///     .path("fixtures/words.json")
///     .picker(SeededPicker::new(7))
///     .load()?;
/// ```
#[derive(Default)]
pub struct WordStoreBuilder {
    path: Option<PathBuf>,
    picker: Option<Box<dyn IndexPicker>>,
}

impl WordStoreBuilder {
    /// Load from `path` instead of the default word source.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use `picker` for random selection instead of the thread generator.
    #[must_use]
    pub fn picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }

    /// Read and validate the configured word source.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Io`, `Parse` or `Schema` when the source cannot
    /// be turned into categories.
    pub fn load(self) -> Result<WordStore> {
        let path = resolve_words_path(self.path.as_deref());
        let _span = info_span!("load_words", path = %path.display()).entered();
        let categories = read_categories(&path)?;
        Ok(WordStore::from_parts(path, categories, self.picker))
    }

    /// Validate an in-memory JSON document instead of reading a file.
    pub fn parse(self, json: &str) -> Result<WordStore> {
        let path = PathBuf::from(MEMORY_SOURCE);
        let categories = parse_categories(&path, json)?;
        Ok(WordStore::from_parts(path, categories, self.picker))
    }
}

impl WordStore {
    pub fn builder() -> WordStoreBuilder {
        WordStoreBuilder::default()
    }

    /// Load the default word source (see [`crate::default_words_path`]).
    pub fn load_default() -> Result<Self> {
        Self::builder().load()
    }

    /// Load the word source at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path.as_ref()).load()
    }

    /// Load from `path` when given, otherwise from the default location.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Build a store from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::builder().parse(json)
    }

    fn from_parts(
        source_path: PathBuf,
        categories: Vec<Category>,
        picker: Option<Box<dyn IndexPicker>>,
    ) -> Self {
        let index = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| (category.name.clone(), idx))
            .collect();
        let word_count: usize = categories.iter().map(|c| c.words.len()).sum();
        debug!(
            path = %source_path.display(),
            categories = categories.len(),
            words = word_count,
            "loaded word source"
        );
        Self {
            source_path,
            categories,
            index,
            picker: picker.unwrap_or_else(|| Box::new(ThreadRngPicker)),
        }
    }

    /// Path the store was loaded from (`<memory>` for in-memory sources).
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// All category names, in source order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Iterate over `(category, words)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.words.as_slice()))
    }

    /// All words in `category`, in source order.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` (carrying the valid names) for unknown
    /// categories. Empty categories yield an empty slice.
    pub fn words_in_category(&self, category: &str) -> Result<&[String]> {
        self.category(category).map(|c| c.words.as_slice())
    }

    /// A word chosen uniformly at random from `category`.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` for unknown categories and `EmptyCategory`
    /// when the category has no words.
    pub fn random_word(&self, category: &str) -> Result<&str> {
        let words = self.non_empty_words(category)?;
        // Wrap so a misbehaving picker cannot index out of bounds.
        let idx = self.picker.pick(words.len()) % words.len();
        trace!(category, idx, "picked word");
        Ok(words[idx].as_str())
    }

    /// Like [`random_word`](Self::random_word), drawing from `rng` instead
    /// of the store's picker.
    pub fn random_word_with<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> Result<&str> {
        let words = self.non_empty_words(category)?;
        Ok(words[rng.gen_range(0..words.len())].as_str())
    }

    fn non_empty_words(&self, category: &str) -> Result<&[String]> {
        let words = self.words_in_category(category)?;
        if words.is_empty() {
            return Err(WordsError::EmptyCategory {
                category: category.to_string(),
            });
        }
        Ok(words)
    }

    fn category(&self, name: &str) -> Result<&Category> {
        self.index
            .get(name)
            .map(|&idx| &self.categories[idx])
            .ok_or_else(|| WordsError::CategoryNotFound {
                category: name.to_string(),
                available: self.categories.iter().map(|c| c.name.clone()).collect(),
            })
    }
}
