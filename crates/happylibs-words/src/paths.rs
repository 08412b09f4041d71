//! Word source path resolution.

use std::path::{Path, PathBuf};

/// File name of the bundled word source.
pub const DEFAULT_WORDS_FILE: &str = "words.json";

/// Get the default word source path: `words.json` in the workspace root,
/// one level above `crates/`.
///
/// # Example
///
/// ```rust,ignore
/// let path = happylibs_words::default_words_path();
/// let store = happylibs_words::WordStore::load(&path)?;
/// ```
pub fn default_words_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(DEFAULT_WORDS_FILE)
}

/// Use `explicit` when given, otherwise fall back to [`default_words_path`].
pub fn resolve_words_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_words_path, Path::to_path_buf)
}
