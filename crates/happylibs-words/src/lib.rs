//! Categorized word lists for fill-in-the-blank word games.
//!
//! This crate provides:
//!
//! - **Word source loading** from a JSON object of `category -> [words]`
//! - **Schema validation** at load time, so lookups work on typed data
//! - **Random selection** through an injectable [`IndexPicker`]
//!
//! # Module Organization
//!
//! - [`store`]: [`WordStore`], the load-once lookup component
//! - [`source`]: JSON parsing and validation into [`Category`] values
//! - [`picker`]: random index sources
//! - [`paths`]: default word source resolution
//! - [`error`]: error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use happylibs_words::WordStore;
//!
//! let store = WordStore::load_default()?;
//! for category in store.categories() {
//!     println!("{category}: {}", store.random_word(category)?);
//! }
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod picker;
pub mod source;
pub mod store;

pub use error::{ErrorKind, Result, WordsError};
pub use paths::{DEFAULT_WORDS_FILE, default_words_path, resolve_words_path};
pub use picker::{IndexPicker, SeededPicker, ThreadRngPicker};
pub use source::Category;
pub use store::{WordStore, WordStoreBuilder};
