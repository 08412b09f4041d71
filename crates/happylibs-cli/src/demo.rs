//! Demo output: categories plus one random word from each.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use happylibs_words::{ErrorKind, WordStore, WordsError};

const RULE_WIDTH: usize = 40;

/// Print the demo report for `store` to `out`.
///
/// Empty categories print `(empty)` instead of stopping the report.
///
/// # Errors
///
/// Returns an error if writing fails or a lookup fails for any reason other
/// than an empty category.
pub fn write_demo<W: Write>(store: &WordStore, out: &mut W) -> anyhow::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "HappyLibsWordGen - Word Generator Demo")?;
    writeln!(out, "{rule}")?;

    let categories = store.categories();
    writeln!(out)?;
    writeln!(out, "Available categories: {}", categories.join(", "))?;

    writeln!(out)?;
    writeln!(out, "Random words from each category:")?;
    for category in &categories {
        match store.random_word(category) {
            Ok(word) => writeln!(out, "  {category}: {word}")?,
            Err(WordsError::EmptyCategory { .. }) => writeln!(out, "  {category}: (empty)")?,
            Err(error) => return Err(error.into()),
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Try using WordStore in your own code!")?;
    Ok(())
}

/// Write the demo report to stdout.
pub fn print_demo(store: &WordStore) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo(store, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load `path`, or the default word source when `None`.
pub fn load_store(path: Option<&Path>) -> anyhow::Result<WordStore> {
    WordStore::open(path).context("failed to load word source")
}

/// Short hint for load errors that users can fix themselves.
pub fn load_hint(error: &WordsError) -> Option<&'static str> {
    match error.kind() {
        ErrorKind::NotFound => Some("pass --words-file to load another word source"),
        ErrorKind::Parse | ErrorKind::Schema => {
            Some("the word source must be a JSON object of string lists")
        }
        _ => None,
    }
}
