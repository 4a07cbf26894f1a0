//! Spanish and Catalan verb conjugation lookup over a bundled dataset.

pub mod entities;
pub use self::entities::{Bucket, Language, Mood, Person, Tense};

pub mod verb;
pub use self::verb::{Conjugation, Table, Verb, VerbDetails};

pub mod database;

mod lookup;
pub use self::lookup::Lookup;

mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;

/// Fold a headword for comparison, so that `Ésser` and `ésser` are the same
/// word.
pub fn fold(string: &str) -> String {
    string.to_lowercase()
}
