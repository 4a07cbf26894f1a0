//! The lookup service consumers query verbs through.
//!
//! Every operation is a single read against the dataset. Storage failures
//! never reach the caller: they are logged and reported as an empty or
//! absent result, so consumers only ever see "has data" or "no data".


use std::path::Path;

use crate::database::{self, Database};
use crate::entities::Language;
use crate::verb::{Verb, VerbDetails};

/// Log a storage failure and fall back to an empty result.
fn absorb<T>(operation: &'static str, result: Result<T, database::Error>) -> T
where
    T: Default,
{
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(operation, error = %Chain(&error), "Lookup failed");
            T::default()
        }
    }
}

/// Display an error together with its sources.
struct Chain<'a>(&'a (dyn std::error::Error + 'static));

impl std::fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;

        let mut source = self.0.source();

        while let Some(error) = source {
            write!(f, ": {error}")?;
            source = error.source();
        }

        Ok(())
    }
}

/// Verb lookup service.
pub struct Lookup {
    db: Database,
}

impl Lookup {
    /// Construct a lookup over an open dataset.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the dataset at the given path.
    ///
    /// This is the only operation which reports an error, since there is
    /// nothing to look anything up in if the dataset can't be opened.
    pub fn open<P>(path: P) -> Result<Self, database::Error>
    where
        P: AsRef<Path>,
    {
        Ok(Self::new(Database::open(path)?))
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.db
    }

    /// List every headword in the given language in dataset order.
    pub fn list_verbs(&self, language: Language) -> Vec<String> {
        absorb("list verbs", self.db.verbs(Some(language)))
    }

    /// List every headword regardless of language.
    pub fn list_all_verbs(&self) -> Vec<String> {
        absorb("list all verbs", self.db.verbs(None))
    }

    /// List headwords in the given language which contain `needle`, ignoring
    /// case. The needle is matched as given, surrounding whitespace included.
    pub fn search_verbs(&self, language: Language, needle: &str) -> Vec<String> {
        let needle = crate::fold(needle);
        let mut verbs = self.list_verbs(language);

        if !needle.is_empty() {
            verbs.retain(|verb| crate::fold(verb).contains(&needle));
        }

        verbs
    }

    /// Look up the verb row for a headword.
    pub fn verb(&self, headword: &str, language: Language) -> Option<Verb> {
        absorb("look up verb", self.db.verb(headword, language))
    }

    /// Look up a verb together with its full conjugation table.
    ///
    /// Returns `None` if there is no such verb, or if its conjugations can't
    /// be read. A partially populated record is never returned.
    pub fn verb_details(&self, headword: &str, language: Language) -> Option<VerbDetails> {
        let verb = self.verb(headword, language)?;

        let rows = match self.db.conjugations(verb.id) {
            Ok(rows) => rows,
            Err(error) => {
                tracing::error!(
                    operation = "look up conjugations",
                    verb = %verb.verb,
                    error = %Chain(&error),
                    "Lookup failed"
                );
                return None;
            }
        };

        tracing::debug!(
            verb = %verb.verb,
            ?language,
            rows = rows.len(),
            "Loaded conjugations"
        );
        Some(VerbDetails::from_rows(verb, rows))
    }

    /// Find the verb in `to` which is the translation of `headword` in
    /// `from`.
    ///
    /// The headword is first resolved to its translation key, which is then
    /// matched exactly against verbs in the target language.
    pub fn translation_counterpart(
        &self,
        headword: &str,
        from: Language,
        to: Language,
    ) -> Option<String> {
        let Some(source) = self.verb(headword, from) else {
            tracing::debug!(headword, ?from, "No source verb");
            return None;
        };

        let counterpart = absorb(
            "look up translation",
            self.db.verb_with_translation(&source.translation, to),
        );

        if counterpart.is_none() {
            tracing::debug!(translation = %source.translation, ?to, "No matching verb");
        }

        counterpart
    }

    /// Find any verb outside of `excluding` whose translation key is
    /// `translation`.
    ///
    /// Unlike [`Lookup::translation_counterpart`] this takes the translation
    /// key directly instead of resolving it from a headword.
    pub fn verb_by_translation(&self, translation: &str, excluding: Language) -> Option<String> {
        absorb(
            "look up translation",
            self.db.verb_with_translation_excluding(translation, excluding),
        )
    }
}
