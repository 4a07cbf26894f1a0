//! Verb records and their grouped conjugation tables.

use fixed_map::Map;
use serde::{Deserialize, Serialize};

use crate::entities::{Bucket, Language, Mood, Person, Tense};

/// A verb row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    /// Surrogate identifier of the verb in the dataset.
    pub id: i64,
    /// Headword, the infinitive.
    pub verb: String,
    pub language: Language,
    pub gerund: String,
    pub participle: String,
    /// Key shared by verbs in other languages with the same meaning.
    pub translation: String,
    /// Classification of the verb's overall conjugation pattern.
    pub regularity: String,
}

/// A single conjugated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub text: String,
    /// Whether the form deviates from the regular pattern.
    pub irregular: bool,
}

/// The forms of one tense and mood, keyed by person.
///
/// Persons the dataset has no row for are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    conjugations: Map<Person, Conjugation>,
}

impl Table {
    /// Get the conjugation for a person.
    pub fn get(&self, person: Person) -> Option<&Conjugation> {
        self.conjugations.get(person)
    }

    /// Iterate over conjugations in person order.
    pub fn iter(&self) -> impl Iterator<Item = (Person, &Conjugation)> + '_ {
        self.conjugations.iter()
    }

    pub fn len(&self) -> usize {
        self.conjugations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conjugations.is_empty()
    }

    pub(crate) fn insert(
        &mut self,
        person: Person,
        conjugation: Conjugation,
    ) -> Option<Conjugation> {
        self.conjugations.insert(person, conjugation)
    }
}

/// A conjugation row as it is stored, before it has been sorted into a
/// bucket.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) tense: String,
    pub(crate) mood: String,
    pub(crate) person: String,
    pub(crate) text: String,
    pub(crate) irregular: bool,
}

/// A verb together with its full conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbDetails {
    #[serde(flatten)]
    pub verb: Verb,
    buckets: Map<Bucket, Table>,
}

impl VerbDetails {
    /// Group stored rows into buckets.
    ///
    /// Rows whose tense and mood is not one of the nine buckets, or whose
    /// person is not a known label in the verb's language, are skipped. If
    /// two rows occupy the same slot the later one wins.
    pub(crate) fn from_rows<I>(verb: Verb, rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        let mut buckets = Map::<Bucket, Table>::new();

        for row in rows {
            tracing::trace!(?row);

            let (Some(tense), Some(mood)) = (Tense::parse(&row.tense), Mood::parse(&row.mood))
            else {
                tracing::debug!(
                    verb = %verb.verb,
                    tense = %row.tense,
                    mood = %row.mood,
                    "Unknown tense or mood"
                );
                continue;
            };

            let Some(bucket) = Bucket::from_parts(tense, mood) else {
                tracing::debug!(verb = %verb.verb, ?tense, ?mood, "Not a conjugation bucket");
                continue;
            };

            let Some(person) = Person::parse(verb.language, &row.person) else {
                tracing::warn!(
                    verb = %verb.verb,
                    language = ?verb.language,
                    person = %row.person,
                    "Unknown person"
                );
                continue;
            };

            let conjugation = Conjugation {
                text: row.text,
                irregular: row.irregular,
            };

            if buckets.get(bucket).is_none() {
                buckets.insert(bucket, Table::default());
            }

            let Some(table) = buckets.get_mut(bucket) else {
                continue;
            };

            if let Some(replaced) = table.insert(person, conjugation) {
                tracing::warn!(
                    verb = %verb.verb,
                    ?bucket,
                    ?person,
                    replaced = %replaced.text,
                    "Duplicate conjugation"
                );
            }
        }

        Self { verb, buckets }
    }

    /// Get the table for a bucket, if the dataset has any forms for it.
    pub fn get(&self, bucket: Bucket) -> Option<&Table> {
        self.buckets.get(bucket)
    }

    /// Get a single conjugated form.
    pub fn conjugation(&self, bucket: Bucket, person: Person) -> Option<&Conjugation> {
        self.buckets.get(bucket)?.get(person)
    }

    /// Iterate over non-empty buckets in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &Table)> + '_ {
        self.buckets.iter()
    }

    /// Test if any form in the table is irregular.
    pub fn has_irregular(&self) -> bool {
        self.buckets
            .iter()
            .any(|(_, table)| table.iter().any(|(_, c)| c.irregular))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(language: Language) -> Verb {
        Verb {
            id: 1,
            verb: "ser".into(),
            language,
            gerund: "siendo".into(),
            participle: "sido".into(),
            translation: "to be".into(),
            regularity: "irregular".into(),
        }
    }

    fn row(tense: &str, mood: &str, person: &str, text: &str, irregular: bool) -> Row {
        Row {
            tense: tense.into(),
            mood: mood.into(),
            person: person.into(),
            text: text.into(),
            irregular,
        }
    }

    #[test]
    fn groups_rows_into_buckets() {
        let details = VerbDetails::from_rows(
            verb(Language::Spanish),
            [
                row("Present", "Indicative", "yo", "soy", true),
                row("Present", "Subjunctive", "yo", "sea", true),
                row("Imperative", "Affirmative", "tú", "sé", true),
                row("Future", "Indicative", "nosotros", "seremos", false),
            ],
        );

        let present = details.get(Bucket::IndicativePresent).unwrap();
        assert_eq!(present.len(), 1);
        assert_eq!(
            present.get(Person::FirstSingular),
            Some(&Conjugation {
                text: "soy".into(),
                irregular: true
            })
        );

        assert_eq!(
            details
                .conjugation(Bucket::SubjunctivePresent, Person::FirstSingular)
                .map(|c| c.text.as_str()),
            Some("sea")
        );
        assert_eq!(
            details
                .conjugation(Bucket::Imperative, Person::SecondSingular)
                .map(|c| c.text.as_str()),
            Some("sé")
        );
        assert!(!details
            .conjugation(Bucket::IndicativeFuture, Person::FirstPlural)
            .unwrap()
            .irregular);

        assert!(details.get(Bucket::IndicativePreterite).is_none());
        assert!(details
            .conjugation(Bucket::IndicativePresent, Person::SecondSingular)
            .is_none());
        assert!(details.has_irregular());
    }

    #[test]
    fn skips_unknown_rows() {
        let details = VerbDetails::from_rows(
            verb(Language::Catalan),
            [
                row("Pluperfect", "Indicative", "jo", "havia estat", false),
                row("Conditional", "Subjunctive", "jo", "x", false),
                row("Present", "Indicative", "yo", "soc", true),
                row("Present", "Indicative", "Jo", "sóc", true),
            ],
        );

        let buckets = details.iter().map(|(b, _)| b).collect::<Vec<_>>();
        assert_eq!(buckets, [Bucket::IndicativePresent]);

        let present = details.get(Bucket::IndicativePresent).unwrap();
        assert_eq!(present.len(), 1);
        assert_eq!(
            present.get(Person::FirstSingular).map(|c| c.text.as_str()),
            Some("sóc")
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let details = VerbDetails::from_rows(
            verb(Language::Spanish),
            [
                row("Present", "Indicative", "yo", "old", false),
                row("Present", "Indicative", "yo", "soy", true),
            ],
        );

        let c = details
            .conjugation(Bucket::IndicativePresent, Person::FirstSingular)
            .unwrap();
        assert_eq!(c.text, "soy");
        assert!(c.irregular);
    }

    #[test]
    fn persons_iterate_in_display_order() {
        let details = VerbDetails::from_rows(
            verb(Language::Spanish),
            [
                row("Present", "Indicative", "ellos/ellas", "son", true),
                row("Present", "Indicative", "yo", "soy", true),
                row("Present", "Indicative", "nosotros", "somos", true),
            ],
        );

        let persons = details
            .get(Bucket::IndicativePresent)
            .unwrap()
            .iter()
            .map(|(p, _)| p)
            .collect::<Vec<_>>();

        assert_eq!(
            persons,
            [Person::FirstSingular, Person::FirstPlural, Person::ThirdPlural]
        );
    }
}
