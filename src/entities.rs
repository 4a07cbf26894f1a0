use fixed_map::Key;
use serde::{Deserialize, Serialize};

macro_rules! entity {
    (
        $(
            $(#[$($meta:meta)*])*
            $vis:vis enum $name:ident, $test:ident {
                $(<$variant:ident $ident:literal $doc:literal>)*
            }
        )*
    ) => {
        $(
            $(#[$($meta)*])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key, Serialize, Deserialize)]
            $vis enum $name {
                $(
                    #[doc = $doc]
                    #[serde(rename = $ident)]
                    $variant,
                )*
            }

            impl $name {
                $vis const VALUES: &'static [$name] = &[
                    $($name::$variant,)*
                ];

                /// The tag used for this value in the dataset.
                $vis fn ident(&self) -> &'static str {
                    match self {
                        $($name::$variant => $ident,)*
                    }
                }

                /// Human readable description of the value.
                $vis fn help(&self) -> &'static str {
                    match self {
                        $($name::$variant => $doc,)*
                    }
                }

                /// Parse a value exactly as it is stored in the dataset.
                $vis fn parse(string: &str) -> Option<$name> {
                    match string {
                        $($ident => Some($name::$variant),)*
                        _ => None,
                    }
                }

                /// Parse a user-provided keyword, ignoring case.
                $vis fn parse_keyword(string: &str) -> Option<$name> {
                    let string = string.trim();

                    $(
                        if string.eq_ignore_ascii_case($ident) {
                            return Some($name::$variant);
                        }
                    )*

                    None
                }
            }

            impl ::core::fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.ident())
                }
            }

            #[test]
            fn $test() {
                $(
                    assert_eq!($name::parse($ident), Some($name::$variant), "Failed to parse `{}`", $ident);
                    assert_eq!($name::parse_keyword(&$ident.to_uppercase()), Some($name::$variant), "Failed to parse keyword `{}`", $ident);
                )*
            }
        )*
    }
}

entity! {
    /// A language the dataset carries verbs for.
    pub enum Language, test_language {
        <Catalan "Catalan" "Catalan">
        <Spanish "Spanish" "Spanish (Castilian)">
    }

    /// A grammatical tense, as tagged on conjugation rows.
    pub enum Tense, test_tense {
        <Present "Present" "present">
        <Preterite "Preterite" "simple past">
        <Imperfect "Imperfect" "imperfect past">
        <Future "Future" "future">
        <Conditional "Conditional" "conditional">
        <Imperative "Imperative" "imperative">
    }

    /// A grammatical mood, as tagged on conjugation rows.
    pub enum Mood, test_mood {
        <Indicative "Indicative" "indicative">
        <Subjunctive "Subjunctive" "subjunctive">
        <Affirmative "Affirmative" "affirmative command">
    }
}

impl Language {
    /// The language verbs are translated into.
    pub fn other(self) -> Language {
        match self {
            Language::Catalan => Language::Spanish,
            Language::Spanish => Language::Catalan,
        }
    }
}

/// One of the six grammatical person slots every table has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    /// All persons in display order.
    pub const VALUES: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The pronoun label used for this person in the given language.
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Spanish, Person::FirstSingular) => "yo",
            (Language::Spanish, Person::SecondSingular) => "tú",
            (Language::Spanish, Person::ThirdSingular) => "él/ella",
            (Language::Spanish, Person::FirstPlural) => "nosotros",
            (Language::Spanish, Person::SecondPlural) => "vosotros",
            (Language::Spanish, Person::ThirdPlural) => "ellos/ellas",
            (Language::Catalan, Person::FirstSingular) => "jo",
            (Language::Catalan, Person::SecondSingular) => "tu",
            (Language::Catalan, Person::ThirdSingular) => "ell/ella",
            (Language::Catalan, Person::FirstPlural) => "nosaltres",
            (Language::Catalan, Person::SecondPlural) => "vosaltres",
            (Language::Catalan, Person::ThirdPlural) => "ells/elles",
        }
    }

    /// Parse a stored person label for the given language.
    ///
    /// Labels are compared case-folded, so `Yo` and `yo` are the same slot.
    pub fn parse(language: Language, string: &str) -> Option<Person> {
        let string = crate::fold(string.trim());

        for person in Person::VALUES {
            if person.label(language) == string {
                return Some(person);
            }
        }

        None
    }
}

/// One of the nine tense and mood combinations a conjugation table is
/// grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    IndicativePresent,
    IndicativePreterite,
    IndicativeImperfect,
    IndicativeFuture,
    IndicativeConditional,
    SubjunctivePresent,
    SubjunctiveImperfect,
    SubjunctiveFuture,
    Imperative,
}

impl Bucket {
    /// All buckets in display order.
    pub const VALUES: [Bucket; 9] = [
        Bucket::IndicativePresent,
        Bucket::IndicativePreterite,
        Bucket::IndicativeImperfect,
        Bucket::IndicativeFuture,
        Bucket::IndicativeConditional,
        Bucket::SubjunctivePresent,
        Bucket::SubjunctiveImperfect,
        Bucket::SubjunctiveFuture,
        Bucket::Imperative,
    ];

    /// The tense and mood tags rows in this bucket carry.
    ///
    /// Imperative rows are stored with tense `Imperative` and mood
    /// `Affirmative`.
    pub fn parts(self) -> (Tense, Mood) {
        match self {
            Bucket::IndicativePresent => (Tense::Present, Mood::Indicative),
            Bucket::IndicativePreterite => (Tense::Preterite, Mood::Indicative),
            Bucket::IndicativeImperfect => (Tense::Imperfect, Mood::Indicative),
            Bucket::IndicativeFuture => (Tense::Future, Mood::Indicative),
            Bucket::IndicativeConditional => (Tense::Conditional, Mood::Indicative),
            Bucket::SubjunctivePresent => (Tense::Present, Mood::Subjunctive),
            Bucket::SubjunctiveImperfect => (Tense::Imperfect, Mood::Subjunctive),
            Bucket::SubjunctiveFuture => (Tense::Future, Mood::Subjunctive),
            Bucket::Imperative => (Tense::Imperative, Mood::Affirmative),
        }
    }

    /// Find the bucket for a tense and mood pair, if it is one of the nine.
    pub fn from_parts(tense: Tense, mood: Mood) -> Option<Bucket> {
        Bucket::VALUES
            .into_iter()
            .find(|bucket| bucket.parts() == (tense, mood))
    }

    /// Heading used when rendering the bucket.
    pub fn title(self) -> &'static str {
        match self {
            Bucket::IndicativePresent => "Indicative / Present",
            Bucket::IndicativePreterite => "Indicative / Preterite",
            Bucket::IndicativeImperfect => "Indicative / Imperfect",
            Bucket::IndicativeFuture => "Indicative / Future",
            Bucket::IndicativeConditional => "Indicative / Conditional",
            Bucket::SubjunctivePresent => "Subjunctive / Present",
            Bucket::SubjunctiveImperfect => "Subjunctive / Imperfect",
            Bucket::SubjunctiveFuture => "Subjunctive / Future",
            Bucket::Imperative => "Imperative / Affirmative",
        }
    }
}

#[test]
fn test_person_labels() {
    assert_eq!(
        Person::parse(Language::Spanish, "él/ella"),
        Some(Person::ThirdSingular)
    );
    assert_eq!(Person::parse(Language::Spanish, "Tú"), Some(Person::SecondSingular));
    assert_eq!(Person::parse(Language::Catalan, " jo "), Some(Person::FirstSingular));
    assert_eq!(Person::parse(Language::Catalan, "yo"), None);

    for language in Language::VALUES {
        for person in Person::VALUES {
            assert_eq!(Person::parse(*language, person.label(*language)), Some(person));
        }
    }
}

#[test]
fn test_buckets() {
    for bucket in Bucket::VALUES {
        let (tense, mood) = bucket.parts();
        assert_eq!(Bucket::from_parts(tense, mood), Some(bucket));
    }

    assert_eq!(Bucket::from_parts(Tense::Conditional, Mood::Subjunctive), None);
    assert_eq!(Bucket::from_parts(Tense::Present, Mood::Affirmative), None);
}

#[test]
fn test_other_language() {
    assert_eq!(Language::Catalan.other(), Language::Spanish);
    assert_eq!(Language::Spanish.other(), Language::Catalan);
}
