/// Tables the dataset is expected to carry.
pub(super) const TABLES: [&str; 2] = ["verbs", "conjugations"];

/// Optional column on `conjugations`. Older exports do not have it, in which
/// case every form reads as regular.
pub(super) const IRREGULAR_COLUMN: &str = "is_irregular";

/// Statements which create an empty dataset.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS verbs (
    id INTEGER PRIMARY KEY,
    verb TEXT NOT NULL,
    language TEXT NOT NULL,
    gerund TEXT NOT NULL,
    participle TEXT NOT NULL,
    translation TEXT NOT NULL,
    regularity TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_verbs_language ON verbs(language);
CREATE INDEX IF NOT EXISTS idx_verbs_translation ON verbs(translation);

CREATE TABLE IF NOT EXISTS conjugations (
    verb_id INTEGER NOT NULL,
    tense TEXT NOT NULL,
    mood TEXT NOT NULL,
    person TEXT NOT NULL,
    conjugation TEXT NOT NULL,
    is_irregular INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (verb_id) REFERENCES verbs(id)
);

CREATE INDEX IF NOT EXISTS idx_conjugations_verb ON conjugations(verb_id);
"#;
