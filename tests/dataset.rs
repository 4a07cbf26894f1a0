use conjucat::database::{self, Database, SCHEMA};
use conjucat::{Bucket, Language, Lookup, Person};
use rusqlite::Connection;

fn write_dataset(path: &std::path::Path) {
    let c = Connection::open(path).unwrap();
    c.execute_batch(SCHEMA).unwrap();
    c.execute_batch(
        "INSERT INTO verbs VALUES (1, 'ser', 'Spanish', 'siendo', 'sido', 'to be', 'irregular');
         INSERT INTO verbs VALUES (2, 'ésser', 'Catalan', 'essent', 'estat', 'to be', 'irregular');
         INSERT INTO conjugations VALUES (1, 'Present', 'Indicative', 'yo', 'soy', 1);
         INSERT INTO conjugations VALUES (2, 'Present', 'Indicative', 'jo', 'sóc', 1);",
    )
    .unwrap();
}

#[test]
fn open_bundled_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verb_conjugations.db");
    write_dataset(&path);

    let lookup = Lookup::open(&path).unwrap();

    assert_eq!(lookup.list_verbs(Language::Spanish), ["ser"]);

    let details = lookup.verb_details("ser", Language::Spanish).unwrap();
    assert_eq!(details.verb.gerund, "siendo");

    let yo = details
        .conjugation(Bucket::IndicativePresent, Person::FirstSingular)
        .unwrap();
    assert_eq!(yo.text, "soy");
    assert!(yo.irregular);

    assert_eq!(
        lookup
            .translation_counterpart("ser", Language::Spanish, Language::Catalan)
            .as_deref(),
        Some("ésser")
    );
}

#[test]
fn opened_dataset_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verb_conjugations.db");
    write_dataset(&path);

    let db = Database::open(&path).unwrap();
    assert!(db.location().to_string().ends_with("verb_conjugations.db"));

    let lookup = Lookup::new(db);
    assert_eq!(lookup.list_all_verbs(), ["ser", "ésser"]);
}

#[test]
fn missing_dataset_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");

    assert!(matches!(
        Lookup::open(&path),
        Err(database::Error::Connection { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn unrelated_database_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.db");

    let c = Connection::open(&path).unwrap();
    c.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);")
        .unwrap();
    drop(c);

    assert!(matches!(
        Lookup::open(&path),
        Err(database::Error::MissingTable("verbs"))
    ));
}
