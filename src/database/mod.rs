//! Read-only access to the bundled verb dataset.


mod schema;
pub use self::schema::SCHEMA;

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use thiserror::Error;

use crate::entities::Language;
use crate::verb::{Row, Verb};

/// An error raised while interacting with the dataset.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open dataset `{}`", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Dataset is missing table `{0}`")]
    MissingTable(&'static str),
    #[error("Failed to {what}")]
    Query {
        what: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

/// Construct a mapper from a storage error to a query error.
fn query(what: &'static str) -> impl FnOnce(rusqlite::Error) -> Error {
    move |source| Error::Query { what, source }
}

/// Used for diagnostics to indicate where a dataset was opened from.
#[non_exhaustive]
pub enum Location {
    /// The dataset was opened from the given path.
    Path(Box<Path>),
    /// The dataset was provided as an open connection.
    Connection,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "{}", path.display()),
            Location::Connection => write!(f, "<connection>"),
        }
    }
}

/// The verb dataset.
///
/// The underlying connection is only ever read from, and is guarded so that
/// a database can be shared between threads.
pub struct Database {
    connection: Mutex<Connection>,
    /// Whether `conjugations` has an irregularity column.
    irregular: bool,
    location: Location,
}

impl Database {
    /// Open the dataset at the given path in read-only mode.
    ///
    /// The file is never created, so a missing dataset is an error.
    pub fn open<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let connection =
            Connection::open_with_flags(path, flags).map_err(|source| Error::Connection {
                path: path.to_owned(),
                source,
            })?;

        Self::setup(connection, Location::Path(path.into()))
    }

    /// Wrap an already open connection, such as an in-memory fixture.
    pub fn from_connection(connection: Connection) -> Result<Self, Error> {
        Self::setup(connection, Location::Connection)
    }

    fn setup(connection: Connection, location: Location) -> Result<Self, Error> {
        connection
            .create_scalar_function(
                "fold",
                1,
                FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
                |ctx| {
                    let value = ctx.get::<Option<String>>(0)?;
                    Ok(value.map(|value| crate::fold(&value)))
                },
            )
            .map_err(query("register fold function"))?;

        let irregular = check_schema(&connection)?;

        tracing::info!(%location, irregular, "Opened dataset");

        Ok(Self {
            connection: Mutex::new(connection),
            irregular,
            location,
        })
    }

    /// Where the dataset was opened from.
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> parking_lot::MutexGuard<'_, Connection> {
        self.connection.lock()
    }

    /// Test if conjugation rows carry an irregularity flag.
    pub fn has_irregular_column(&self) -> bool {
        self.irregular
    }

    /// List headwords in dataset order, optionally restricted to one
    /// language.
    pub(crate) fn verbs(&self, language: Option<Language>) -> Result<Vec<String>, Error> {
        let connection = self.connection.lock();

        let mut stmt = match language {
            Some(..) => {
                connection.prepare("SELECT verb FROM verbs WHERE language = ?1 ORDER BY rowid")
            }
            None => connection.prepare("SELECT verb FROM verbs ORDER BY rowid"),
        }
        .map_err(query("prepare verb listing"))?;

        let mut rows = match language {
            Some(language) => stmt.query(params![language.ident()]),
            None => stmt.query([]),
        }
        .map_err(query("list verbs"))?;

        let mut verbs = Vec::new();

        while let Some(row) = rows.next().map_err(query("list verbs"))? {
            // Rows without a headword are skipped rather than failing the
            // whole listing.
            if let Some(verb) = row.get::<_, Option<String>>(0).ok().flatten() {
                verbs.push(verb);
            }
        }

        Ok(verbs)
    }

    /// Find the verb with the given headword in a language.
    ///
    /// Headwords are compared case-folded. If the dataset has several
    /// matches the first one in dataset order is returned.
    pub(crate) fn verb(&self, headword: &str, language: Language) -> Result<Option<Verb>, Error> {
        let connection = self.connection.lock();

        let verb = connection
            .query_row(
                "SELECT id, verb, gerund, participle, translation, regularity FROM verbs \
                 WHERE language = ?1 AND fold(verb) = fold(?2) \
                 ORDER BY rowid LIMIT 1",
                params![language.ident(), headword],
                |row| {
                    Ok(Verb {
                        id: row.get(0)?,
                        verb: row.get(1)?,
                        language,
                        gerund: row.get(2)?,
                        participle: row.get(3)?,
                        translation: row.get(4)?,
                        regularity: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(query("look up verb"))?;

        Ok(verb)
    }

    /// Load every conjugation row of a verb in dataset order.
    pub(crate) fn conjugations(&self, verb_id: i64) -> Result<Vec<Row>, Error> {
        let connection = self.connection.lock();

        let irregular = if self.irregular {
            schema::IRREGULAR_COLUMN
        } else {
            "NULL"
        };

        let sql = format!(
            "SELECT tense, mood, person, conjugation, {irregular} FROM conjugations \
             WHERE verb_id = ?1 ORDER BY rowid"
        );

        let mut stmt = connection
            .prepare(&sql)
            .map_err(query("prepare conjugation lookup"))?;

        let rows = stmt
            .query_map(params![verb_id], |row| {
                Ok(Row {
                    tense: row.get(0)?,
                    mood: row.get(1)?,
                    person: row.get(2)?,
                    text: row.get(3)?,
                    irregular: read_flag(row.get_ref(4)?),
                })
            })
            .map_err(query("look up conjugations"))?;

        let rows = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(query("read conjugations"))?;

        Ok(rows)
    }

    /// Find the headword of the first verb in `language` with the given
    /// translation key.
    pub(crate) fn verb_with_translation(
        &self,
        translation: &str,
        language: Language,
    ) -> Result<Option<String>, Error> {
        let connection = self.connection.lock();

        let verb = connection
            .query_row(
                "SELECT verb FROM verbs WHERE translation = ?1 AND language = ?2 \
                 ORDER BY rowid LIMIT 1",
                params![translation, language.ident()],
                |row| row.get(0),
            )
            .optional()
            .map_err(query("look up translation"))?;

        Ok(verb)
    }

    /// Find the headword of the first verb with the given translation key
    /// which is not in `excluding`.
    pub(crate) fn verb_with_translation_excluding(
        &self,
        translation: &str,
        excluding: Language,
    ) -> Result<Option<String>, Error> {
        let connection = self.connection.lock();

        let verb = connection
            .query_row(
                "SELECT verb FROM verbs WHERE translation = ?1 AND language != ?2 \
                 ORDER BY rowid LIMIT 1",
                params![translation, excluding.ident()],
                |row| row.get(0),
            )
            .optional()
            .map_err(query("look up translation"))?;

        Ok(verb)
    }
}

/// Make sure the expected tables exist and figure out whether conjugations
/// carry an irregularity flag.
fn check_schema(connection: &Connection) -> Result<bool, Error> {
    for table in schema::TABLES {
        let exists = connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |_| Ok(()),
            )
            .optional()
            .map_err(query("check schema"))?
            .is_some();

        if !exists {
            return Err(Error::MissingTable(table));
        }
    }

    let mut stmt = connection
        .prepare("SELECT name FROM pragma_table_info('conjugations')")
        .map_err(query("check schema"))?;

    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(query("check schema"))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(query("check schema"))?;

    Ok(columns.iter().any(|c| c == schema::IRREGULAR_COLUMN))
}

/// Read an irregularity flag. Anything which isn't clearly set reads as
/// regular.
fn read_flag(value: ValueRef<'_>) -> bool {
    match value {
        ValueRef::Integer(n) => n != 0,
        ValueRef::Real(n) => n != 0.0,
        ValueRef::Text(text) => {
            text == b"1" || text.eq_ignore_ascii_case(b"true") || text.eq_ignore_ascii_case(b"yes")
        }
        ValueRef::Null | ValueRef::Blob(..) => false,
    }
}
