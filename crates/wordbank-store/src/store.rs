use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use wordbank_types::{PartOfSpeech, WordRecord};

use crate::category::{CategoryRow, CategoryTable, table_for};
use crate::error::Result;
use crate::schema;

const WORD_COLUMNS: &str = "word, lemma, ipa, pos, definition, example";

/// Fields written by [`WordStore::upsert`]. `None` means "unknown", never "clear".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUpsert {
    pub word: String,
    pub pos: PartOfSpeech,
    pub lemma: Option<String>,
    pub ipa: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub origin: Option<String>,
}

impl WordUpsert {
    pub fn new(word: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            word: word.into(),
            pos,
            lemma: None,
            ipa: None,
            definition: None,
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            origin: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}

/// Durable vocabulary store: a shared `words` index plus one table per category.
///
/// The handle is opened once per run and passed to every component; call
/// [`WordStore::close`] at the end of the run.
pub struct WordStore {
    pool: SqlitePool,
    ensured: Mutex<HashSet<PartOfSpeech>>,
}

impl WordStore {
    /// Open (creating if needed) the database file at `path`
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        let newly_created = !path.exists();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        if newly_created {
            tracing::info!("Initialized new database: {}", path.display());
        } else {
            tracing::info!("Opened existing database: {}", path.display());
        }

        Self::init(pool).await
    }

    /// Private in-memory database, mostly for tests
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // One connection that never expires, otherwise the database vanishes
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::init(pool).await
    }

    async fn init(pool: SqlitePool) -> Result<Self> {
        schema::create_tables(&pool).await?;

        Ok(Self {
            pool,
            ensured: Mutex::new(HashSet::new()),
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("Word store closed");
    }

    fn is_ensured(&self, pos: PartOfSpeech) -> bool {
        self.ensured
            .lock()
            .map(|set| set.contains(&pos))
            .unwrap_or(false)
    }

    fn mark_ensured(&self, pos: PartOfSpeech) {
        if let Ok(mut set) = self.ensured.lock() {
            set.insert(pos);
        }
        tracing::debug!("Category table ready: {}", table_for(pos).name);
    }

    /// Create the category table on first use
    async fn ensure_category(&self, pos: PartOfSpeech) -> Result<&'static CategoryTable> {
        let table = table_for(pos);

        if !self.is_ensured(pos) {
            sqlx::query(table.create).execute(&self.pool).await?;
            self.mark_ensured(pos);
        }

        Ok(table)
    }

    /// Whether `word` is in the shared index
    pub async fn exists(&self, word: &str) -> Result<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM words WHERE word = ?)")
            .bind(word)
            .fetch_one(&self.pool)
            .await?;

        Ok(found != 0)
    }

    pub async fn get(&self, word: &str) -> Result<Option<WordRecord>> {
        let sql = format!("SELECT {WORD_COLUMNS} FROM words WHERE word = ?");
        let row = sqlx::query(&sql)
            .bind(word)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(record_from_row).transpose()
    }

    /// Category previously recorded for `word`
    pub async fn category_of(&self, word: &str) -> Result<Option<PartOfSpeech>> {
        let pos: Option<String> = sqlx::query_scalar("SELECT pos FROM words WHERE word = ?")
            .bind(word)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pos.map(|tag| PartOfSpeech::resolve(Some(&tag))))
    }

    /// Row for `word` in its category table
    pub async fn category_row(&self, word: &str, pos: PartOfSpeech) -> Result<Option<CategoryRow>> {
        let table = self.ensure_category(pos).await?;

        let row = sqlx::query(table.select)
            .bind(word)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(CategoryRow {
                word: row.try_get("word")?,
                lemma: row.try_get("lemma")?,
                ipa: row.try_get("ipa")?,
                definition: row.try_get("definition")?,
            })),
            None => Ok(None),
        }
    }

    /// Insert the word if absent, otherwise fill only its NULL fields.
    ///
    /// Runs as one transaction across `words`, the category table and the
    /// relation tables. Non-NULL values are never overwritten, and a stored
    /// word keeps the category it was first recorded under: `fields.pos`
    /// only applies to new words.
    pub async fn upsert(&self, fields: &WordUpsert) -> Result<UpsertOutcome> {
        let mut tx = self.pool.begin().await?;

        // Write first so the transaction takes the write lock up front
        let inserted = sqlx::query(
            r#"
            INSERT OR IGNORE INTO words (word, lemma, ipa, pos, definition, example)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.word)
        .bind(&fields.lemma)
        .bind(&fields.ipa)
        .bind(fields.pos.as_str())
        .bind(&fields.definition)
        .bind(&fields.example)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            == 1;

        let recorded: String = sqlx::query_scalar("SELECT pos FROM words WHERE word = ?")
            .bind(&fields.word)
            .fetch_one(&mut *tx)
            .await?;
        let pos = PartOfSpeech::resolve(Some(&recorded));
        if pos != fields.pos {
            tracing::debug!(
                word = %fields.word,
                recorded = %pos,
                requested = %fields.pos,
                "Keeping recorded category"
            );
        }

        let table = table_for(pos);
        let create_table = !self.is_ensured(pos);
        if create_table {
            sqlx::query(table.create).execute(&mut *tx).await?;
        }

        let mut updated = false;
        if !inserted {
            updated = sqlx::query(
                r#"
                UPDATE words SET
                    lemma = COALESCE(lemma, ?1),
                    ipa = COALESCE(ipa, ?2),
                    definition = COALESCE(definition, ?3),
                    example = COALESCE(example, ?4),
                    updated_at = CURRENT_TIMESTAMP
                WHERE word = ?5
                  AND ((lemma IS NULL AND ?1 IS NOT NULL)
                    OR (ipa IS NULL AND ?2 IS NOT NULL)
                    OR (definition IS NULL AND ?3 IS NOT NULL)
                    OR (example IS NULL AND ?4 IS NOT NULL))
                "#,
            )
            .bind(&fields.lemma)
            .bind(&fields.ipa)
            .bind(&fields.definition)
            .bind(&fields.example)
            .bind(&fields.word)
            .execute(&mut *tx)
            .await?
            .rows_affected()
                > 0;
        }

        let category_rows = sqlx::query(table.insert)
            .bind(&fields.word)
            .bind(&fields.lemma)
            .bind(&fields.ipa)
            .bind(&fields.definition)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            + sqlx::query(table.fill_missing)
                .bind(&fields.lemma)
                .bind(&fields.ipa)
                .bind(&fields.definition)
                .bind(&fields.word)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        sqlx::query(
            r#"
            INSERT OR IGNORE INTO word_pos (word_id, pos_id)
            SELECT w.word_id, p.pos_id
            FROM words w, parts_of_speech p
            WHERE w.word = ? AND p.pos_type = ?
            "#,
        )
        .bind(&fields.word)
        .bind(pos.as_str())
        .execute(&mut *tx)
        .await?;

        let mut related = 0;
        for synonym in &fields.synonyms {
            related += sqlx::query(
                "INSERT OR IGNORE INTO synonyms (word_id, synonym) SELECT word_id, ? FROM words WHERE word = ?",
            )
            .bind(synonym)
            .bind(&fields.word)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        for antonym in &fields.antonyms {
            related += sqlx::query(
                "INSERT OR IGNORE INTO antonyms (word_id, antonym) SELECT word_id, ? FROM words WHERE word = ?",
            )
            .bind(antonym)
            .bind(&fields.word)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        if let Some(origin) = &fields.origin {
            related += sqlx::query(
                "INSERT OR IGNORE INTO origins (word_id, origin) SELECT word_id, ? FROM words WHERE word = ?",
            )
            .bind(origin)
            .bind(&fields.word)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;

        if create_table {
            self.mark_ensured(pos);
        }

        let outcome = if inserted {
            UpsertOutcome::Inserted
        } else if updated || category_rows > 0 || related > 0 {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Unchanged
        };

        tracing::debug!(word = %fields.word, table = table.name, ?outcome, "Upserted word");
        Ok(outcome)
    }

    /// Every stored surface form
    pub async fn words(&self) -> Result<HashSet<String>> {
        let words: Vec<String> = sqlx::query_scalar("SELECT word FROM words")
            .fetch_all(&self.pool)
            .await?;

        Ok(words.into_iter().collect())
    }

    /// Backfill candidates: stored words still missing a definition or transcription
    pub async fn incomplete(&self) -> Result<Vec<WordRecord>> {
        let sql = format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE definition IS NULL OR ipa IS NULL ORDER BY word"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(record_from_row).collect()
    }

    /// Every record that has a definition
    pub async fn defined(&self) -> Result<Vec<WordRecord>> {
        let sql =
            format!("SELECT {WORD_COLUMNS} FROM words WHERE definition IS NOT NULL ORDER BY word");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(record_from_row).collect()
    }

    pub async fn synonyms(&self, word: &str) -> Result<Vec<String>> {
        let rows = sqlx::query_scalar(
            r#"
            SELECT s.synonym FROM synonyms s
            JOIN words w ON w.word_id = s.word_id
            WHERE w.word = ?
            ORDER BY s.synonym
            "#,
        )
        .bind(word)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn antonyms(&self, word: &str) -> Result<Vec<String>> {
        let rows = sqlx::query_scalar(
            r#"
            SELECT a.antonym FROM antonyms a
            JOIN words w ON w.word_id = a.word_id
            WHERE w.word = ?
            ORDER BY a.antonym
            "#,
        )
        .bind(word)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn origins(&self, word: &str) -> Result<Vec<String>> {
        let rows = sqlx::query_scalar(
            r#"
            SELECT o.origin FROM origins o
            JOIN words w ON w.word_id = o.word_id
            WHERE w.word = ?
            ORDER BY o.origin
            "#,
        )
        .bind(word)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Categories linked to `word` through `word_pos`
    pub async fn linked_categories(&self, word: &str) -> Result<Vec<PartOfSpeech>> {
        let tags: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT p.pos_type FROM word_pos wp
            JOIN words w ON w.word_id = wp.word_id
            JOIN parts_of_speech p ON p.pos_id = wp.pos_id
            WHERE w.word = ?
            ORDER BY p.pos_id
            "#,
        )
        .bind(word)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags.iter().filter_map(|t| PartOfSpeech::from_tag(t)).collect())
    }

    /// Number of rows in the shared index
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Number of rows in one category table
    pub async fn category_count(&self, pos: PartOfSpeech) -> Result<i64> {
        let table = self.ensure_category(pos).await?;
        let count = sqlx::query_scalar(table.count)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<WordRecord> {
    let pos: String = row.try_get("pos")?;

    Ok(WordRecord {
        word: row.try_get("word")?,
        lemma: row.try_get("lemma")?,
        ipa: row.try_get("ipa")?,
        pos: PartOfSpeech::resolve(Some(&pos)),
        definition: row.try_get("definition")?,
        example: row.try_get("example")?,
    })
}
