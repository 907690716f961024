//! Shared tables. Category tables are created lazily, see [`crate::category`].

use sqlx::SqlitePool;
use wordbank_types::PartOfSpeech;

use crate::error::Result;

/// Create shared tables and seed the category list (idempotent)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_words_table(pool).await?;
    create_parts_of_speech_table(pool).await?;

    // Relational graph around `words`
    create_word_pos_table(pool).await?;
    create_synonyms_table(pool).await?;
    create_antonyms_table(pool).await?;
    create_origins_table(pool).await?;

    seed_parts_of_speech(pool).await?;

    Ok(())
}

async fn create_words_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS words (
            word_id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT NOT NULL UNIQUE,
            lemma TEXT,
            ipa TEXT,
            pos TEXT NOT NULL,
            definition TEXT,
            example TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Backfill scans only touch incomplete rows
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_words_incomplete
        ON words(word)
        WHERE definition IS NULL OR ipa IS NULL
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_parts_of_speech_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS parts_of_speech (
            pos_id INTEGER PRIMARY KEY AUTOINCREMENT,
            pos_type TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_word_pos_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS word_pos (
            word_id INTEGER NOT NULL REFERENCES words(word_id),
            pos_id INTEGER NOT NULL REFERENCES parts_of_speech(pos_id),
            PRIMARY KEY (word_id, pos_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_synonyms_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS synonyms (
            word_id INTEGER NOT NULL REFERENCES words(word_id),
            synonym TEXT NOT NULL,
            PRIMARY KEY (word_id, synonym)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_antonyms_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS antonyms (
            word_id INTEGER NOT NULL REFERENCES words(word_id),
            antonym TEXT NOT NULL,
            PRIMARY KEY (word_id, antonym)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_origins_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS origins (
            word_id INTEGER NOT NULL REFERENCES words(word_id),
            origin TEXT NOT NULL,
            PRIMARY KEY (word_id, origin)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_parts_of_speech(pool: &SqlitePool) -> Result<()> {
    for pos in PartOfSpeech::ALL {
        sqlx::query("INSERT OR IGNORE INTO parts_of_speech (pos_type) VALUES (?)")
            .bind(pos.as_str())
            .execute(pool)
            .await?;
    }

    Ok(())
}
