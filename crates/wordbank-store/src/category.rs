//! Per-category storage tables.
//!
//! Each part of speech owns a table with the same columns. The SQL for every
//! table is fixed at compile time so no category name is ever formatted into
//! a query at runtime.

use wordbank_types::PartOfSpeech;

/// Statements for one category table
#[derive(Debug)]
pub struct CategoryTable {
    pub name: &'static str,
    pub create: &'static str,
    pub select: &'static str,
    pub insert: &'static str,
    /// Fills NULL columns only, touching no row when nothing is missing;
    /// bound as (lemma, ipa, definition, word)
    pub fill_missing: &'static str,
    pub count: &'static str,
}

macro_rules! category_table {
    ($name:literal) => {
        CategoryTable {
            name: $name,
            create: concat!(
                "CREATE TABLE IF NOT EXISTS ",
                $name,
                " (
                    word_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    word TEXT NOT NULL UNIQUE,
                    lemma TEXT,
                    ipa TEXT,
                    definition TEXT
                )"
            ),
            select: concat!(
                "SELECT word, lemma, ipa, definition FROM ",
                $name,
                " WHERE word = ?"
            ),
            insert: concat!(
                "INSERT OR IGNORE INTO ",
                $name,
                " (word, lemma, ipa, definition) VALUES (?, ?, ?, ?)"
            ),
            fill_missing: concat!(
                "UPDATE ",
                $name,
                " SET lemma = COALESCE(lemma, ?1),
                      ipa = COALESCE(ipa, ?2),
                      definition = COALESCE(definition, ?3)
                  WHERE word = ?4
                    AND ((lemma IS NULL AND ?1 IS NOT NULL)
                      OR (ipa IS NULL AND ?2 IS NOT NULL)
                      OR (definition IS NULL AND ?3 IS NOT NULL))"
            ),
            count: concat!("SELECT COUNT(*) FROM ", $name),
        }
    };
}

static NOUNS: CategoryTable = category_table!("nouns");
static PRONOUNS: CategoryTable = category_table!("pronouns");
static VERBS: CategoryTable = category_table!("verbs");
static ADJECTIVES: CategoryTable = category_table!("adjectives");
static ADVERBS: CategoryTable = category_table!("adverbs");
static PREPOSITIONS: CategoryTable = category_table!("prepositions");
static CONJUNCTIONS: CategoryTable = category_table!("conjunctions");
static INTERJECTIONS: CategoryTable = category_table!("interjections");

/// Table descriptor for a category (`<category lowercased>s`)
pub fn table_for(pos: PartOfSpeech) -> &'static CategoryTable {
    match pos {
        PartOfSpeech::Noun => &NOUNS,
        PartOfSpeech::Pronoun => &PRONOUNS,
        PartOfSpeech::Verb => &VERBS,
        PartOfSpeech::Adjective => &ADJECTIVES,
        PartOfSpeech::Adverb => &ADVERBS,
        PartOfSpeech::Preposition => &PREPOSITIONS,
        PartOfSpeech::Conjunction => &CONJUNCTIONS,
        PartOfSpeech::Interjection => &INTERJECTIONS,
    }
}

/// Row of a category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub word: String,
    pub lemma: Option<String>,
    pub ipa: Option<String>,
    pub definition: Option<String>,
}
