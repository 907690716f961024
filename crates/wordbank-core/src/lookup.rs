use wordbank_types::WordRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Lemma,
    Similar,
}

#[derive(Debug, Clone, Copy)]
pub struct LookupMatch<'a> {
    pub record: &'a WordRecord,
    pub kind: MatchKind,
    pub score: f64,
}

/// Find the record that best answers `query`.
///
/// Only records with a definition are candidates. An exact surface-form hit
/// wins, then a lemma hit, then the most similar word whose Jaro-Winkler
/// score reaches `min_similarity`.
pub fn find_best<'a>(
    query: &str,
    records: &'a [WordRecord],
    min_similarity: f64,
) -> Option<LookupMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let candidates = || records.iter().filter(|r| r.definition.is_some());

    if let Some(record) = candidates().find(|r| r.word.to_lowercase() == query) {
        return Some(LookupMatch {
            record,
            kind: MatchKind::Exact,
            score: 1.0,
        });
    }

    if let Some(record) = candidates().find(|r| {
        r.lemma
            .as_deref()
            .is_some_and(|lemma| lemma.to_lowercase() == query)
    }) {
        return Some(LookupMatch {
            record,
            kind: MatchKind::Lemma,
            score: 1.0,
        });
    }

    let mut best: Option<LookupMatch<'a>> = None;
    for record in candidates() {
        let score = strsim::jaro_winkler(&query, &record.word.to_lowercase());
        if score < min_similarity {
            continue;
        }
        if best.is_none_or(|b| score > b.score) {
            best = Some(LookupMatch {
                record,
                kind: MatchKind::Similar,
                score,
            });
        }
    }

    best
}
