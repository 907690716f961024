/// A possible dictionary form of an inflected word
#[derive(Debug, Clone, PartialEq)]
pub struct LemmaCandidate {
    pub base_form: String,
    pub rule: &'static str,
    /// Tag implied by the inflection, if any
    pub tag_hint: Option<&'static str>,
    pub confidence: f32,
}

const IRREGULAR: &[(&str, &str, &str)] = &[
    ("am", "be", "AUX"),
    ("is", "be", "AUX"),
    ("are", "be", "AUX"),
    ("was", "be", "AUX"),
    ("were", "be", "AUX"),
    ("been", "be", "AUX"),
    ("has", "have", "AUX"),
    ("had", "have", "AUX"),
    ("did", "do", "AUX"),
    ("done", "do", "VERB"),
    ("went", "go", "VERB"),
    ("gone", "go", "VERB"),
    ("ran", "run", "VERB"),
    ("saw", "see", "VERB"),
    ("seen", "see", "VERB"),
    ("ate", "eat", "VERB"),
    ("eaten", "eat", "VERB"),
    ("took", "take", "VERB"),
    ("taken", "take", "VERB"),
    ("made", "make", "VERB"),
    ("gave", "give", "VERB"),
    ("given", "give", "VERB"),
    ("came", "come", "VERB"),
    ("got", "get", "VERB"),
    ("knew", "know", "VERB"),
    ("known", "know", "VERB"),
    ("thought", "think", "VERB"),
    ("said", "say", "VERB"),
    ("told", "tell", "VERB"),
    ("found", "find", "VERB"),
    ("wrote", "write", "VERB"),
    ("written", "write", "VERB"),
    ("spoke", "speak", "VERB"),
    ("flew", "fly", "VERB"),
    ("swam", "swim", "VERB"),
    ("sang", "sing", "VERB"),
    ("sat", "sit", "VERB"),
    ("slept", "sleep", "VERB"),
    ("bought", "buy", "VERB"),
    ("brought", "bring", "VERB"),
    ("taught", "teach", "VERB"),
    ("began", "begin", "VERB"),
    ("left", "leave", "VERB"),
    ("felt", "feel", "VERB"),
    ("kept", "keep", "VERB"),
    ("children", "child", "NOUN"),
    ("men", "man", "NOUN"),
    ("women", "woman", "NOUN"),
    ("mice", "mouse", "NOUN"),
    ("feet", "foot", "NOUN"),
    ("teeth", "tooth", "NOUN"),
    ("geese", "goose", "NOUN"),
    ("better", "good", "ADJ"),
    ("best", "good", "ADJ"),
    ("worse", "bad", "ADJ"),
    ("worst", "bad", "ADJ"),
];

/// Rule-based reduction of English inflections
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Possible base forms of a lowercase word, most likely first
    pub fn lemmatize(&self, word: &str) -> Vec<LemmaCandidate> {
        if let Some((_, base, tag)) = IRREGULAR.iter().find(|(form, _, _)| *form == word) {
            return vec![LemmaCandidate {
                base_form: base.to_string(),
                rule: "irregular",
                tag_hint: Some(*tag),
                confidence: 1.0,
            }];
        }

        let mut results = Vec::new();
        results.extend(self.plural_or_third_person(word));
        results.extend(self.progressive(word));
        results.extend(self.past(word));
        results.extend(self.comparative(word));

        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        results
    }

    /// cats -> cat, boxes -> box, flies -> fly
    fn plural_or_third_person(&self, word: &str) -> Vec<LemmaCandidate> {
        let mut results = Vec::new();

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() >= 2 {
                results.push(candidate(format!("{stem}y"), "-ies", None, 0.9));
            }
        } else if let Some(stem) = word.strip_suffix("es") {
            if ["s", "x", "z", "ch", "sh"].iter().any(|end| stem.ends_with(end)) {
                results.push(candidate(stem.to_string(), "-es", None, 0.85));
            }
            // goes -> go, makes -> make
            results.push(candidate(format!("{stem}e"), "-s", None, 0.6));
            if stem.len() >= 2 {
                results.push(candidate(stem.to_string(), "-es", None, 0.5));
            }
        } else if let Some(stem) = word.strip_suffix('s') {
            if !stem.ends_with('s') && !stem.ends_with('u') && stem.len() >= 3 {
                results.push(candidate(stem.to_string(), "-s", None, 0.8));
            }
        }

        results
    }

    /// running -> run, making -> make, walking -> walk
    fn progressive(&self, word: &str) -> Vec<LemmaCandidate> {
        let Some(stem) = word.strip_suffix("ing") else {
            return Vec::new();
        };
        if stem.len() < 2 || !stem.chars().any(is_vowel) {
            return Vec::new();
        }

        let mut results = Vec::new();
        if let Some(single) = undouble(stem) {
            results.push(candidate(single, "-ing, doubled consonant", Some("VERB"), 0.85));
        }
        results.push(candidate(stem.to_string(), "-ing", Some("VERB"), 0.8));
        results.push(candidate(format!("{stem}e"), "-ing, dropped e", Some("VERB"), 0.6));
        results
    }

    /// stopped -> stop, cried -> cry, moved -> move, walked -> walk
    fn past(&self, word: &str) -> Vec<LemmaCandidate> {
        if let Some(stem) = word.strip_suffix("ied") {
            if stem.len() >= 2 {
                return vec![candidate(format!("{stem}y"), "-ied", Some("VERB"), 0.9)];
            }
            return Vec::new();
        }

        let Some(stem) = word.strip_suffix("ed") else {
            return Vec::new();
        };
        if stem.len() < 2 || !stem.chars().any(is_vowel) {
            return Vec::new();
        }

        let mut results = Vec::new();
        if let Some(single) = undouble(stem) {
            results.push(candidate(single, "-ed, doubled consonant", Some("VERB"), 0.85));
        }
        results.push(candidate(stem.to_string(), "-ed", Some("VERB"), 0.8));
        results.push(candidate(format!("{stem}e"), "-d", Some("VERB"), 0.7));
        results
    }

    /// bigger -> big, fastest -> fast
    fn comparative(&self, word: &str) -> Vec<LemmaCandidate> {
        let stem = match word.strip_suffix("est") {
            Some(stem) => stem,
            None => match word.strip_suffix("er") {
                Some(stem) => stem,
                None => return Vec::new(),
            },
        };
        if stem.len() < 2 {
            return Vec::new();
        }

        let mut results = Vec::new();
        if let Some(single) = undouble(stem) {
            results.push(candidate(single, "comparative, doubled consonant", Some("ADJ"), 0.5));
        }
        if let Some(base) = stem.strip_suffix('i') {
            results.push(candidate(format!("{base}y"), "comparative, -y", Some("ADJ"), 0.5));
        }
        results.push(candidate(stem.to_string(), "comparative", Some("ADJ"), 0.4));
        results
    }
}

impl Default for EnglishLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

fn candidate(
    base_form: String,
    rule: &'static str,
    tag_hint: Option<&'static str>,
    confidence: f32,
) -> LemmaCandidate {
    LemmaCandidate {
        base_form,
        rule,
        tag_hint,
        confidence,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// "runn" -> "run"; `None` unless the stem ends in a doubled consonant
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;

    if last == before && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}
