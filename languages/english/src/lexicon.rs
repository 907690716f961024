use std::collections::HashMap;

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "nobody", "nothing",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite", "down",
    "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "past", "since", "through", "throughout", "to", "toward", "towards",
    "under", "underneath", "until", "up", "upon", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "unless", "whereas",
    "while", "if", "whether", "than",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "oops", "ouch", "hmm", "alas", "bravo", "hooray",
    "yay", "ugh", "yes", "no", "bye", "goodbye",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "either",
    "neither", "all", "both", "few", "many", "much", "several",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const VERBS: &[&str] = &[
    "ask", "become", "begin", "bring", "build", "buy", "call", "come", "cry", "cut", "drink",
    "drive", "eat", "fall", "feel", "find", "fly", "forget", "get", "give", "go", "grow", "hear",
    "help", "hold", "jump", "keep", "know", "learn", "leave", "let", "like", "live", "look",
    "lose", "love", "make", "mean", "meet", "move", "need", "open", "pay", "play", "put", "read",
    "run", "say", "see", "sell", "send", "show", "sing", "sit", "sleep", "speak", "stand", "start",
    "stop", "swim", "take", "talk", "teach", "tell", "think", "try", "turn", "understand", "use",
    "wait", "walk", "want", "watch", "win", "work", "write",
];

const NOUNS: &[&str] = &[
    "apple", "book", "boy", "car", "cat", "child", "city", "country", "day", "dog", "door",
    "family", "friend", "girl", "hand", "house", "idea", "life", "man", "money", "mother",
    "night", "people", "person", "place", "problem", "school", "student", "teacher", "thing",
    "time", "tree", "water", "way", "woman", "word", "work", "world", "year",
];

const ADJECTIVES: &[&str] = &[
    "bad", "big", "cold", "early", "easy", "fast", "good", "great", "happy", "hard", "high",
    "hot", "important", "large", "late", "little", "long", "new", "old", "poor", "rich", "sad",
    "short", "small", "strong", "young",
];

const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "away", "even", "ever", "here", "just",
    "never", "not", "now", "often", "once", "perhaps", "quite", "rather", "soon", "still",
    "then", "there", "today", "together", "tomorrow", "too", "very", "well", "yesterday",
];

/// Embedded word list with Universal POS tags.
///
/// Closed-class words are complete enough to tag any English text; the
/// open-class lists only cover very common words.
pub struct Lexicon {
    tags: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut lexicon = Self::new();

        // Later tables win, closed classes go last
        lexicon.extend(ADJECTIVES, "ADJ");
        lexicon.extend(NOUNS, "NOUN");
        lexicon.extend(VERBS, "VERB");
        lexicon.extend(ADVERBS, "ADV");
        lexicon.extend(DETERMINERS, "DET");
        lexicon.extend(AUXILIARIES, "AUX");
        lexicon.extend(INTERJECTIONS, "INTJ");
        lexicon.extend(CONJUNCTIONS, "CCONJ");
        lexicon.extend(PREPOSITIONS, "ADP");
        lexicon.extend(PRONOUNS, "PRON");

        lexicon
    }

    fn extend(&mut self, words: &[&'static str], tag: &'static str) {
        for word in words {
            self.tags.insert(word, tag);
        }
    }

    /// Tag for a lowercase word
    pub fn tag(&self, word: &str) -> Option<&'static str> {
        self.tags.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tags.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::with_defaults()
    }
}
