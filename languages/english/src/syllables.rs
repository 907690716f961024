use wordbank_core::Transcriber;

const DIGRAPHS: &[&str] = &["ch", "sh", "th", "ph", "wh"];

/// Hyphenated syllable transcription (`banana` -> `ba-na-na`).
///
/// Syllables are split between vowel groups: before a single consonant,
/// between two consonants, and before a final consonant + "le".
pub struct SyllableTranscriber;

impl SyllableTranscriber {
    pub fn new() -> Self {
        Self
    }

    pub fn syllables(&self, word: &str) -> Option<Vec<String>> {
        let word = word.trim().to_lowercase();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return None;
        }

        let chars: Vec<char> = word.chars().collect();
        let vowel: Vec<bool> = (0..chars.len()).map(|i| is_vowel_at(&chars, i)).collect();

        let mut groups: Vec<(usize, usize)> = Vec::new();
        for (i, &is_vowel) in vowel.iter().enumerate() {
            if !is_vowel {
                continue;
            }
            match groups.last_mut() {
                Some((_, end)) if *end == i => *end = i + 1,
                _ => groups.push((i, i + 1)),
            }
        }

        let n = chars.len();
        let ends_in_consonant_le =
            n >= 3 && chars[n - 1] == 'e' && chars[n - 2] == 'l' && !vowel[n - 3];
        if groups.len() > 1
            && chars[n - 1] == 'e'
            && groups.last() == Some(&(n - 1, n))
            && !ends_in_consonant_le
        {
            // silent final e
            groups.pop();
        }

        if groups.len() <= 1 {
            return Some(vec![word]);
        }

        let mut cuts = Vec::with_capacity(groups.len() - 1);
        for (i, pair) in groups.windows(2).enumerate() {
            let (left_end, right_start) = (pair[0].1, pair[1].0);
            let consonants: String = chars[left_end..right_start].iter().collect();
            let last_pair = i == groups.len() - 2;

            let cut = if last_pair && ends_in_consonant_le && right_start == n - 1 {
                n - 3
            } else if consonants.len() <= 1 || DIGRAPHS.contains(&consonants.as_str()) {
                left_end
            } else if consonants.starts_with("ck") {
                left_end + 2
            } else {
                left_end + 1
            };
            cuts.push(cut.max(left_end));
        }

        let mut syllables = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for cut in cuts {
            syllables.push(chars[start..cut].iter().collect());
            start = cut;
        }
        syllables.push(chars[start..].iter().collect());

        Some(syllables)
    }
}

impl Default for SyllableTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber for SyllableTranscriber {
    fn transcribe(&self, word: &str) -> Option<String> {
        self.syllables(word).map(|parts| parts.join("-"))
    }
}

/// `y` counts as a vowel after a consonant
fn is_vowel_at(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        'y' => i > 0 && !is_vowel_at(chars, i - 1),
        _ => false,
    }
}
