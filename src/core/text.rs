use std::collections::HashSet;

/// Fixed English stop-word list removed before similarity computation
const STOP_WORDS: &[&str] = &[
    "a", "about", "across", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "been", "being", "but", "by", "can", "do", "does", "each", "for", "from", "has", "have",
    "help", "helps", "her", "his", "how", "in", "into", "is", "it", "its", "more", "most", "new",
    "not", "of", "on", "or", "our", "out", "over", "she", "so", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "up",
    "us", "very", "was", "we", "were", "what", "when", "where", "which", "who", "will", "with",
    "within", "you", "your",
];

#[inline]
fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Lowercase, replace every non-alphanumeric run with one space, trim
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Unigram and bigram token set for one text field
///
/// Stop-words and single-character words are dropped first, so bigrams join
/// the surviving neighbours. Unigrams and bigrams share one set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized
        .split(' ')
        .filter(|w| w.chars().count() > 1 && !is_stop_word(w))
        .collect();

    let mut tokens: HashSet<String> = words.iter().map(|w| (*w).to_string()).collect();
    for pair in words.windows(2) {
        tokens.insert(format!("{} {}", pair[0], pair[1]));
    }
    tokens
}

/// Token set over several independent fields (no bigrams across fields)
pub fn tokenize_fields<'a, I>(fields: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = HashSet::new();
    for field in fields {
        tokens.extend(tokenize(field));
    }
    tokens
}

/// Jaccard similarity of two token sets, 0.0 when both are empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Normalized free text supporting keyword containment queries
///
/// Keywords are normalized the same way as the text, so `"single-picture"`
/// matches `"Single Picture"`.
#[derive(Debug, Clone, Default)]
pub struct KeywordText(String);

impl KeywordText {
    pub fn new(text: &str) -> Self {
        Self(normalize(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        let keyword = normalize(keyword);
        !keyword.is_empty() && self.0.contains(&keyword)
    }

    pub fn any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.contains(k))
    }

    /// Number of distinct keywords from the list present in the text
    pub fn hits(&self, keywords: &[&str]) -> usize {
        keywords.iter().filter(|k| self.contains(k)).count()
    }

    pub fn first_match<'k>(&self, keywords: &[&'k str]) -> Option<&'k str> {
        keywords.iter().copied().find(|k| self.contains(k))
    }
}
