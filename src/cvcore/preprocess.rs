use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

// general-purpose English stopwords; domain terms come from MatchConfig
static GENERAL_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let words: &[&str] = &[
        "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","can't","cannot","could","couldn't",
        "did","didn't","do","does","doesn't","doing","don't","down","during",
        "each","few","for","from","further",
        "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
        "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
        "let's","me","more","most","mustn't","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
        "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
        "under","until","up","very",
        "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","will","with","won't","would","wouldn't",
        "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves",
    ];
    words.iter().copied().collect()
});

/// Normalizes raw text into a canonical token stream: lowercase, word
/// segmentation, stopword removal, stemming. `clean` is pure and idempotent.
pub struct TextCleaner {
    domain_stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl TextCleaner {
    pub fn new(domain_stopwords: &HashSet<String>) -> Self {
        TextCleaner {
            domain_stopwords: domain_stopwords
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    fn is_stopword(&self, token: &str) -> bool {
        GENERAL_STOPWORDS.contains(token) || self.domain_stopwords.contains(token)
    }

    pub fn clean(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();
        let mut out: Vec<String> = vec![];
        for token in normalized.unicode_words() {
            if self.is_stopword(token) {
                continue;
            }
            let stem = self.stemmer.stem(token).to_string();
            // a token may only become a stopword once stemmed; dropping it
            // here keeps clean(clean(x)) == clean(x)
            if self.is_stopword(&stem) {
                continue;
            }
            out.push(stem);
        }
        out.join(" ")
    }
}
