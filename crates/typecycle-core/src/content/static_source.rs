/// Sample headline words used when the caller supplies none.
pub const DEFAULT_HEADLINE_WORDS: [&str; 4] = ["Developer", "Designer", "Creator", "Tinkerer"];

pub fn default_headline_words() -> &'static [&'static str] {
    &DEFAULT_HEADLINE_WORDS
}
