use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Narrow tokenizer interface so the handler never depends on a concrete
/// implementation.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> String;
}

/// Selects which tweet entity classes the tokenizer replaces. Defaults to
/// all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub urls: bool,
    pub mentions: bool,
    pub hashtags: bool,
    pub reserved: bool,
    pub emojis: bool,
    pub smileys: bool,
    pub numbers: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            urls: true,
            mentions: true,
            hashtags: true,
            reserved: true,
            emojis: true,
            smileys: true,
            numbers: true,
        }
    }
}

impl TokenizerOptions {
    /// All classes disabled; the starting point for building a subset.
    #[must_use]
    pub fn none() -> Self {
        Self {
            urls: false,
            mentions: false,
            hashtags: false,
            reserved: false,
            emojis: false,
            smileys: false,
            numbers: false,
        }
    }
}

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url regex"));
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("mention regex"));
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("hashtag regex"));
static RESERVED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:RT|FAV)\b").expect("reserved regex"));
static EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Extended_Pictographic}\x{FE0F}?").expect("emoji regex"));
static SMILEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[:;=8][\-o*']?[)\](\[dDpP/\\|]").expect("smiley regex"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*\b").expect("number regex"));

/// Tweet tokenizer: replaces recognized entities (URLs, mentions, hashtags,
/// reserved words, emoji, smileys, numbers) with placeholder tokens such as
/// `$URL$`, leaving all other text untouched.
#[derive(Debug, Default)]
pub struct TweetTokenizer {
    options: TokenizerOptions,
}

impl TweetTokenizer {
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }
}

impl Tokenize for TweetTokenizer {
    fn tokenize(&self, text: &str) -> String {
        // URLs first so entity patterns never fire inside one.
        let mut out = text.to_string();
        if self.options.urls {
            out = URL_RE.replace_all(&out, NoExpand("$URL$")).into_owned();
        }
        if self.options.mentions {
            out = MENTION_RE
                .replace_all(&out, NoExpand("$MENTION$"))
                .into_owned();
        }
        if self.options.hashtags {
            out = HASHTAG_RE
                .replace_all(&out, NoExpand("$HASHTAG$"))
                .into_owned();
        }
        if self.options.reserved {
            out = RESERVED_RE
                .replace_all(&out, NoExpand("$RESERVED$"))
                .into_owned();
        }
        if self.options.emojis {
            out = EMOJI_RE.replace_all(&out, NoExpand("$EMOJI$")).into_owned();
        }
        if self.options.smileys {
            out = SMILEY_RE
                .replace_all(&out, NoExpand("$SMILEY$"))
                .into_owned();
        }
        if self.options.numbers {
            out = NUMBER_RE
                .replace_all(&out, NoExpand("$NUMBER$"))
                .into_owned();
        }
        out
    }
}
