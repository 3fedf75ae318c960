use std::env;

use crate::tokenizer::TokenizerOptions;

/// Runtime configuration for the parser Lambda.
///
/// The only knob is `TOKENIZER_OPTIONS`: a comma-separated list of entity
/// classes the tokenizer should replace (`urls`, `mentions`, `hashtags`,
/// `reserved`, `emojis`, `smileys`, `numbers`). Unset means all classes.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tokenizer_options: TokenizerOptions,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        match env::var("TOKENIZER_OPTIONS") {
            Ok(raw) => Ok(Self {
                tokenizer_options: parse_options(&raw)?,
            }),
            Err(_) => Ok(Self {
                tokenizer_options: TokenizerOptions::default(),
            }),
        }
    }
}

fn parse_options(raw: &str) -> Result<TokenizerOptions, String> {
    let mut options = TokenizerOptions::none();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name {
            "urls" => options.urls = true,
            "mentions" => options.mentions = true,
            "hashtags" => options.hashtags = true,
            "reserved" => options.reserved = true,
            "emojis" => options.emojis = true,
            "smileys" => options.smileys = true,
            "numbers" => options.numbers = true,
            other => return Err(format!("TOKENIZER_OPTIONS: unknown class '{}'", other)),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_subset_of_classes() {
        let options = parse_options("urls, hashtags").unwrap();
        assert!(options.urls);
        assert!(options.hashtags);
        assert!(!options.mentions);
        assert!(!options.numbers);
    }

    #[test]
    fn rejects_unknown_class_names() {
        assert!(parse_options("urls,bogus").is_err());
    }

    #[test]
    fn empty_list_disables_everything() {
        assert_eq!(parse_options("").unwrap(), TokenizerOptions::none());
    }
}
