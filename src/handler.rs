use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::event::{self, HubRecord};
use crate::tokenizer::{Tokenize, TweetTokenizer};

/// Lambda handler for the tweet-parser entrypoint. Extracts the first
/// tweet's text from the event-hub payload, tokenizes it, and returns the
/// tokenized string for the next pipeline stage.
///
/// Returns `Ok(None)` for the one handled failure (missing first tweet or
/// missing `text` field); any other malformed payload fails the invocation
/// and is left to the platform's retry policy.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Option<String>, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let record: HubRecord = serde_json::from_value(event.payload)
        .map_err(|e| Error::from(format!("Failed to read event-hub record: {}", e)))?;
    let batch = event::decode_body(&record)?;

    let text = match event::first_tweet_text(&batch) {
        Ok(text) => text,
        Err(e) if e.is_handled() => {
            error!("Error parsing tweet: {}", e);
            return Ok(None);
        }
        Err(e) => return Err(Error::from(e)),
    };
    info!("EventHub trigger processed a tweet: {}", text);

    let tokenized = TweetTokenizer::new(config.tokenizer_options).tokenize(&text);
    info!("Tweet tokenized into: {}", tokenized);

    Ok(Some(tokenized))
}

pub use self::function_handler as handler;
