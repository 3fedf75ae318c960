//! Tweet parser Lambda: one stage of a streaming big-data pipeline.
//!
//! The handler receives a serialized tweet batch from the event-hub trigger,
//! extracts the `text` of the first tweet, tokenizes it (URLs, mentions,
//! hashtags and friends become placeholder tokens), and hands the tokenized
//! string back to the platform for the next pipeline stage.

pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod tokenizer;

/// Configure structured logging for the Lambda environment.
///
/// Sets up a tracing-subscriber JSON formatter suitable for the hosting
/// platform's log aggregation. Call once at the start of the binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
