use lambda_runtime::{Error, run, service_fn};
use tracing::info;

use tweet_parser::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tweet_parser::setup_logging();

    info!("Tweet parser Lambda initialized");

    run(service_fn(handler::function_handler)).await
}
