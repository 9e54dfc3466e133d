use std::{net::TcpListener, time::Duration};

use bizintel::{
    configuration::{get_configuration, AnswerMode},
    services::{AnswerCache, AnswerEngine, AnswerStrategy, OpenaiClient, PageFetcher},
    startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let fetcher = PageFetcher::new(Duration::from_secs(configuration.scraper.timeout_seconds));

    let strategy = match configuration.answer.mode {
        AnswerMode::Heuristic => AnswerStrategy::Heuristic,
        AnswerMode::Openai => {
            let api_key = configuration
                .api_keys
                .openai
                .expect("Set api_keys.openai (APP_API_KEYS__OPENAI) to run in openai answer mode.");
            AnswerStrategy::OpenAi(OpenaiClient::new(api_key))
        }
    };
    let engine = AnswerEngine::new(strategy, AnswerCache::default());

    run(listener, fetcher, engine)?.await
}
