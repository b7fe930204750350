use repdesk_assistant::{AskExchange, HttpAssistantClient, FALLBACK_ANSWER};
use repdesk_core::config::{AppConfig, LoadOptions};

use super::CommandResult;

/// Forward one question to the assistant endpoint and print whatever the
/// exchange settled on. The command exits 0 whether or not the assistant
/// answered; the fallback string is itself a valid answer to display.
pub fn run(options: LoadOptions, question: &str) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure(&error),
    };
    crate::init_logging(&config);

    let answer = match super::block_on(exchange_once(&config, question)) {
        Ok(answer) => answer,
        Err(message) => return CommandResult::internal_failure(message),
    };

    CommandResult::success(answer)
}

async fn exchange_once(config: &AppConfig, question: &str) -> String {
    let mut exchange = AskExchange::new();

    match HttpAssistantClient::new(&config.backend) {
        Ok(client) => {
            exchange.ask(&client, question).await;
        }
        Err(error) => {
            tracing::warn!(error = %error, "assistant client could not be built");
            exchange.begin(question);
            exchange.settle(FALLBACK_ANSWER);
        }
    }

    exchange.answer().to_string()
}
