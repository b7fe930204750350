use repdesk_api::{RosterApiError, RosterClient};
use repdesk_core::config::{AppConfig, LoadOptions};
use repdesk_core::domain::SalesRep;
use repdesk_core::roster;

use crate::render;

use super::CommandResult;

pub fn run(options: LoadOptions, json: bool) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure(&error),
    };
    crate::init_logging(&config);

    let fetched = match super::block_on(fetch_roster(&config)) {
        Ok(fetched) => fetched,
        Err(message) => return CommandResult::internal_failure(message),
    };

    let source = match fetched {
        Ok(reps) => reps,
        Err(error) => {
            tracing::warn!(error = %error, "sales rep fetch failed; no skills to list");
            Vec::new()
        }
    };

    // Skills always come from the full source list.
    let skills = roster::distinct_skills(&source);

    let output =
        if json { render::skills_json(&skills) } else { render::render_skills(&skills) };
    CommandResult::success(output)
}

async fn fetch_roster(config: &AppConfig) -> Result<Vec<SalesRep>, RosterApiError> {
    RosterClient::new(&config.backend)?.fetch_sales_reps().await
}
