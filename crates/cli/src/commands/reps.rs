use repdesk_api::{RosterApiError, RosterClient};
use repdesk_core::config::{AppConfig, LoadOptions};
use repdesk_core::domain::SalesRep;
use repdesk_core::roster::RosterView;

use crate::render;

use super::CommandResult;

pub fn run(
    options: LoadOptions,
    skill: Option<String>,
    sort_by_deals: bool,
    json: bool,
) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure(&error),
    };
    crate::init_logging(&config);

    let fetched = match super::block_on(fetch_roster(&config)) {
        Ok(fetched) => fetched,
        Err(message) => return CommandResult::internal_failure(message),
    };

    let mut view = RosterView::new();
    match fetched {
        Ok(reps) => view.replace_source(reps),
        Err(error) => {
            // A failed load leaves the empty roster in place; there is no
            // retry and no user-facing error beyond this record.
            tracing::warn!(error = %error, "sales rep fetch failed; rendering empty roster");
        }
    }

    view.set_skill_filter(skill);
    view.set_sort_by_deal_count(sort_by_deals);

    let output = if json {
        render::reps_json(view.visible())
    } else {
        render::render_reps(view.visible())
    };
    CommandResult::success(output)
}

async fn fetch_roster(config: &AppConfig) -> Result<Vec<SalesRep>, RosterApiError> {
    RosterClient::new(&config.backend)?.fetch_sales_reps().await
}
