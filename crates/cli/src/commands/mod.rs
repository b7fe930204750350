pub mod ask;
pub mod config;
pub mod doctor;
pub mod reps;
pub mod skills;

use repdesk_core::config::ConfigError;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn config_failure(error: &ConfigError) -> Self {
        Self { exit_code: 2, output: format!("configuration error: {error}") }
    }

    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self { exit_code: 3, output: format!("internal error: {}", message.into()) }
    }
}

/// Run a future to completion on a throwaway current-thread runtime.
pub(crate) fn block_on<F>(future: F) -> Result<F::Output, String>
where
    F: std::future::Future,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| format!("failed to initialize async runtime: {error}"))?;
    Ok(runtime.block_on(future))
}
