use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use repdesk_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run(options: LoadOptions) -> String {
    let base_url_overridden = options.overrides.base_url.is_some();
    let log_level_overridden = options.overrides.log_level.is_some();
    let explicit_path = options.config_path.clone();

    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return format!("configuration error: {error}"),
    };

    let config_file_path =
        explicit_path.filter(|path| path.exists()).or_else(detect_config_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines =
        vec!["effective config (source precedence: override > env > file > default):".to_string()];

    lines.push(render_line(
        "backend.base_url",
        &config.backend.base_url,
        field_source(
            base_url_overridden,
            "backend.base_url",
            &["REPDESK_BACKEND_BASE_URL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "backend.timeout_secs",
        &config.backend.timeout_secs.to_string(),
        field_source(
            false,
            "backend.timeout_secs",
            &["REPDESK_BACKEND_TIMEOUT_SECS"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "backend.connect_timeout_secs",
        &config.backend.connect_timeout_secs.to_string(),
        field_source(
            false,
            "backend.connect_timeout_secs",
            &["REPDESK_BACKEND_CONNECT_TIMEOUT_SECS"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            log_level_overridden,
            "logging.level",
            &["REPDESK_LOGGING_LEVEL", "REPDESK_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        field_source(
            false,
            "logging.format",
            &["REPDESK_LOGGING_FORMAT", "REPDESK_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("repdesk.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/repdesk.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    overridden: bool,
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if overridden {
        return "command-line override".to_string();
    }

    for env_key in env_keys {
        if env::var_os(env_key).is_some() {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
