use std::env;
use std::sync::{Mutex, OnceLock};

use repdesk_assistant::FALLBACK_ANSWER;
use repdesk_cli::commands::{ask, config, doctor, reps, skills};
use repdesk_core::config::{ConfigOverrides, LoadOptions};
use serde_json::Value;

// A closed local port: connections are refused immediately, which stands in
// for an unreachable backend without touching the network.
const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

#[test]
fn reps_renders_empty_state_when_backend_is_unreachable() {
    with_env(&[], || {
        let result = reps::run(unreachable_options(), None, false, false);

        assert_eq!(result.exit_code, 0, "a failed fetch is not a command failure");
        assert_eq!(result.output, "No sales reps found.");
    });
}

#[test]
fn reps_json_renders_empty_array_when_backend_is_unreachable() {
    with_env(&[], || {
        let result = reps::run(unreachable_options(), None, false, true);

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "[]");
    });
}

#[test]
fn reps_rejects_invalid_configuration() {
    with_env(&[], || {
        let result = reps::run(options_with_base_url("not-a-url"), None, false, false);

        assert_eq!(result.exit_code, 2, "expected config validation failure code");
        assert!(result.output.contains("configuration error"));
        assert!(result.output.contains("backend.base_url"));
    });
}

#[test]
fn skills_renders_empty_state_when_backend_is_unreachable() {
    with_env(&[], || {
        let result = skills::run(unreachable_options(), false);

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "No skills found.");
    });
}

#[test]
fn ask_prints_the_fallback_answer_when_backend_is_unreachable() {
    with_env(&[], || {
        let result = ask::run(unreachable_options(), "hi");

        assert_eq!(result.exit_code, 0, "a fallback answer is still a successful exchange");
        assert_eq!(result.output, FALLBACK_ANSWER);
    });
}

#[test]
fn config_reports_env_source_for_env_backed_values() {
    with_env(&[("REPDESK_BACKEND_BASE_URL", "http://10.0.0.1:8000")], || {
        let output = config::run(LoadOptions::default());

        assert!(output.contains("- backend.base_url = http://10.0.0.1:8000"));
        assert!(output.contains("env (REPDESK_BACKEND_BASE_URL)"));
        assert!(output.contains("- logging.level = info (source: default)"));
    });
}

#[test]
fn config_reports_command_line_override_source() {
    with_env(&[], || {
        let output = config::run(options_with_base_url("http://10.0.0.2:8000"));

        assert!(output.contains("- backend.base_url = http://10.0.0.2:8000"));
        assert!(output.contains("command-line override"));
    });
}

#[test]
fn doctor_fails_reachability_against_an_unreachable_backend() {
    with_env(&[], || {
        let result = doctor::run(unreachable_options(), true);

        assert_eq!(result.exit_code, 1, "expected doctor failure code");

        let report = parse_payload(&result.output);
        assert_eq!(report["overall_status"], "fail");
        assert_eq!(report["checks"][0]["name"], "config_validation");
        assert_eq!(report["checks"][0]["status"], "pass");
        assert_eq!(report["checks"][1]["name"], "backend_reachability");
        assert_eq!(report["checks"][1]["status"], "fail");
    });
}

#[test]
fn doctor_skips_reachability_when_configuration_is_invalid() {
    with_env(&[("REPDESK_BACKEND_TIMEOUT_SECS", "0")], || {
        let result = doctor::run(LoadOptions::default(), true);

        assert_eq!(result.exit_code, 1);

        let report = parse_payload(&result.output);
        assert_eq!(report["checks"][0]["status"], "fail");
        assert_eq!(report["checks"][1]["status"], "skipped");
    });
}

fn unreachable_options() -> LoadOptions {
    options_with_base_url(UNREACHABLE_BACKEND)
}

fn options_with_base_url(base_url: &str) -> LoadOptions {
    LoadOptions {
        overrides: ConfigOverrides {
            base_url: Some(base_url.to_string()),
            ..ConfigOverrides::default()
        },
        ..LoadOptions::default()
    }
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "REPDESK_BACKEND_BASE_URL",
        "REPDESK_BACKEND_TIMEOUT_SECS",
        "REPDESK_BACKEND_CONNECT_TIMEOUT_SECS",
        "REPDESK_LOGGING_LEVEL",
        "REPDESK_LOGGING_FORMAT",
        "REPDESK_LOG_LEVEL",
        "REPDESK_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
