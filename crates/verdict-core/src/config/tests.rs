use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_verdict_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("VERDICT_MODEL");
        env::remove_var("VERDICT_CONCURRENCY");
        env::remove_var("VERDICT_SYSTEM_PROMPT");
        env::remove_var("VERDICT_TIMEOUT_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.concurrency, 8);
    assert_eq!(config.timeout, Duration::from_secs(600));
    assert!(config.system_prompt.contains("grader"));
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_verdict_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
}

#[test]
#[serial]
fn test_from_env_custom_model_and_prompt() {
    clear_verdict_env();

    with_env_vars(
        &[
            ("VERDICT_MODEL", "deepseek-chat"),
            ("VERDICT_SYSTEM_PROMPT", "You are a history examiner."),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.model, "deepseek-chat");
            assert_eq!(config.system_prompt, "You are a history examiner.");
        },
    );
}

#[test]
#[serial]
fn test_from_env_custom_concurrency() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_CONCURRENCY", "32")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.concurrency, 32);
    });
}

#[test]
#[serial]
fn test_from_env_zero_concurrency_rejected() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_CONCURRENCY", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConcurrency { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_unparseable_concurrency_rejected() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_CONCURRENCY", "many")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ConcurrencyParseError { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_custom_timeout() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_TIMEOUT_SECS", "120")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.timeout, Duration::from_secs(120));
    });
}

#[test]
#[serial]
fn test_from_env_zero_timeout_rejected() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_TIMEOUT_SECS", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    });
}

#[test]
#[serial]
fn test_empty_env_values_fall_back_to_defaults() {
    clear_verdict_env();

    with_env_vars(&[("VERDICT_MODEL", "  ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.model, DEFAULT_MODEL);
    });
}

#[test]
fn test_validate_rejects_oversized_concurrency() {
    let config = Config {
        concurrency: 5000,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConcurrency { .. }));
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidConcurrency {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("invalid concurrency"));
    assert!(err.to_string().contains("1 and 1000"));

    let err = ConfigError::InvalidTimeout {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("at least 1 second"));
}
