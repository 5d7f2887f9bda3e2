//! Tests for the logging configuration and panel-value redaction.

use padm_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, redact_value};

#[test]
fn values_are_redacted_until_explicitly_enabled() {
    // Panel values are patient data; without --log-data they never reach
    // the log stream.
    assert_eq!(redact_value("18.5"), REDACTED_VALUE);
}

#[test]
fn default_config_is_quiet_and_pretty() {
    let config = LogConfig::default();
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.log_data);
    assert!(config.log_file.is_none());
    assert!(!config.with_timestamps);
}
