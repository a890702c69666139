//! Integration tests for logging system

use bridge_traits::log::LogLevel;
use core_runtime::logging::{mask_card_number, redact_if_sensitive, LogFormat, LoggingConfig};

#[test]
fn test_logging_configuration() {
    // Logging can only be initialized once per process, so only the config
    // builder is exercised here.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug)
        .with_pii_redaction(true)
        .with_spans(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Debug);
    assert!(config.redact_pii);
    assert!(config.enable_spans);
    assert!(config.logger_sink.is_none());
}

#[test]
fn test_card_fields_redacted() {
    for field in ["number", "cardNumber", "card_number", "cvc", "fingerprint"] {
        assert_eq!(redact_if_sensitive(field, "4242"), "[REDACTED]", "{field}");
    }
}

#[test]
fn test_bank_fields_redacted() {
    for field in ["accountNumber", "routingNumber", "iban"] {
        assert_eq!(
            redact_if_sensitive(field, "DE89370400440532013000"),
            "[REDACTED]",
            "{field}"
        );
    }
}

#[test]
fn test_credentials_redacted() {
    assert_eq!(redact_if_sensitive("publishableKey", "pk_live_123"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("tokenId", "tok_123"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("client_secret", "src_secret"), "[REDACTED]");
}

#[test]
fn test_emails_partially_redacted() {
    let redacted = redact_if_sensitive("email", "jenny.rosen@example.com");

    assert!(redacted.starts_with('j'));
    assert!(redacted.contains("[REDACTED]"));
    assert!(!redacted.contains("example.com"));
}

#[test]
fn test_non_ascii_emails_partially_redacted() {
    let redacted = redact_if_sensitive("receipt_email", "Ørjan@example.no");

    assert_eq!(redacted, "Ø***@[REDACTED]");
}

#[test]
fn test_non_sensitive_values_pass_through() {
    assert_eq!(redact_if_sensitive("currency", "usd"), "usd");
    assert_eq!(redact_if_sensitive("method", "Stripe.setOptions"), "Stripe.setOptions");
    assert_eq!(redact_if_sensitive("platform", "android"), "android");
}

#[test]
fn test_masked_card_number_keeps_last_four() {
    assert_eq!(mask_card_number("5555 5555 5555 4444"), "**** 4444");
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_pii_redaction(false)
        .with_spans(false)
        .with_filter("core_service=trace");

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.redact_pii);
    assert!(!config.enable_spans);
    assert_eq!(config.filter.as_deref(), Some("core_service=trace"));
}
