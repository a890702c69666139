//! # Logging & Tracing Infrastructure
//!
//! Provides structured logging with `tracing` crate, supporting:
//! - JSON and pretty-print output formats
//! - Module-level filtering
//! - Redaction of card data, bank details and credentials
//! - Integration with host logging via `LoggerSink`
//!
//! ## Overview
//!
//! This module configures the `tracing-subscriber` infrastructure. When a
//! sink is configured, every event that survives filtering is mirrored to the
//! host logger (OSLog / Logcat) while still flowing through the standard
//! `tracing` layers.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{LoggingConfig, LogFormat, init_logging};
//! use bridge_traits::log::{ConsoleLogger, LogLevel};
//! use std::sync::Arc;
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Pretty)
//!     .with_level(LogLevel::Debug)
//!     .with_logger_sink(Arc::new(ConsoleLogger::default()));
//!
//! init_logging(config).expect("Failed to initialize logging");
//!
//! tracing::info!("Payments ready");
//! ```

use crate::error::{Error, Result};

use bridge_traits::log::{LogEntry, LogLevel, LoggerSink};

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter,
    fmt::format::FmtSpan,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Minimum level for the workspace crates
    pub level: LogLevel,
    /// Redact card, bank and credential values before they reach the host sink
    pub redact_pii: bool,
    /// Custom filter string (e.g., "core_service=debug,bridge_traits=trace")
    pub filter: Option<String>,
    /// Mirror of every event into OSLog / Logcat
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Emit span enter/exit events for facade operations
    pub enable_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            redact_pii: true,
            filter: None,
            logger_sink: None,
            enable_spans: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Turning redaction off is meant for local debugging against test keys.
    pub fn with_pii_redaction(mut self, redact: bool) -> Self {
        self.redact_pii = redact;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    pub fn with_spans(mut self, enable: bool) -> Self {
        self.enable_spans = enable;
        self
    }
}

/// Crates whose events the default filter lets through at the configured level.
const WORKSPACE_TARGETS: &[&str] = &[
    "native_pay_workspace",
    "core_runtime",
    "core_service",
    "bridge_traits",
];

/// Install the global `tracing` subscriber.
///
/// Call once at host startup, before the first `PaymentService` is built.
///
/// # Errors
///
/// Returns [`Error::Config`] if a subscriber is already installed or the
/// filter directive does not parse.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let sink_layer = LoggerSinkLayer::new(config.logger_sink.clone(), config.redact_pii);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(&config))
        .with(sink_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directive = match &config.filter {
        Some(custom) => custom.clone(),
        None => {
            // Workspace crates at the configured level, dependencies at warn
            let level = level_directive(config.level);
            std::iter::once("warn".to_string())
                .chain(
                    WORKSPACE_TARGETS
                        .iter()
                        .map(|target| format!("{}={}", target, level)),
                )
                .collect::<Vec<_>>()
                .join(",")
        }
    };

    EnvFilter::try_new(directive).map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

fn fmt_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let span_events = if config.enable_spans {
        FmtSpan::ACTIVE
    } else {
        FmtSpan::NONE
    };
    let layer = tracing_subscriber::fmt::layer().with_writer(io::stdout);

    match config.format {
        LogFormat::Pretty => layer.pretty().with_span_events(span_events).boxed(),
        LogFormat::Compact => layer.compact().with_span_events(span_events).boxed(),
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(config.enable_spans)
            .with_span_list(config.enable_spans)
            .boxed(),
    }
}

/// Layer that forwards events to a `LoggerSink` implementation.
///
/// With redaction on, every field value passes through
/// [`redact_if_sensitive`] before the entry is built.
struct LoggerSinkLayer {
    sink: Option<Arc<dyn LoggerSink>>,
    redact: bool,
}

impl LoggerSinkLayer {
    fn new(sink: Option<Arc<dyn LoggerSink>>, redact: bool) -> Self {
        Self { sink, redact }
    }
}

impl<S> Layer<S> for LoggerSinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };

        let metadata = event.metadata();
        let level = tracing_level_to_log_level(*metadata.level());

        if level < sink.min_level() {
            return;
        }

        let mut visitor = SinkVisitor::default();
        event.record(&mut visitor);

        let message = visitor
            .message
            .unwrap_or_else(|| metadata.name().to_string());

        let mut entry = LogEntry::new(level, metadata.target(), message);

        for (key, value) in visitor.fields {
            let value = if self.redact {
                redact_if_sensitive(&key, &value)
            } else {
                value
            };
            entry = entry.with_field(key, value);
        }

        if let Some(span) = ctx.lookup_current() {
            entry.span_id = Some(span.name().to_string());
        }

        let sink = Arc::clone(sink);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if let Err(err) = sink.log(entry).await {
                    eprintln!("LoggerSink error: {}", err);
                }
            });
            return;
        }

        if let Err(err) = futures::executor::block_on(async move { sink.log(entry).await }) {
            eprintln!("LoggerSink error: {}", err);
        }
    }
}

#[derive(Default)]
struct SinkVisitor {
    message: Option<String>,
    fields: HashMap<String, String>,
}

impl SinkVisitor {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for SinkVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }
}

fn tracing_level_to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE => LogLevel::Trace,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::ERROR => LogLevel::Error,
    }
}

/// Field-name fragments whose values never leave the process.
const SENSITIVE_FIELDS: &[&str] = &[
    "number",
    "cvc",
    "iban",
    "routing",
    "fingerprint",
    "token",
    "secret",
    "password",
    "key",
    "authorization",
];

fn is_sensitive_field(field_name: &str) -> bool {
    let normalized: String = field_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    SENSITIVE_FIELDS
        .iter()
        .any(|fragment| normalized.contains(fragment))
}

/// Redact a field value before it is mirrored to the host logger.
///
/// Field names are compared case-insensitively with separators removed, so
/// `card_number`, `cardNumber` and `CARD-NUMBER` are all caught. Email-like
/// values keep their first character only.
///
/// ```ignore
/// use tracing::debug;
/// use core_runtime::logging::redact_if_sensitive;
///
/// debug!(iban = %redact_if_sensitive("iban", iban), "Creating SEPA source");
/// ```
pub fn redact_if_sensitive(field_name: &str, value: &str) -> String {
    if is_sensitive_field(field_name) {
        return "[REDACTED]".to_string();
    }

    match value.split_once('@') {
        Some((local, domain)) if domain.contains('.') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@[REDACTED]", first)
        }
        _ => value.to_string(),
    }
}

/// Mask a primary account number down to its last four digits.
///
/// Non-digit characters (spaces, dashes) are ignored. Numbers with four or
/// fewer digits are fully masked.
///
/// ```ignore
/// use core_runtime::logging::mask_card_number;
///
/// assert_eq!(mask_card_number("4242 4242 4242 4242"), "**** 4242");
/// ```
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() <= 4 {
        return "****".to_string();
    }

    let last4: String = digits[digits.len() - 4..].iter().collect();
    format!("**** {}", last4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as SinkResult;
    use std::sync::Mutex;

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_level(LogLevel::Debug)
            .with_pii_redaction(true)
            .with_filter("core_service=trace")
            .with_spans(false);

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.redact_pii);
        assert_eq!(config.filter, Some("core_service=trace".to_string()));
        assert!(!config.enable_spans);
    }

    #[test]
    fn test_redact_if_sensitive() {
        assert_eq!(redact_if_sensitive("number", "4242424242424242"), "[REDACTED]");
        assert_eq!(redact_if_sensitive("cvc", "123"), "[REDACTED]");
        assert_eq!(redact_if_sensitive("accountNumber", "000123456789"), "[REDACTED]");
        assert_eq!(redact_if_sensitive("publishable_key", "pk_test"), "[REDACTED]");

        let redacted = redact_if_sensitive("email", "user@example.com");
        assert!(redacted.starts_with('u'));
        assert!(redacted.contains("[REDACTED]"));

        assert_eq!(redact_if_sensitive("method", "Stripe.setOptions"), "Stripe.setOptions");
        assert_eq!(redact_if_sensitive("platform", "ios"), "ios");
    }

    #[test]
    fn test_redact_email_with_multibyte_first_char() {
        assert_eq!(
            redact_if_sensitive("email", "élodie@example.fr"),
            "é***@[REDACTED]"
        );
        assert_eq!(
            redact_if_sensitive("email", "山田@example.jp"),
            "山***@[REDACTED]"
        );
        assert_eq!(redact_if_sensitive("email", "@example.com"), "***@[REDACTED]");
    }

    #[test]
    fn test_dotless_at_sign_not_treated_as_email() {
        assert_eq!(redact_if_sensitive("handle", "@stripe"), "@stripe");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4242424242424242"), "**** 4242");
        assert_eq!(mask_card_number("4000-0566-5566-5556"), "**** 5556");
        assert_eq!(mask_card_number("123"), "****");
        assert_eq!(mask_card_number(""), "****");
    }

    #[test]
    fn test_default_format() {
        #[cfg(debug_assertions)]
        assert_eq!(LogFormat::default(), LogFormat::Pretty);

        #[cfg(not(debug_assertions))]
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn test_build_filter() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        let filter = build_filter(&config).unwrap().to_string();

        for target in WORKSPACE_TARGETS {
            assert!(filter.contains(&format!("{}=debug", target)), "{target}");
        }
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let config = LoggingConfig::default().with_filter("core_service=notalevel");
        assert!(matches!(build_filter(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_custom_filter() {
        let config = LoggingConfig::default().with_filter("core_service=trace,bridge_traits=debug");
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("core_service=trace"));
    }

    #[test]
    fn test_logger_sink_layer_forwards_event() {
        let sink = Arc::new(TestLoggerSink::default());
        let trait_sink: Arc<dyn LoggerSink> = sink.clone();
        let layer = LoggerSinkLayer::new(Some(trait_sink), false);
        let subscriber = tracing_subscriber::registry().with(layer);
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::info!(target: "test.target", method = "Stripe.setOptions", "forwarding");

        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.target, "test.target");
        assert_eq!(entry.message, "forwarding");
        assert_eq!(
            entry.fields.get("method"),
            Some(&"Stripe.setOptions".to_string())
        );
    }

    #[test]
    fn test_logger_sink_layer_redacts_fields() {
        let sink = Arc::new(TestLoggerSink::default());
        let trait_sink: Arc<dyn LoggerSink> = sink.clone();
        let layer = LoggerSinkLayer::new(Some(trait_sink), true);
        let subscriber = tracing_subscriber::registry().with(layer);
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::warn!(card_number = "4242424242424242", method = "Stripe.createTokenWithCard", "rejected");

        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].fields.get("card_number"),
            Some(&"[REDACTED]".to_string())
        );
        assert_eq!(
            entries[0].fields.get("method"),
            Some(&"Stripe.createTokenWithCard".to_string())
        );
    }

    #[derive(Default)]
    struct TestLoggerSink {
        entries: Mutex<Vec<LogEntry>>,
    }

    #[async_trait]
    impl LoggerSink for TestLoggerSink {
        async fn log(&self, entry: LogEntry) -> SinkResult<()> {
            let mut entries = self.entries.lock().unwrap();
            entries.push(entry);
            Ok(())
        }

        fn min_level(&self) -> LogLevel {
            LogLevel::Trace
        }
    }
}
