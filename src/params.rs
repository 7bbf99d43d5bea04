//! Typed tool parameters, coerced from the raw `tools/call` arguments.
//!
//! The clamping and defaulting rules live here as pure functions so they can
//! be tested without any networking.

use crate::error::DispatchError;
use serde_json::Value;

pub const DEFAULT_LOG_COUNT: i64 = 100;
pub const MIN_LOG_COUNT: i64 = 1;
/// Hard contract: the backend never receives a count above this.
pub const MAX_LOG_COUNT: i64 = 1000;

/// Minimum log level accepted by the `/api/logs` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Critical,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warning" => Some(LogLevel::Warning),
            "critical" => Some(LogLevel::Critical),
            _ => None,
        }
    }
}

/// Validated parameters for `get_logs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogsQuery {
    pub count: i64,
    pub level: LogLevel,
    /// `None` means "no filter"; an empty string argument collapses to this.
    pub category: Option<String>,
}

impl Default for LogsQuery {
    fn default() -> Self {
        Self { count: DEFAULT_LOG_COUNT, level: LogLevel::Info, category: None }
    }
}

impl LogsQuery {
    /// Coerce raw arguments, applying defaults and the count ceiling.
    /// Out-of-range counts are silently clamped, never rejected.
    pub fn from_arguments(arguments: &Value) -> Self {
        let count = arguments
            .get("count")
            .and_then(Value::as_i64)
            .map(clamp_count)
            .unwrap_or(DEFAULT_LOG_COUNT);
        let level = arguments
            .get("level")
            .and_then(Value::as_str)
            .and_then(LogLevel::parse)
            .unwrap_or_default();
        let category = arguments
            .get("category")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        Self { count, level, category }
    }

    /// Query parameters for the outgoing request. Count and level are always
    /// present; an absent category is omitted entirely.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query =
            vec![("count", self.count.to_string()), ("level", self.level.as_str().to_string())];
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        query
    }
}

pub fn clamp_count(count: i64) -> i64 {
    count.clamp(MIN_LOG_COUNT, MAX_LOG_COUNT)
}

/// Validated parameters for `screenshot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotParams {
    pub window: String,
}

impl ScreenshotParams {
    /// A missing or empty `window` fails before any backend call is made.
    pub fn from_arguments(arguments: &Value) -> Result<Self, DispatchError> {
        match arguments.get("window").and_then(Value::as_str) {
            Some(window) if !window.is_empty() => Ok(Self { window: window.to_string() }),
            _ => Err(DispatchError::InvalidArgument(
                "'window' parameter is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_is_clamped_to_ceiling() {
        assert_eq!(clamp_count(5000), MAX_LOG_COUNT);
        assert_eq!(clamp_count(1000), 1000);
        assert_eq!(clamp_count(999), 999);
        assert_eq!(clamp_count(0), MIN_LOG_COUNT);
        assert_eq!(clamp_count(-7), MIN_LOG_COUNT);
    }

    #[test]
    fn defaults_apply_when_arguments_absent() {
        let query = LogsQuery::from_arguments(&json!({}));
        assert_eq!(query, LogsQuery::default());
        assert_eq!(
            query.to_query(),
            vec![("count", "100".to_string()), ("level", "info".to_string())]
        );
    }

    #[test]
    fn oversized_count_becomes_the_ceiling() {
        let query = LogsQuery::from_arguments(&json!({"count": 5000}));
        assert_eq!(query.count, 1000);
    }

    #[test]
    fn non_integer_count_falls_back_to_default() {
        let query = LogsQuery::from_arguments(&json!({"count": "lots"}));
        assert_eq!(query.count, DEFAULT_LOG_COUNT);
    }

    #[test]
    fn empty_category_means_no_filter() {
        let query = LogsQuery::from_arguments(&json!({"category": ""}));
        assert_eq!(query.category, None);
        assert!(query.to_query().iter().all(|(key, _)| *key != "category"));
    }

    #[test]
    fn category_is_forwarded_when_present() {
        let query = LogsQuery::from_arguments(&json!({"category": "devdash.broker"}));
        assert_eq!(query.category.as_deref(), Some("devdash.broker"));
        assert!(query
            .to_query()
            .contains(&("category", "devdash.broker".to_string())));
    }

    #[test]
    fn unrecognized_level_falls_back_to_info() {
        let query = LogsQuery::from_arguments(&json!({"level": "verbose"}));
        assert_eq!(query.level, LogLevel::Info);
    }

    #[test]
    fn declared_levels_parse() {
        for (name, level) in [
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warning", LogLevel::Warning),
            ("critical", LogLevel::Critical),
        ] {
            assert_eq!(LogLevel::parse(name), Some(level));
            assert_eq!(level.as_str(), name);
        }
    }

    #[test]
    fn screenshot_requires_a_window() {
        assert!(ScreenshotParams::from_arguments(&json!({})).is_err());
        assert!(ScreenshotParams::from_arguments(&json!({"window": ""})).is_err());
        assert!(ScreenshotParams::from_arguments(&json!({"window": 42})).is_err());

        let params = ScreenshotParams::from_arguments(&json!({"window": "cluster"})).unwrap();
        assert_eq!(params.window, "cluster");
    }

    #[test]
    fn missing_window_message_is_exact() {
        let err = ScreenshotParams::from_arguments(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Error: 'window' parameter is required");
    }
}
