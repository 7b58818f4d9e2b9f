use std::env;

use tracing::Level;

pub(crate) const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Log controls Lambda passes to the function through its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `AWS_LAMBDA_LOG_LEVEL` wins over `RUST_LOG`; both are optional.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = match lookup("AWS_LAMBDA_LOG_LEVEL") {
            Some(level) => parse_level(&level)
                .unwrap_or(Level::INFO)
                .to_string()
                .to_ascii_lowercase(),
            None => lookup("RUST_LOG")
                .filter(|directive| !directive.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        };

        let format = match lookup("AWS_LAMBDA_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self { filter, format }
    }
}

fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" => Some(Level::WARN),
        "ERROR" | "FATAL" => Some(Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LogConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_info_text() {
        let config = config_from(&[]);
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn lambda_log_level_overrides_rust_log() {
        let config = config_from(&[("AWS_LAMBDA_LOG_LEVEL", "DEBUG"), ("RUST_LOG", "warn")]);
        assert_eq!(config.filter, "debug");
    }

    #[test]
    fn rust_log_used_when_lambda_level_unset() {
        let config = config_from(&[("RUST_LOG", "hellolambdafunction=trace")]);
        assert_eq!(config.filter, "hellolambdafunction=trace");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = config_from(&[("AWS_LAMBDA_LOG_LEVEL", "chatty")]);
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn json_format_is_case_insensitive() {
        assert_eq!(config_from(&[("AWS_LAMBDA_LOG_FORMAT", "JSON")]).format, LogFormat::Json);
        assert_eq!(config_from(&[("AWS_LAMBDA_LOG_FORMAT", "json")]).format, LogFormat::Json);
        assert_eq!(config_from(&[("AWS_LAMBDA_LOG_FORMAT", "Text")]).format, LogFormat::Text);
    }
}
