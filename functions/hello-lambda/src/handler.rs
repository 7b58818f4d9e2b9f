use chrono::{DateTime, SecondsFormat, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub const GREETING: &str = "Hello from Lambda!";

#[cfg(feature = "version-marker")]
pub const VERSION_MARKER: Option<&str> = Some("version: 3");
#[cfg(not(feature = "version-marker"))]
pub const VERSION_MARKER: Option<&str> = None;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub timestamp: String,
}

/// Millisecond precision with a `Z` suffix, e.g. `2026-10-16T09:30:00.123Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn event_log_line(event: &Value) -> Result<String, serde_json::Error> {
    Ok(format!("Event: {}", serde_json::to_string_pretty(event)?))
}

pub fn build_response(now: DateTime<Utc>) -> Result<Response, serde_json::Error> {
    let greeting = Greeting {
        message: GREETING.to_string(),
        timestamp: iso_timestamp(now),
    };

    Ok(Response {
        status_code: 200,
        body: serde_json::to_string(&greeting)?,
    })
}

pub(crate) async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    info!("{}", event_log_line(&event.payload)?);
    if let Some(marker) = VERSION_MARKER {
        info!("{}", marker);
    }

    let response = build_response(Utc::now())?;

    Ok(response)
}
