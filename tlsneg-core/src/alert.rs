//! Alert reporting.
//!
//! The negotiation core does not send or receive alerts itself; the record
//! layer reports them here so they end up in the log at a level that matches
//! their severity.

use crate::error::AlertDescription;
use tracing::Level;

/// Alert level (RFC 5246 Section 7.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertLevel {
    /// Warning (1)
    Warning = 1,

    /// Fatal (2)
    Fatal = 2,
}

impl AlertLevel {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(AlertLevel::Warning),
            2 => Some(AlertLevel::Fatal),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Registry name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            AlertLevel::Warning => "warning",
            AlertLevel::Fatal => "fatal",
        }
    }
}

/// A TLS alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Alert level
    pub level: AlertLevel,

    /// Alert description
    pub description: AlertDescription,
}

impl Alert {
    /// Create a new alert.
    pub const fn new(level: AlertLevel, description: AlertDescription) -> Self {
        Self { level, description }
    }

    /// Create a fatal alert.
    pub const fn fatal(description: AlertDescription) -> Self {
        Self::new(AlertLevel::Fatal, description)
    }

    /// Create a warning alert.
    pub const fn warning(description: AlertDescription) -> Self {
        Self::new(AlertLevel::Warning, description)
    }

    /// Log level for an alert this endpoint raised.
    ///
    /// Warnings are routine, an `internal_error` points at a local fault, and
    /// every other fatal alert is a normal negotiation outcome.
    pub fn raised_log_level(&self) -> Level {
        match (self.level, self.description) {
            (AlertLevel::Warning, _) => Level::DEBUG,
            (_, AlertDescription::InternalError) => Level::WARN,
            _ => Level::INFO,
        }
    }

    /// Log level for an alert received from the peer.
    pub fn received_log_level(&self) -> Level {
        match self.level {
            AlertLevel::Warning => Level::DEBUG,
            AlertLevel::Fatal => Level::INFO,
        }
    }
}

/// Log an alert this endpoint is about to send.
pub fn log_alert_raised(alert: Alert, message: Option<&str>, cause: Option<&dyn std::error::Error>) {
    let text = format!(
        "server raised {} {} alert",
        alert.level.name(),
        alert.description.name()
    );
    let detail = message.unwrap_or("");
    let cause = cause.map(ToString::to_string).unwrap_or_default();
    emit(alert.raised_log_level(), &text, detail, &cause);
}

/// Log an alert received from the client.
pub fn log_alert_received(alert: Alert) {
    let text = format!(
        "server received {} {} alert",
        alert.level.name(),
        alert.description.name()
    );
    emit(alert.received_log_level(), &text, "", "");
}

fn emit(level: Level, text: &str, detail: &str, cause: &str) {
    if level == Level::WARN {
        tracing::warn!(detail, cause, "{}", text);
    } else if level == Level::INFO {
        tracing::info!(detail, cause, "{}", text);
    } else {
        tracing::debug!(detail, cause, "{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_levels() {
        assert_eq!(
            Alert::warning(AlertDescription::CloseNotify).raised_log_level(),
            Level::DEBUG
        );
        assert_eq!(
            Alert::fatal(AlertDescription::InternalError).raised_log_level(),
            Level::WARN
        );
        assert_eq!(
            Alert::fatal(AlertDescription::HandshakeFailure).raised_log_level(),
            Level::INFO
        );
    }

    #[test]
    fn test_received_levels() {
        assert_eq!(
            Alert::warning(AlertDescription::NoRenegotiation).received_log_level(),
            Level::DEBUG
        );
        assert_eq!(
            Alert::fatal(AlertDescription::InternalError).received_log_level(),
            Level::INFO
        );
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(AlertLevel::from_u8(2), Some(AlertLevel::Fatal));
        assert_eq!(AlertLevel::Warning.to_u8(), 1);
        assert_eq!(AlertLevel::from_u8(3), None);
    }
}
