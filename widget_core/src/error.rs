//! Error types for the greeting widget

use thiserror::Error;

/// Errors raised while configuring or attaching the widget
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Config JSON could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A required element is absent from the host document
    #[error("Missing {role} element: #{id}")]
    MissingElement { role: &'static str, id: String },

    /// Host environment call failed (no window, DOM call rejected)
    #[error("Host error: {0}")]
    Host(String),

    /// Widget was initialized twice
    #[error("Widget is already running")]
    AlreadyRunning,
}

/// Result type alias using WidgetError
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = WidgetError::MissingElement {
            role: "accept",
            id: "yes-btn".to_string(),
        };
        assert_eq!(err.to_string(), "Missing accept element: #yes-btn");
    }

    #[test]
    fn test_config_errors_display() {
        let err = WidgetError::InvalidConfig("heart_interval_ms must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid config: heart_interval_ms must be positive"
        );
        assert_eq!(
            WidgetError::AlreadyRunning.to_string(),
            "Widget is already running"
        );
    }
}
