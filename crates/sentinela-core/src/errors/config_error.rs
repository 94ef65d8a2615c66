use crate::models::ConfigIssue;

/// Configuration errors. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config validation failed with {} issue(s): {}", .issues.len(), join_issues(.issues))]
    ValidationFailed { issues: Vec<ConfigIssue> },

    #[error("unknown configuration profile: {name}")]
    UnknownProfile { name: String },
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
