//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument <{argument}> for command '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

impl DomainError {
    /// Check if this error was caused by how the CLI was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownCommand(_) | DomainError::MissingArgument { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_display() {
        let error = DomainError::UnknownCommand("deploy".to_string());
        assert_eq!(error.to_string(), "Unknown command: deploy");
    }

    #[test]
    fn test_missing_argument_display() {
        let error = DomainError::MissingArgument {
            command: "generate_ui",
            argument: "prompt",
        };
        assert_eq!(
            error.to_string(),
            "Missing argument <prompt> for command 'generate_ui'"
        );
        assert!(error.is_usage());
    }
}
