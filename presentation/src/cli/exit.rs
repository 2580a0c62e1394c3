//! Outcome rendering and exit statuses

use crate::output::console::ConsoleFormatter;
use serde_json::Value;
use stitch_application::InvokeError;

/// Configuration or startup failure
pub const EXIT_CONFIG: u8 = 1;
/// Malformed invocation
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_AUTH: u8 = 3;
pub const EXIT_NETWORK: u8 = 4;
pub const EXIT_TRANSPORT: u8 = 5;
pub const EXIT_PROTOCOL: u8 = 6;

/// Exit status for a failed call, one per tier
pub fn exit_code(error: &InvokeError) -> u8 {
    match error {
        InvokeError::Usage(_) => EXIT_USAGE,
        InvokeError::Auth(_) => EXIT_AUTH,
        InvokeError::Network { .. } => EXIT_NETWORK,
        InvokeError::Transport { .. } => EXIT_TRANSPORT,
        InvokeError::Protocol { .. } => EXIT_PROTOCOL,
    }
}

/// What a finished dispatch prints and returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub code: u8,
}

/// Render a dispatch outcome. Only success produces structured output.
pub fn render(outcome: &Result<Value, InvokeError>) -> Rendered {
    match outcome {
        Ok(payload) => Rendered {
            stdout: Some(ConsoleFormatter::format_payload(payload)),
            stderr: None,
            code: 0,
        },
        Err(error) => Rendered {
            stdout: None,
            stderr: Some(ConsoleFormatter::format_error(error)),
            code: exit_code(error),
        },
    }
}

/// Print a dispatch outcome and return the process exit status
pub fn report(outcome: &Result<Value, InvokeError>) -> u8 {
    let rendered = render(outcome);
    if let Some(out) = &rendered.stdout {
        println!("{}", out);
    }
    if let Some(err) = &rendered.stderr {
        eprintln!("{}", err);
    }
    rendered.code
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stitch_domain::DomainError;

    #[test]
    fn success_prints_payload_and_exits_zero() {
        let rendered = render(&Ok(json!({"projects": []})));
        assert_eq!(rendered.code, 0);
        assert!(rendered.stderr.is_none());
        assert_eq!(rendered.stdout.as_deref(), Some("{\n  \"projects\": []\n}"));
    }

    #[test]
    fn failures_emit_no_structured_output() {
        let rendered = render(&Err(InvokeError::Network {
            cause: "request timed out after 180s".to_string(),
        }));
        assert!(rendered.stdout.is_none());
        assert_eq!(rendered.code, EXIT_NETWORK);
        assert!(rendered.stderr.unwrap().contains("timed out"));
    }

    #[test]
    fn every_tier_has_a_distinct_non_zero_code() {
        let errors = [
            InvokeError::Usage(DomainError::UnknownCommand("x".into())),
            InvokeError::Auth(stitch_application::AuthError::RequestFailed("x".into())),
            InvokeError::Network { cause: "x".into() },
            InvokeError::Transport {
                status: 500,
                body: "x".into(),
            },
            InvokeError::Protocol {
                code: 1,
                message: "x".into(),
            },
        ];
        let mut codes: Vec<u8> = errors.iter().map(exit_code).collect();
        assert!(codes.iter().all(|c| *c != 0 && *c != EXIT_CONFIG));
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }
}
