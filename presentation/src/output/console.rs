//! Console output formatter for tool results

use colored::Colorize;
use serde_json::Value;
use stitch_application::InvokeError;
use stitch_domain::COMMANDS;

/// Formats payloads and diagnostics for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Pretty JSON for a successful payload
    pub fn format_payload(payload: &Value) -> String {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
    }

    /// Human-readable diagnostic for a failed call
    pub fn format_error(error: &InvokeError) -> String {
        let label = match error {
            InvokeError::Protocol { .. } => "RPC Error:",
            _ => "Error:",
        };
        let mut output = format!("{} {}", label.red().bold(), error);

        match error {
            InvokeError::Usage(_) => {
                output.push_str("\n\n");
                output.push_str(&Self::usage());
            }
            InvokeError::Auth(_) => {
                output.push_str(&format!(
                    "\n{} run `gcloud auth application-default login` or set GOOGLE_APPLICATION_CREDENTIALS",
                    "Hint:".yellow().bold()
                ));
            }
            _ => {}
        }
        output
    }

    /// Usage text listing every command
    pub fn usage() -> String {
        let mut output = String::from("Usage: invoke [OPTIONS] <COMMAND> [ARGS]...\n\nCommands:\n");
        let width = COMMANDS
            .iter()
            .map(|spec| Self::signature(spec.name, spec.synopsis).len())
            .max()
            .unwrap_or(0);
        for spec in &COMMANDS {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                Self::signature(spec.name, spec.synopsis),
                spec.summary,
                width = width
            ));
        }
        output
    }

    fn signature(name: &str, synopsis: &str) -> String {
        if synopsis.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, synopsis)
        }
    }
}
