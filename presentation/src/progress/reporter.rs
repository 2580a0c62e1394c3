//! Spinner shown on stderr during credential refresh and the tool call

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use stitch_application::InvocationProgress;
use stitch_domain::ToolInvocationResult;
use std::time::Duration;

/// Reports progress with a single spinner line.
///
/// Drawn to stderr so stdout carries only the JSON payload; indicatif hides
/// it when stderr is not a terminal.
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationProgress for SpinnerProgress {
    fn on_auth_start(&self) {
        self.bar.set_message("Refreshing credentials...");
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_call_start(&self, tool_name: &str) {
        self.bar
            .set_message(format!("Calling {}...", tool_name.cyan().bold()));
    }

    fn on_call_complete(&self, _result: &ToolInvocationResult) {
        self.bar.finish_and_clear();
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        // auth failures never reach on_call_complete
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn completing_a_call_finishes_the_spinner() {
        let progress = SpinnerProgress::new();
        progress.on_auth_start();
        progress.on_call_start("list_projects");
        progress.on_call_complete(&ToolInvocationResult::Success(Value::Null));
        assert!(progress.bar.is_finished());
    }
}
