//! Command dispatch use case.
//!
//! Resolves a CLI command against the static command table and runs the
//! resulting tool call. Usage errors are raised before credentials or the
//! network are touched.

use super::invoke_tool::{InvokeError, InvokeToolUseCase};
use crate::ports::progress::InvocationProgress;
use serde_json::{Map, Value};
use stitch_domain::{CommandSpec, DomainError};
use tracing::debug;

/// A command checked against the table, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    tool_name: &'static str,
    arguments: Map<String, Value>,
}

impl PreparedCall {
    pub fn tool_name(&self) -> &'static str {
        self.tool_name
    }

    pub fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }
}

/// Maps named commands to tool invocations
pub struct CommandDispatcher {
    invoke: InvokeToolUseCase,
}

impl CommandDispatcher {
    pub fn new(invoke: InvokeToolUseCase) -> Self {
        Self { invoke }
    }

    /// Resolve `command` and its positional arguments.
    ///
    /// Needs no configuration, credentials or network, so callers can report
    /// usage errors before any of those are set up.
    pub fn prepare(command: &str, positional: &[String]) -> Result<PreparedCall, DomainError> {
        let spec = CommandSpec::find(command)
            .ok_or_else(|| DomainError::UnknownCommand(command.to_string()))?;
        let arguments = spec.arguments(positional)?;

        if positional.len() > spec.max_positional() {
            debug!(
                "Ignoring {} extra argument(s) for {}",
                positional.len() - spec.max_positional(),
                spec.name
            );
        }

        Ok(PreparedCall {
            tool_name: spec.tool_name,
            arguments,
        })
    }

    /// Dispatch `command` with its positional arguments
    pub async fn dispatch(
        &self,
        command: &str,
        positional: &[String],
        progress: &dyn InvocationProgress,
    ) -> Result<Value, InvokeError> {
        let call = Self::prepare(command, positional)?;
        self.run(call, progress).await
    }

    /// Send an already prepared call
    pub async fn run(
        &self,
        call: PreparedCall,
        progress: &dyn InvocationProgress,
    ) -> Result<Value, InvokeError> {
        self.invoke
            .execute(call.tool_name, call.arguments, progress)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::credential_provider::{AuthError, CredentialProvider};
    use crate::ports::tool_transport::ToolTransport;
    use crate::NoInvocationProgress;
    use async_trait::async_trait;
    use serde_json::json;
    use stitch_domain::{AuthHeaders, Credential, ToolInvocationRequest, ToolInvocationResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // === Mock implementations ===

    #[derive(Default)]
    struct CountingCredentials {
        refreshes: AtomicUsize,
    }

    #[async_trait]
    impl CredentialProvider for CountingCredentials {
        async fn refresh(&self) -> Result<Credential, AuthError> {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
            Ok(Credential::new("tok", "quota"))
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<ToolInvocationRequest>>,
    }

    #[async_trait]
    impl ToolTransport for RecordingTransport {
        async fn send(
            &self,
            request: &ToolInvocationRequest,
            _headers: &AuthHeaders,
        ) -> ToolInvocationResult {
            self.requests.lock().unwrap().push(request.clone());
            ToolInvocationResult::Success(json!({"ok": true}))
        }
    }

    fn dispatcher() -> (
        CommandDispatcher,
        Arc<CountingCredentials>,
        Arc<RecordingTransport>,
    ) {
        let credentials = Arc::new(CountingCredentials::default());
        let transport = Arc::new(RecordingTransport::default());
        let invoke = InvokeToolUseCase::new(credentials.clone(), transport.clone());
        (CommandDispatcher::new(invoke), credentials, transport)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn generate_ui_missing_prompt_makes_no_calls() {
        let (dispatcher, credentials, transport) = dispatcher();

        let err = dispatcher
            .dispatch("generate_ui", &args(&["p1"]), &NoInvocationProgress)
            .await
            .unwrap_err();

        assert!(err.is_usage());
        assert_eq!(credentials.refreshes.load(Ordering::SeqCst), 0);
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_command_makes_no_calls() {
        let (dispatcher, credentials, transport) = dispatcher();

        let err = dispatcher
            .dispatch("deploy", &[], &NoInvocationProgress)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InvokeError::Usage(DomainError::UnknownCommand(_))
        ));
        assert_eq!(credentials.refreshes.load(Ordering::SeqCst), 0);
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_projects_issues_exactly_one_call() {
        let (dispatcher, credentials, transport) = dispatcher();

        let payload = dispatcher
            .dispatch("list_projects", &[], &NoInvocationProgress)
            .await
            .unwrap();

        assert_eq!(payload, json!({"ok": true}));
        assert_eq!(credentials.refreshes.load(Ordering::SeqCst), 1);
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tool_name(), "list_projects");
        assert!(requests[0].arguments().is_empty());
    }

    #[tokio::test]
    async fn generate_ui_calls_screen_tool() {
        let (dispatcher, _, transport) = dispatcher();

        dispatcher
            .dispatch(
                "generate_ui",
                &args(&["p1", "Onboarding flow"]),
                &NoInvocationProgress,
            )
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].tool_name(), "generate_screen_from_text");
        assert_eq!(
            Value::Object(requests[0].arguments().clone()),
            json!({
                "projectId": "p1",
                "prompt": "Onboarding flow",
                "deviceType": "MOBILE",
                "modelId": "GEMINI_3_PRO"
            })
        );
    }

    #[tokio::test]
    async fn create_project_defaults_title() {
        let (dispatcher, _, transport) = dispatcher();

        dispatcher
            .dispatch("create_project", &[], &NoInvocationProgress)
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].arguments()["title"], "New Project");
    }

    #[test]
    fn prepare_resolves_without_any_dependencies() {
        let call = CommandDispatcher::prepare("generate_ui", &args(&["p1", "Login"])).unwrap();
        assert_eq!(call.tool_name(), "generate_screen_from_text");
        assert_eq!(call.arguments()["projectId"], "p1");

        assert!(matches!(
            CommandDispatcher::prepare("frobnicate", &[]),
            Err(DomainError::UnknownCommand(ref name)) if name == "frobnicate"
        ));
        assert!(matches!(
            CommandDispatcher::prepare("generate_ui", &args(&["p1"])),
            Err(DomainError::MissingArgument { .. })
        ));
    }

    #[tokio::test]
    async fn run_sends_prepared_call() {
        let (dispatcher, credentials, transport) = dispatcher();
        let call = CommandDispatcher::prepare("create_project", &args(&["Tracker"])).unwrap();

        dispatcher.run(call, &NoInvocationProgress).await.unwrap();

        assert_eq!(credentials.refreshes.load(Ordering::SeqCst), 1);
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].tool_name(), "create_project");
        assert_eq!(requests[0].arguments()["title"], "Tracker");
    }
}
