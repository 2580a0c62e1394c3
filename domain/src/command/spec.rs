//! Command specifications

use crate::core::error::DomainError;
use serde_json::{Map, Value, json};

/// Title used by `create_project` when none is given.
pub const DEFAULT_PROJECT_TITLE: &str = "New Project";

/// Device type requested for generated screens.
pub const DEVICE_TYPE: &str = "MOBILE";

/// Model used for generated screens.
pub const MODEL_ID: &str = "GEMINI_3_PRO";

type ArgumentRule = fn(&'static str, &[String]) -> Result<Map<String, Value>, DomainError>;

/// A CLI command and the tool it invokes (read-only, defined once)
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command name typed on the command line
    pub name: &'static str,
    /// Remote tool invoked by this command
    pub tool_name: &'static str,
    /// Positional argument synopsis, e.g. `<projectId> <prompt>`
    pub synopsis: &'static str,
    /// One-line description for help output
    pub summary: &'static str,
    rule: ArgumentRule,
}

/// All supported commands.
pub static COMMANDS: [CommandSpec; 3] = [
    CommandSpec {
        name: "create_project",
        tool_name: "create_project",
        synopsis: "[title]",
        summary: "Create a new project (default title: \"New Project\")",
        rule: create_project_arguments,
    },
    CommandSpec {
        name: "generate_ui",
        tool_name: "generate_screen_from_text",
        synopsis: "<projectId> <prompt>",
        summary: "Generate a mobile screen in a project from a text prompt",
        rule: generate_ui_arguments,
    },
    CommandSpec {
        name: "list_projects",
        tool_name: "list_projects",
        synopsis: "",
        summary: "List existing projects",
        rule: no_arguments,
    },
];

impl CommandSpec {
    /// Look up a command by name
    pub fn find(name: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.name == name)
    }

    /// Build the tool arguments from positional CLI arguments
    pub fn arguments(&self, positional: &[String]) -> Result<Map<String, Value>, DomainError> {
        (self.rule)(self.name, positional)
    }

    /// Number of positional arguments this command reads
    pub fn max_positional(&self) -> usize {
        self.synopsis.split_whitespace().count()
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    positional: &'a [String],
    index: usize,
) -> Result<&'a str, DomainError> {
    positional
        .get(index)
        .map(String::as_str)
        .ok_or(DomainError::MissingArgument { command, argument })
}

fn create_project_arguments(
    _command: &'static str,
    positional: &[String],
) -> Result<Map<String, Value>, DomainError> {
    let title = positional
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROJECT_TITLE);
    Ok(object(json!({ "title": title })))
}

fn generate_ui_arguments(
    command: &'static str,
    positional: &[String],
) -> Result<Map<String, Value>, DomainError> {
    let project_id = required(command, "projectId", positional, 0)?;
    let prompt = required(command, "prompt", positional, 1)?;
    Ok(object(json!({
        "projectId": project_id,
        "prompt": prompt,
        "deviceType": DEVICE_TYPE,
        "modelId": MODEL_ID,
    })))
}

fn no_arguments(
    _command: &'static str,
    _positional: &[String],
) -> Result<Map<String, Value>, DomainError> {
    Ok(Map::new())
}
