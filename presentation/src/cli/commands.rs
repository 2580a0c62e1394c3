//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for invoke
#[derive(Parser, Debug)]
#[command(name = "invoke")]
#[command(author, version, about = "Invoke Stitch tools over authenticated JSON-RPC")]
#[command(long_about = r#"
Calls a tool on the Stitch JSON-RPC service using your ambient Google
credentials (Application Default Credentials).

Commands:
  create_project [title]          Create a project (default title: "New Project")
  generate_ui <projectId> <prompt>  Generate a mobile screen from a text prompt
  list_projects                   List existing projects

Configuration files are loaded from (in priority order):
1. STITCH_* environment variables, e.g. STITCH_SERVICE__TIMEOUT_SECS=60
2. --config <path>     Explicit config file
3. ./stitch.toml       Project-level config
4. ~/.config/stitch-invoke/config.toml   Global config

Example:
  invoke create_project "Health Tracker"
  invoke generate_ui 1234567890 "A dashboard showing daily step counts"
  invoke -v list_projects
"#)]
pub struct Cli {
    /// Command to run
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Positional arguments for the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_and_positional_arguments() {
        let cli = Cli::try_parse_from(["invoke", "generate_ui", "p1", "A login screen"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("generate_ui"));
        assert_eq!(cli.args, vec!["p1", "A login screen"]);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_before_command() {
        let cli = Cli::try_parse_from(["invoke", "-vv", "--quiet", "list_projects"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("list_projects"));
        assert!(cli.args.is_empty());
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn prompt_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["invoke", "generate_ui", "p1", "-dark mode-"]).unwrap();
        assert_eq!(cli.args, vec!["p1", "-dark mode-"]);
    }

    #[test]
    fn command_is_optional_for_show_config() {
        let cli = Cli::try_parse_from(["invoke", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
