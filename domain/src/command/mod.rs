//! CLI command table.
//!
//! Each command maps to one remote tool and a rule that turns positional
//! arguments into the tool's argument object.

pub mod spec;
