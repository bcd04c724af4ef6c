//! CLI errors, one per way a shade-finder invocation can come up empty.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error, including a malformed `convert` color
//! - 10: name table file is malformed
//! - 11: name table file could not be read
//! - 12: input looked like a color name but the table does not know it
//! - 13: input is neither a full `#rrggbb` nor long enough to be a name
//! - 14: JSON output could not be written

use shade_finder_core::{ShadeError, DEFAULT_SEED, NAME_NOT_RECOGNIZED};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Malformed `--names` table.
    NameTable(String),
    /// Unreadable `--names` file.
    NameTableIo(String),
    /// The name that was looked up.
    UnknownName(String),
    /// The raw input that resolved to nothing.
    Incomplete(String),
    Output(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NameTable(_) => 10,
            CliError::NameTableIo(_) => 11,
            CliError::UnknownName(_) => 12,
            CliError::Incomplete(_) => 13,
            CliError::Output(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NameTable(msg) | CliError::NameTableIo(msg) => write!(f, "{msg}"),
            CliError::UnknownName(name) => write!(f, "{NAME_NOT_RECOGNIZED} (got {name:?})"),
            CliError::Incomplete(input) => write!(
                f,
                "enter a hex code like {DEFAULT_SEED} or a color name, got {input:?}"
            ),
            CliError::Output(msg) => write!(f, "failed to write JSON output: {msg}"),
        }
    }
}

/// Name-table loading is the only core call that can fail.
impl From<ShadeError> for CliError {
    fn from(e: ShadeError) -> Self {
        match e {
            ShadeError::Io(msg) => CliError::NameTableIo(msg),
            other => CliError::NameTable(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_table_routes_to_exit_11() {
        let err = CliError::from(ShadeError::Io("failed to read names.json".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("names.json"));
    }

    #[test]
    fn malformed_table_routes_to_exit_10() {
        let err = CliError::from(ShadeError::InvalidNameTable("entry \"Mud\"".into()));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("Mud"));
    }

    #[test]
    fn unknown_name_shows_the_hint_message() {
        let err = CliError::UnknownName("blurple".into());
        assert_eq!(err.exit_code(), 12);
        let msg = err.to_string();
        assert!(msg.starts_with(NAME_NOT_RECOGNIZED), "missing hint in: {msg}");
        assert!(msg.contains("\"blurple\""), "missing name in: {msg}");
    }

    #[test]
    fn incomplete_input_echoes_input_and_example() {
        let err = CliError::Incomplete("#34".into());
        assert_eq!(err.exit_code(), 13);
        let msg = err.to_string();
        assert!(msg.contains("\"#34\""), "missing input in: {msg}");
        assert!(msg.contains(DEFAULT_SEED), "missing example in: {msg}");
    }

    #[test]
    fn json_failure_routes_to_exit_14() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 14);
    }
}
