//! Error types for the shade-finder core.
//!
//! The converters and the variation generator never fail: they are total or
//! signal "not a color" with `Option`. `ShadeError` covers the edges where a
//! caller asked for a hard answer (string parsing, name-table loading).

use thiserror::Error;

/// Errors produced at the boundaries of the color engine.
#[derive(Debug, Error)]
pub enum ShadeError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color-name table could not be built from its source.
    #[error("invalid name table: {0}")]
    InvalidNameTable(String),

    /// A file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = ShadeError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_name_table_includes_message() {
        let err = ShadeError::InvalidNameTable("entry 3".into());
        let msg = format!("{err}");
        assert!(msg.contains("entry 3"), "missing message in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = ShadeError::Io("failed to read names.json".into());
        assert!(err.to_string().contains("names.json"));
    }

    #[test]
    fn shade_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShadeError>();
    }

    #[test]
    fn shade_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ShadeError>();
    }
}
