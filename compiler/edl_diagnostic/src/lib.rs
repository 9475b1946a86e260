//! Structured analysis errors for the EDL processor.
//!
//! Every parse or validation failure is one [`EdlError`]: a code from the
//! closed taxonomy, the file it happened in, a 1-based line/column, and the
//! message arguments. Formatting is a pure function of `(code, args)` —
//! nothing else feeds into the rendered text, so messages are reproducible
//! from the stored value alone.
//!
//! Errors are values, not control-flow effects: the parser returns the first
//! one it constructs and unwinds naturally through `?`.

mod error_code;

pub use error_code::ErrorCode;

use std::fmt;

/// One EDL analysis failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdlError {
    code: ErrorCode,
    file: String,
    line: u32,
    column: u32,
    args: Vec<String>,
}

impl EdlError {
    /// Create an error at a source position. Message arguments are attached
    /// with [`EdlError::with_arg`].
    #[cold]
    pub fn new(code: ErrorCode, file: impl Into<String>, line: u32, column: u32) -> Self {
        EdlError {
            code,
            file: file.into(),
            line,
            column,
            args: Vec::new(),
        }
    }

    /// Attach the next positional message argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The rendered message, without the position prefix.
    pub fn message(&self) -> String {
        format_message(self.code, &self.args)
    }
}

/// Render a message from a code and its arguments.
///
/// Substitutes `{0}`, `{1}`, ... in the code's template. Unfilled slots are
/// left verbatim so a missing argument is visible rather than silent.
pub fn format_message(code: ErrorCode, args: &[String]) -> String {
    let mut message = code.template().to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}

impl fmt::Display for EdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: error[{}]: {}",
            self.file,
            self.line,
            self.column,
            self.code,
            self.message()
        )
    }
}

impl std::error::Error for EdlError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formatting_is_positional() {
        let rendered = format_message(
            ErrorCode::ExpectedTokenNotFound,
            &["{".to_string(), ";".to_string()],
        );
        assert_eq!(rendered, "expected `{` but found `;`");
    }

    #[test]
    fn display_includes_position_and_code() {
        let error = EdlError::new(ErrorCode::DuplicateTypeDefinition, "sample.edl", 4, 12)
            .with_arg("Color");
        assert_eq!(
            error.to_string(),
            "sample.edl:4:12: error[DuplicateTypeDefinition]: type `Color` is already defined"
        );
    }

    #[test]
    fn missing_args_stay_visible() {
        let rendered = format_message(ErrorCode::DuplicateFieldOrParameter, &["x".to_string()]);
        assert_eq!(rendered, "`x` is already declared in `{1}`");
    }
}
