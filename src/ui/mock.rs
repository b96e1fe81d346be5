//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use canister_env::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("A_CANISTER_ID=X\n");
//! ui.success("Resolved 1 canister");
//!
//! assert_eq!(ui.stdout(), "A_CANISTER_ID=X\n");
//! assert!(ui.successes().contains(&"Resolved 1 canister".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    stdout: String,
    messages: Vec<String>,
    fields: Vec<(String, String)>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Everything written as primary output.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured key-value fields.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Look up a captured field by key.
    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn field(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_channels() {
        let mut ui = MockUI::new();
        ui.output("out");
        ui.message("msg");
        ui.field("Network", "local");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");

        assert_eq!(ui.stdout(), "out");
        assert_eq!(ui.messages(), ["msg".to_string()]);
        assert_eq!(ui.field_value("Network"), Some("local"));
        assert_eq!(ui.successes(), ["ok".to_string()]);
        assert_eq!(ui.warnings(), ["careful".to_string()]);
        assert_eq!(ui.errors(), ["bad".to_string()]);
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
