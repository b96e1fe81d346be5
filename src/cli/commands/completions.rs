//! Shell completions generation.
//!
//! The `canister-env completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script for the configured shell.
    pub fn render(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "canister-env", &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.output(&self.render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let output = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash }).render();
        assert!(output.contains("canister-env"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh }).render();
        assert!(output.contains("canister-env"));
    }

    #[test]
    fn execute_writes_to_output() {
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell: Shell::Fish })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.stdout().contains("resolve"));
    }
}
