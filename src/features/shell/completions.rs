//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::QuickcalError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, QuickcalError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "quickcal", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| QuickcalError::InvalidArgument(format!("completion script is not UTF-8: {e}")))
}

/// How to install the completion script for `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(quickcal completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
quickcal completions zsh > ~/.zsh/completions/_quickcal
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
quickcal completions fish > ~/.config/fish/completions/quickcal.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
quickcal completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
quickcal completions elvish > ~/.elvish/lib/quickcal.elv
# Then add to ~/.elvish/rc.elv:
use quickcal
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
