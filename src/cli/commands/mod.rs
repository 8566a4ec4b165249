//! Command implementations for quickcal.
//!
//! Each command returns the text to print; `main` does the printing.

mod add;
mod agenda;
mod parse;

pub use add::add;
pub use agenda::agenda;
pub use parse::parse;

use clap_complete::Shell;

use crate::error::QuickcalError;
use crate::features::shell::{completion_install_instructions, generate_completions};

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, install: bool) -> Result<String, QuickcalError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
