use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quickcal")]
#[command(about = "Turn short Russian messages into calendar tasks and meetings")]
#[command(long_about = "quickcal - natural-language calendar entry

Parses informal Russian messages into a task or a one-hour meeting and
keeps them in a local calendar.

QUICK START:
  quickcal parse \"22.08 16:30 рыба\"      Show how a message is understood
  quickcal add \"завтра в 9 планёрка\"     Store a meeting for tomorrow 09:00
  quickcal add \"купить молоко\"           Store a task due today
  quickcal agenda                        List today's items

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quickcal <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter implied by `-v`, if any.
    #[must_use]
    pub const fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a message is understood, without storing it
    ///
    /// Prints the resulting task or meeting together with the date and
    /// time fragments that were recognized.
    ///
    /// # Examples
    ///
    ///   quickcal parse "22.08 16:30 рыба"
    ///   quickcal parse понедельник 9 планёрка
    ///   quickcal parse "в 16 рыба" --today 2025-01-10 -o json
    ///
    /// # Supported Patterns
    ///
    ///   Dates:   22.08, 22/08/26, 22-08-2026, сегодня, завтра, послезавтра,
    ///            понедельник, в среду, пт
    ///   Times:   16:30, в 16, на 9, 16
    #[command(alias = "p")]
    Parse(MessageArgs),

    /// Parse a message and store it in the local calendar
    ///
    /// A message with a date or time becomes a one-hour meeting; anything
    /// else becomes a task due at the start of the day.
    ///
    /// # Examples
    ///
    ///   quickcal add "22.08 16:30 рыба"
    ///   quickcal add купить молоко
    #[command(alias = "a")]
    Add(MessageArgs),

    /// List stored items for a day
    ///
    /// # Examples
    ///
    ///   quickcal agenda                      Today's items
    ///   quickcal agenda --date 2025-08-22    Items on a given day
    ///   quickcal today -o json               Output as JSON
    #[command(alias = "today")]
    Agenda(AgendaArgs),

    /// Generate shell completions
    ///
    /// Outputs the completion script for the specified shell.
    ///
    /// Example: quickcal completions bash > ~/.bash_completion.d/quickcal
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments shared by commands that take a message.
#[derive(Args)]
pub struct MessageArgs {
    /// The message, e.g. "22.08 16:30 рыба"; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Reference date for relative words (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

impl MessageArgs {
    /// The message as one line.
    #[must_use]
    pub fn message(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for the agenda command.
#[derive(Args)]
pub struct AgendaArgs {
    /// Day to list (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}
