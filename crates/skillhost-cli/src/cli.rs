use clap::Parser;

use crate::config::Config;
use crate::session::{normalize_exit_commands, SessionOptions, SessionStyle};

/// SkillHost - interact with the demo agent from the terminal
#[derive(Parser, Debug)]
#[command(name = "skillhost")]
#[command(about = "Interact with the demo agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the skill to invoke for each message (default: EchoSkill)
    #[arg(long, value_name = "NAME")]
    pub skill: Option<String>,

    /// Commands that terminate the session (default: exit quit)
    #[arg(long, value_name = "WORD", num_args = 0..)]
    pub exit_commands: Option<Vec<String>>,

    /// Print replies as a transcript and the conversation history on exit
    #[arg(long)]
    pub transcript: bool,
}

impl Cli {
    /// Merge flags over the loaded configuration
    pub fn session_options(self, config: &Config) -> SessionOptions {
        let skill = self
            .skill
            .unwrap_or_else(|| config.cli.default_skill.clone());
        let exit_commands = self
            .exit_commands
            .unwrap_or_else(|| config.cli.exit_commands.clone());
        let style = if self.transcript {
            SessionStyle::Transcript
        } else {
            SessionStyle::Standard
        };

        SessionOptions {
            skill,
            exit_commands: normalize_exit_commands(exit_commands),
            style,
        }
    }
}
