//! Interactive read-eval-print loop over an [`AgentApp`]

use anyhow::Result;
use skillhost_skills::{AgentApp, EchoSkill};
use std::collections::HashSet;
use std::future::Future;
use std::io::{ErrorKind, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

const FAREWELL: &str = "Auf Wiedersehen!";
const TRANSCRIPT_FAREWELL: &str = "Exiting conversation...";

/// How the loop treats input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStyle {
    /// Skip blank lines, stop on an exit word without invoking the skill
    Standard,
    /// Reprompt on blank lines, answer exit words once, print the echo history at the end
    Transcript,
}

impl SessionStyle {
    fn banner(self) -> &'static str {
        match self {
            Self::Standard => {
                "Demo Agent CLI. Type your message and press enter. Type 'exit' to quit."
            }
            Self::Transcript => {
                "skillhost demo - type a message and the agent will answer.\n\
                 Press Ctrl+C or type 'exit' to quit.\n"
            }
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Standard => ">> ",
            Self::Transcript => "You: ",
        }
    }

    fn farewell(self) -> &'static str {
        match self {
            Self::Standard => FAREWELL,
            Self::Transcript => TRANSCRIPT_FAREWELL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Skill receiving every line
    pub skill: String,
    /// Lowercased words that end the session
    pub exit_commands: HashSet<String>,
    pub style: SessionStyle,
}

impl SessionOptions {
    fn is_exit_command(&self, input: &str) -> bool {
        self.exit_commands.contains(&input.trim().to_lowercase())
    }
}

/// Trim and lowercase exit words, dropping blank entries
pub fn normalize_exit_commands<I, S>(commands: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    commands
        .into_iter()
        .map(|command| command.as_ref().trim().to_lowercase())
        .filter(|command| !command.is_empty())
        .collect()
}

/// Run the loop until an exit word, end of input, or `shutdown` resolves
pub async fn run<R, W, F>(
    app: &mut AgentApp,
    options: &SessionOptions,
    mut input: R,
    output: &mut W,
    shutdown: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    let style = options.style;
    writeln!(output, "{}", style.banner())?;

    if !app.skills().contains(&options.skill) {
        writeln!(
            output,
            "Skill '{}' is not registered. Available skills:\n{}",
            options.skill,
            app.skills().describe()
        )?;
    }

    tokio::pin!(shutdown);
    let mut line = String::new();

    loop {
        write!(output, "{}", style.prompt())?;
        output.flush()?;

        line.clear();
        let read = tokio::select! {
            biased;
            _ = &mut shutdown => {
                write_interrupted(output, style)?;
                break;
            }
            read = input.read_line(&mut line) => read,
        };

        let read = match read {
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Skipping unreadable input line: {}", e);
                writeln!(output, "Fehler: {e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if read == 0 {
            debug!("End of input");
            writeln!(output)?;
            writeln!(output, "{}", style.farewell())?;
            break;
        }

        let user_input = line.trim_end_matches(['\r', '\n']);
        let is_exit = options.is_exit_command(user_input);

        if user_input.trim().is_empty() {
            if style == SessionStyle::Transcript {
                writeln!(output, "(please enter a message)")?;
            }
            continue;
        }

        if is_exit && style == SessionStyle::Standard {
            writeln!(output, "{FAREWELL}")?;
            break;
        }

        let outcome = tokio::select! {
            biased;
            _ = &mut shutdown => {
                write_interrupted(output, style)?;
                break;
            }
            outcome = app.invoke(&options.skill, user_input) => outcome,
        };

        match outcome {
            Ok(response) if style == SessionStyle::Transcript => {
                writeln!(output, "Agent: {response}")?;
            }
            Ok(response) => writeln!(output, "{response}")?,
            Err(e) => {
                warn!("Invocation failed: {}", e);
                writeln!(output, "Fehler: {e}")?;
            }
        }

        if is_exit {
            break;
        }
    }

    if style == SessionStyle::Transcript {
        write_history(app, output)?;
    }

    output.flush()?;
    Ok(())
}

fn write_interrupted<W: Write>(output: &mut W, style: SessionStyle) -> Result<()> {
    debug!("Session interrupted");
    writeln!(output)?;
    writeln!(output, "{}", style.farewell())?;
    Ok(())
}

fn write_history<W: Write>(app: &AgentApp, output: &mut W) -> Result<()> {
    let history = EchoSkill::conversation_history(app.storage());
    if history.is_empty() {
        return Ok(());
    }

    writeln!(output, "\nConversation history saved in storage:")?;
    for (idx, message) in history.iter().enumerate() {
        writeln!(output, " {}. {}", idx + 1, message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skillhost_skills::prelude::{SkillMetadata, Storage};
    use skillhost_skills::Skill;
    use std::future::{pending, ready};
    use std::time::Duration;

    /// Never answers
    struct StalledSkill(SkillMetadata);

    #[async_trait]
    impl Skill for StalledSkill {
        fn metadata(&self) -> &SkillMetadata {
            &self.0
        }

        async fn handle(&self, _message: &str, _storage: &mut dyn Storage) -> String {
            pending::<String>().await
        }
    }

    fn options(style: SessionStyle) -> SessionOptions {
        SessionOptions {
            skill: "EchoSkill".to_string(),
            exit_commands: normalize_exit_commands(["exit", "quit"]),
            style,
        }
    }

    fn echo_app() -> AgentApp {
        let mut app = AgentApp::new();
        app.register_skill(EchoSkill::new());
        app
    }

    async fn drive(app: &mut AgentApp, options: &SessionOptions, input: &str) -> String {
        drive_bytes(app, options, input.as_bytes()).await
    }

    async fn drive_bytes(app: &mut AgentApp, options: &SessionOptions, input: &[u8]) -> String {
        let mut output = Vec::new();
        run(app, options, input, &mut output, pending())
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_normalize_exit_commands() {
        let commands = normalize_exit_commands([" EXIT ", "", "  ", "Quit"]);
        assert_eq!(commands.len(), 2);
        assert!(commands.contains("exit"));
        assert!(commands.contains("quit"));
    }

    #[tokio::test]
    async fn test_standard_session_echoes_and_exits() {
        let mut app = echo_app();
        let output = drive(&mut app, &options(SessionStyle::Standard), "hello\n\n  \nQUIT\nignored\n").await;

        assert!(output.contains(">> hello\n"));
        assert!(output.ends_with("Auf Wiedersehen!\n"));
        assert!(!output.contains("ignored"));
        assert_eq!(EchoSkill::conversation_history(app.storage()), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_unknown_skill_reported_and_loop_continues() {
        let mut app = echo_app();
        let mut opts = options(SessionStyle::Standard);
        opts.skill = "Missing".to_string();

        let output = drive(&mut app, &opts, "one\ntwo\n").await;

        assert!(output.contains(
            "Skill 'Missing' is not registered. Available skills:\n\
             - EchoSkill: Returns the exact input back to the caller and stores a history of messages.\n"
        ));
        assert_eq!(output.matches("Fehler: Skill 'Missing' is not registered").count(), 2);
        assert!(output.ends_with("\nAuf Wiedersehen!\n"));
    }

    #[tokio::test]
    async fn test_registered_skill_not_listed() {
        let mut app = echo_app();
        let output = drive(&mut app, &options(SessionStyle::Standard), "").await;

        assert!(!output.contains("Available skills"));
    }

    #[tokio::test]
    async fn test_interrupt_while_skill_is_running() {
        let mut app = AgentApp::new();
        app.register_skill(StalledSkill(SkillMetadata::new("Stalled", "Never answers")));
        let mut opts = options(SessionStyle::Standard);
        opts.skill = "Stalled".to_string();
        let mut output = Vec::new();

        let session = run(
            &mut app,
            &opts,
            "hi\n".as_bytes(),
            &mut output,
            tokio::time::sleep(Duration::from_millis(50)),
        );
        let finished = tokio::time::timeout(Duration::from_secs(2), session).await;

        assert!(matches!(finished, Ok(Ok(()))));
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with(">> \nAuf Wiedersehen!\n"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_reported_and_loop_continues() {
        let mut app = echo_app();
        let output = drive_bytes(&mut app, &options(SessionStyle::Standard), b"\xff\xfe\nhello\n").await;

        let error_at = output.find("Fehler: ").unwrap();
        let echo_at = output.find("hello\n").unwrap();
        assert!(error_at < echo_at);
        assert!(output.ends_with("\nAuf Wiedersehen!\n"));
        assert_eq!(EchoSkill::conversation_history(app.storage()), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_end_of_input_says_farewell() {
        let mut app = echo_app();
        let output = drive(&mut app, &options(SessionStyle::Standard), "").await;

        assert!(output.ends_with(">> \nAuf Wiedersehen!\n"));
    }

    #[tokio::test]
    async fn test_interrupt_ends_session() {
        let mut app = echo_app();
        let mut output = Vec::new();

        run(&mut app, &options(SessionStyle::Standard), "hello\n".as_bytes(), &mut output, ready(()))
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with(">> \nAuf Wiedersehen!\n"));
        assert!(EchoSkill::conversation_history(app.storage()).is_empty());
    }

    #[tokio::test]
    async fn test_transcript_session() {
        let mut app = echo_app();
        let output = drive(&mut app, &options(SessionStyle::Transcript), "hi\n \nexit\nlater\n").await;

        assert!(output.contains("Agent: hi\n"));
        assert!(output.contains("(please enter a message)\n"));
        assert!(output.contains("Agent: exit\n"));
        assert!(!output.contains("later"));
        assert!(output.ends_with("Conversation history saved in storage:\n 1. hi\n 2. exit\n"));
    }

    #[tokio::test]
    async fn test_transcript_without_history() {
        let mut app = echo_app();
        let output = drive(&mut app, &options(SessionStyle::Transcript), "").await;

        assert!(output.ends_with("\nExiting conversation...\n"));
        assert!(!output.contains("Conversation history"));
    }
}
