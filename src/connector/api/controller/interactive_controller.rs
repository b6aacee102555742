use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::{EnhancerSession, Mode, Notice};

use super::super::Container;

const HELP: &str = "\
Commands:
  /image    enhance prompts for image generation
  /video    enhance prompts for video generation
  /save     save the enhanced prompt as a text file
  /reset    clear mode, prompt and result
  /status   show the current session
  /quit     leave the session
  //text    enhance a prompt that itself starts with '/'
Any other line is taken as the prompt and enhanced right away.";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    SelectMode(Mode),
    Save,
    Reset,
    Status,
    Help,
    Quit,
    Unknown(String),
    Submit(String),
}

impl SessionCommand {
    fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return Some(Self::Submit(line.to_string()));
        };
        if command.starts_with('/') {
            return Some(Self::Submit(line.replacen("//", "/", 1)));
        }

        let command = match command.to_lowercase().as_str() {
            "image" | "images" => Self::SelectMode(Mode::Image),
            "video" | "videos" => Self::SelectMode(Mode::Video),
            "save" => Self::Save,
            "reset" => Self::Reset,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

pub struct InteractiveController<'a> {
    container: &'a Container,
}

impl<'a> InteractiveController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run(&self) -> Result<String> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run_with(stdin, &mut stdout).await
    }

    /// Drive one session from `input` until `/quit` or end of input.
    pub async fn run_with<R, W>(&self, input: R, out: &mut W) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let enhance = self.container.enhance_use_case();
        let export = self.container.export_use_case();
        let mut session = EnhancerSession::new();
        let mut lines = input.lines();

        writeln!(out, "Prompt Enhancer. Choose /image or /video, then type a prompt. /help for commands.")?;

        while let Some(line) = lines.next_line().await? {
            let Some(command) = SessionCommand::parse(&line) else {
                continue;
            };
            debug!("Session command: {:?}", command);

            match command {
                SessionCommand::SelectMode(mode) => match session.select_mode(mode) {
                    Ok(()) => writeln!(out, "{} mode", mode.label())?,
                    Err(notice) => write_notice(out, &notice)?,
                },
                SessionCommand::Submit(prompt) => {
                    if let Err(notice) = session.set_prompt(prompt) {
                        write_notice(out, &notice)?;
                        continue;
                    }
                    writeln!(out, "Enhancing...")?;
                    let notice = session.submit(&enhance).await;
                    write_notice(out, &notice)?;
                    if notice.is_success() {
                        if let Some(text) = session.enhanced_text() {
                            writeln!(out, "\n{}\n", text)?;
                        }
                    }
                }
                SessionCommand::Save => {
                    let notice = session.export(&export).await;
                    write_notice(out, &notice)?;
                }
                SessionCommand::Reset => match session.reset() {
                    Ok(()) => writeln!(out, "Session cleared")?,
                    Err(notice) => write_notice(out, &notice)?,
                },
                SessionCommand::Status => {
                    let mode = session.mode().map(|m| m.as_str()).unwrap_or("(none)");
                    writeln!(out, "State:  {}", session.state())?;
                    writeln!(out, "Mode:   {}", mode)?;
                    writeln!(out, "Prompt: {}", session.prompt())?;
                    writeln!(out, "Result: {}", if session.can_export() { "available" } else { "(none)" })?;
                }
                SessionCommand::Help => writeln!(out, "{}", HELP)?,
                SessionCommand::Unknown(name) => {
                    write_notice(out, &Notice::validation(format!("Unknown command '/{}'", name)))?
                }
                SessionCommand::Quit => break,
            }
            out.flush()?;
        }

        Ok("Bye.".to_string())
    }
}

fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> std::io::Result<()> {
    writeln!(out, "{}", notice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_prompts() {
        assert_eq!(SessionCommand::parse("   "), None);
        assert_eq!(
            SessionCommand::parse("/Image"),
            Some(SessionCommand::SelectMode(Mode::Image))
        );
        assert_eq!(SessionCommand::parse(" /save "), Some(SessionCommand::Save));
        assert_eq!(
            SessionCommand::parse("/frobnicate"),
            Some(SessionCommand::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            SessionCommand::parse(" a cat on a roof "),
            Some(SessionCommand::Submit(" a cat on a roof ".to_string()))
        );
    }

    #[test]
    fn double_slash_submits_a_prompt_starting_with_slash() {
        assert_eq!(
            SessionCommand::parse("//r/earthporn style sunset"),
            Some(SessionCommand::Submit("/r/earthporn style sunset".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("  //imagine a lighthouse "),
            Some(SessionCommand::Submit("  /imagine a lighthouse ".to_string()))
        );
    }
}
