//! 로컬 터미널(stdin/stdout) 세션 어댑터.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::line_editor::read_line;
use super::COMMAND_PROMPT;
use crate::application::ports::{SessionIo, Tone};
use crate::infrastructure::render::{error_line, paint, tone_color};

/// 블로킹 입력은 `spawn_blocking`으로 넘겨 런타임을 막지 않는다.
pub struct TerminalSession {
    color: bool,
    closed: bool,
}

impl TerminalSession {
    /// stdout이 TTY가 아니면 색상을 끈다.
    pub fn new(color: bool) -> Self {
        Self {
            color: color && io::stdout().is_terminal(),
            closed: false,
        }
    }

    async fn read(&mut self, label: &str, tone: Tone, prefill: Option<&str>) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        let label = label.to_string();
        let prefill = prefill.map(str::to_string);
        let color = if self.color { tone_color(tone) } else { None };

        tokio::task::spawn_blocking(move || read_line(&label, color, prefill.as_deref()))
            .await
            .context("terminal input task failed")?
    }
}

#[async_trait]
impl SessionIo for TerminalSession {
    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.color)
    }

    async fn log(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }

    async fn error(&mut self, message: &str) -> Result<()> {
        let mut stderr = io::stderr();
        writeln!(stderr, "{}", error_line(message, self.color))?;
        stderr.flush()?;
        Ok(())
    }

    async fn question(&mut self, label: &str, prefill: Option<&str>) -> Result<Option<String>> {
        self.read(label, Tone::Question, prefill).await
    }

    async fn read_command(&mut self) -> Result<Option<String>> {
        self.read(COMMAND_PROMPT, Tone::Accent, None).await
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
