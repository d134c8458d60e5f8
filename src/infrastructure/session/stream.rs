//! 바이트 스트림(TCP 소켓 등) 위의 줄 단위 세션 어댑터.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf,
};
use tokio::net::TcpStream;
use tracing::debug;

use super::COMMAND_PROMPT;
use crate::application::ports::{SessionIo, Tone};
use crate::infrastructure::render::{error_line, paint};

pub type SocketSession = StreamSession<TcpStream>;

/// 한 연결의 읽기/쓰기 반쪽.
/// 소켓에서는 편집 가능한 초기값(prefill)을 지원하지 않는다.
pub struct StreamSession<S> {
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    color: bool,
    closed: bool,
}

impl<S> StreamSession<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    pub fn new(stream: S, color: bool) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(reader),
            writer,
            color,
            closed: false,
        }
    }

    async fn write_raw(&mut self, text: &str) -> Result<()> {
        // 닫힌 뒤의 출력은 조용히 버린다.
        if self.closed {
            return Ok(());
        }
        self.writer
            .write_all(text.as_bytes())
            .await
            .context("failed to write to session stream")?;
        self.writer
            .flush()
            .await
            .context("failed to flush session stream")?;
        Ok(())
    }

    async fn read_prompted(&mut self, label: &str) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        self.write_raw(label).await?;

        // UTF-8이 아닌 바이트는 대체 문자로 바꿔 세션을 유지한다.
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read from session stream")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[async_trait]
impl<S> SessionIo for StreamSession<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.color)
    }

    async fn log(&mut self, line: &str) -> Result<()> {
        self.write_raw(&format!("{line}\n")).await
    }

    async fn error(&mut self, message: &str) -> Result<()> {
        let line = error_line(message, self.color);
        self.write_raw(&format!("{line}\n")).await
    }

    async fn question(&mut self, label: &str, prefill: Option<&str>) -> Result<Option<String>> {
        if prefill.is_some() {
            debug!("prefill is not supported on stream sessions");
        }
        let label = paint(label, Tone::Question, self.color);
        self.read_prompted(&label).await
    }

    async fn read_command(&mut self) -> Result<Option<String>> {
        let prompt = paint(COMMAND_PROMPT, Tone::Accent, self.color);
        self.read_prompted(&prompt).await
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.writer
            .shutdown()
            .await
            .context("failed to shut down session stream")?;
        self.closed = true;
        Ok(())
    }
}
