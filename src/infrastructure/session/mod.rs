//! 세션 입출력 포트 구현체(로컬 터미널 / 스트림 소켓).

mod line_editor;
mod stream;
mod terminal;

pub use stream::{SocketSession, StreamSession};
pub use terminal::TerminalSession;

/// 명령 입력 프롬프트 문구.
pub const COMMAND_PROMPT: &str = "quiz > ";
