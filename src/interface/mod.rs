//! Interface layer
//! 프로세스 CLI, 세션 REPL, TCP 서버 진입점.

pub mod cli;
pub mod server;
