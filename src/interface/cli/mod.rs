//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/세션 REPL/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod repl;

pub use command::{Cli, CliAction, RunOptions, StoreChoice};
pub use composition::AppComposition;
pub use repl::run_session;
