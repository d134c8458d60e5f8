//! quiz-trainer library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use std::sync::Arc;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::ports::ConfigRepository;
use application::usecases::inspect_config::InspectConfigUseCase;
use infrastructure::adapters::JsonConfigRepository;
use infrastructure::session::TerminalSession;
use interface::cli::{AppComposition, RunOptions, run_session};

/// 로컬 터미널에서 세션 하나를 실행한다.
pub async fn run_terminal(options: RunOptions) -> Result<()> {
    let config = JsonConfigRepository.load()?;
    let composition = AppComposition::open(&config, &options.store)?;
    let mut session = TerminalSession::new(config.color_enabled());
    run_session(&composition, &mut session).await
}

/// TCP 서버를 실행한다. `bind`가 없으면 설정값을 쓴다.
pub async fn serve(options: RunOptions, bind: Option<String>) -> Result<()> {
    let config = JsonConfigRepository.load()?;
    let composition = Arc::new(AppComposition::open(&config, &options.store)?);
    let bind = bind.unwrap_or_else(|| config.bind_addr());
    interface::server::serve(composition, &bind, config.color_enabled()).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    InspectConfigUseCase {
        config_repo: &JsonConfigRepository,
    }
    .execute()
}
