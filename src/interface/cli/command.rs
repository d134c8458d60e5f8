//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "quiz-trainer")]
#[command(about = "Store question/answer pairs and get quizzed on them")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON quiz table path (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Keep quizzes in memory only, nothing is persisted
    #[arg(long, global = true, conflicts_with = "store")]
    memory: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve quiz sessions over TCP, one session per connection
    Serve {
        /// Listen address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Show effective merged config
    Config,
}

/// 퀴즈 테이블을 어디에 둘지에 대한 선택.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    /// 설정 파일(또는 기본 데이터 디렉터리)의 JSON 테이블
    Configured,
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub store: StoreChoice,
}

#[derive(Debug)]
pub enum CliAction {
    Interactive(RunOptions),
    Serve {
        options: RunOptions,
        bind: Option<String>,
    },
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    pub fn into_action(self) -> Result<CliAction, String> {
        let store = match (self.memory, self.store) {
            (true, _) => StoreChoice::Memory,
            (false, Some(path)) => StoreChoice::File(path),
            (false, None) => StoreChoice::Configured,
        };
        let options = RunOptions { store };

        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig),
            Some(Commands::Serve { bind }) => {
                if let Some(addr) = &bind
                    && addr.trim().is_empty()
                {
                    return Err("--bind must not be empty".to_string());
                }
                Ok(CliAction::Serve { options, bind })
            }
            None => Ok(CliAction::Interactive(options)),
        }
    }
}
